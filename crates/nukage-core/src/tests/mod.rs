//! Crate-level integration tests: whole-scenario runs through the public
//! [`crate::simulation::Simulation`] surface, plus determinism and
//! property checks. Per-module unit tests live next to their modules.

mod determinism;
mod helpers;
mod scenarios;
