//! Deterministic combat and pickup rule engine.
//!
//! `nukage-core` implements the item-economy and damage rules of a classic
//! 2.5-D shooter as a pure, single-threaded state machine: the pickup
//! resolution chain, the damage pipeline with its kill sub-routine, and
//! the automap overlay state. Rendering, audio, input mapping, level
//! geometry, and AI live in the embedding game; the core communicates
//! with them through the [`event::Event`] log.
//!
//! # Determinism
//!
//! Given the same [`rules::GameRules`], the same PRNG seed, and the same
//! sequence of entry-point calls, the engine produces bit-identical world
//! state and an identical event log. All randomness flows through one
//! [`rng::SimRng`]; iteration is ordered; there is no parallelism and no
//! interior mutability.
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use nukage_core::info::MobjKind;
//! use nukage_core::rules::GameRules;
//! use nukage_core::simulation::Simulation;
//!
//! let mut sim = Simulation::new(GameRules::default(), 0xC0FFEE);
//! let (pid, body) = sim.world_mut().spawn_player(Vec2::ZERO);
//! let medikit = sim.world_mut().spawn(MobjKind::Medikit, Vec2::ZERO, 0.0);
//!
//! sim.damage_mobj(body, None, None, 30);
//! sim.touch_special(medikit, body).unwrap();
//!
//! assert_eq!(sim.world().player(pid).unwrap().health, 95);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod automap;
pub mod damage;
pub mod entity;
pub mod error;
pub mod event;
pub mod info;
pub mod msg;
pub mod pickup;
pub mod player;
pub mod rng;
pub mod rules;
pub mod simulation;
pub mod world;

pub use entity::{EntityId, Mobj, MobjFlags};
pub use error::GameDataError;
pub use event::Event;
pub use player::{Player, PlayerId};
pub use rules::GameRules;
pub use simulation::Simulation;
pub use world::World;

#[cfg(test)]
mod tests;
