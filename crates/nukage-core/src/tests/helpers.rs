//! Shared factories for the integration tests.

use glam::Vec2;

use crate::entity::EntityId;
use crate::info::MobjKind;
use crate::player::PlayerId;
use crate::rules::GameRules;
use crate::simulation::Simulation;

/// A simulation with one player spawned at the origin.
pub fn solo_sim(rules: GameRules, seed: u64) -> (Simulation, PlayerId, EntityId) {
    let mut sim = Simulation::new(rules, seed);
    let (pid, body) = sim.world_mut().spawn_player(Vec2::ZERO);
    (sim, pid, body)
}

/// Spawns a pickup within reach of the origin.
pub fn place_item(sim: &mut Simulation, kind: MobjKind) -> EntityId {
    sim.world_mut().spawn(kind, Vec2::ZERO, 0.0)
}

/// Spawns a monster at a distance.
pub fn place_monster(sim: &mut Simulation, kind: MobjKind) -> EntityId {
    sim.world_mut().spawn(kind, Vec2::new(128.0, 0.0), 0.0)
}
