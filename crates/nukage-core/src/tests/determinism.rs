//! Replay determinism: the same seed and call sequence must reproduce the
//! world and the event log bit for bit, drawing the same number of PRNG
//! bytes along the way.

use glam::Vec2;

use crate::automap::{AutomapCommand, PanDir};
use crate::event::Event;
use crate::info::MobjKind;
use crate::rules::GameRules;
use crate::simulation::Simulation;
use crate::world::World;

/// One scripted fight: pickups, a brawl, a death, an automap session.
fn scripted_run(seed: u64) -> (World, Vec<Event>, u64) {
    let mut sim = Simulation::new(GameRules::default(), seed);
    let (_, body) = sim.world_mut().spawn_player(Vec2::ZERO);
    let imp = sim.world_mut().spawn(MobjKind::Imp, Vec2::new(96.0, 0.0), 0.0);
    let demon = sim.world_mut().spawn(MobjKind::Demon, Vec2::new(-64.0, 32.0), 0.0);
    let armor = sim.world_mut().spawn(MobjKind::GreenArmor, Vec2::ZERO, 0.0);
    let medikit = sim.world_mut().spawn(MobjKind::Medikit, Vec2::ZERO, 0.0);

    sim.touch_special(armor, body).unwrap();
    sim.damage_mobj(body, Some(imp), Some(imp), 15);
    sim.damage_mobj(imp, Some(body), Some(body), 30);
    sim.damage_mobj(imp, Some(body), Some(body), 40);
    sim.touch_special(medikit, body).unwrap();
    sim.damage_mobj(demon, Some(body), Some(body), 60);

    sim.automap_command(AutomapCommand::Toggle);
    sim.automap_command(AutomapCommand::FollowToggle);
    sim.automap_command(AutomapCommand::Pan {
        dir: PanDir::Up,
        pressed: true,
    });
    sim.automap_command(AutomapCommand::PlaceMark);
    for _ in 0..10 {
        sim.advance_tick();
    }

    let events = sim.take_events();
    let draws = sim.rng_draws();
    let world = sim.world().clone();
    (world, events, draws)
}

#[test]
fn same_seed_reproduces_everything() {
    let (world_a, events_a, draws_a) = scripted_run(0x5EED);
    let (world_b, events_b, draws_b) = scripted_run(0x5EED);
    assert_eq!(world_a, world_b);
    assert_eq!(events_a, events_b);
    assert_eq!(draws_a, draws_b);

    // Bit-identical through serialization as well.
    let json_a = serde_json::to_string(&world_a).unwrap();
    let json_b = serde_json::to_string(&world_b).unwrap();
    assert_eq!(json_a, json_b);
}

#[test]
fn surviving_hit_draws_exactly_one_byte() {
    let mut sim = Simulation::new(GameRules::default(), 3);
    let imp = sim.world_mut().spawn(MobjKind::Imp, Vec2::ZERO, 0.0);
    let before = sim.rng_draws();
    // No inflictor: no knockback, so the only draw is the pain check.
    sim.damage_mobj(imp, None, None, 10);
    assert_eq!(sim.rng_draws(), before + 1);
}

#[test]
fn killing_hit_draws_exactly_one_byte() {
    let mut sim = Simulation::new(GameRules::default(), 3);
    let imp = sim.world_mut().spawn(MobjKind::Imp, Vec2::ZERO, 0.0);
    let before = sim.rng_draws();
    // The kill path skips the pain check and fuzzes the death tics once.
    sim.damage_mobj(imp, None, None, 500);
    assert_eq!(sim.rng_draws(), before + 1);
}

#[test]
fn fall_forward_coin_flip_precedes_the_death_draw() {
    let mut sim = Simulation::new(GameRules::default(), 3);
    // Weak killing blow from far below: all fall-forward preconditions
    // hold, so the coin flip is consumed before the death-tics byte.
    let imp = sim.world_mut().spawn(MobjKind::Imp, Vec2::new(30.0, 0.0), 0.0);
    sim.world_mut().get_mut(imp).unwrap().z = 100.0;
    sim.world_mut().get_mut(imp).unwrap().health = 5;
    let rocket = sim.world_mut().spawn(MobjKind::Rocket, Vec2::ZERO, 0.0);
    let before = sim.rng_draws();
    sim.damage_mobj(imp, Some(rocket), None, 10);
    assert_eq!(sim.rng_draws(), before + 2);
    assert!(sim.world().get(imp).unwrap().is_corpse());
}
