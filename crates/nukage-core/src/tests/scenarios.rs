//! Whole-scenario integration tests through the public surface.

use glam::Vec2;

use super::helpers::{place_item, place_monster, solo_sim};
use crate::entity::MobjFlags;
use crate::error::GameDataError;
use crate::event::Event;
use crate::info::{MobjKind, SpriteTag};
use crate::msg::MessageId;
use crate::player::{AmmoKind, PowerKind, WeaponKind, BONUS_CAP, MAX_HEALTH};
use crate::rules::{DeathmatchMode, GameRules, Skill};

#[test]
fn shoot_a_trooper_and_loot_its_clip() {
    let (mut sim, pid, body) = solo_sim(GameRules::default(), 1);
    let trooper = place_monster(&mut sim, MobjKind::Trooper);

    sim.damage_mobj(trooper, Some(body), Some(body), 25);
    assert!(sim.world().get(trooper).unwrap().is_corpse());
    assert_eq!(sim.world().player(pid).unwrap().kill_count, 1);

    let drop = sim
        .world()
        .mobjs()
        .find(|m| m.kind == MobjKind::Clip)
        .expect("trooper drops a clip")
        .id();
    // Move the drop into reach; the kill left it where the trooper stood.
    sim.world_mut().get_mut(drop).unwrap().pos = Vec2::ZERO;

    let before = sim.world().player(pid).unwrap().ammo(AmmoKind::Clip);
    sim.touch_special(drop, body).unwrap();
    // A dropped clip is half empty.
    assert_eq!(
        sim.world().player(pid).unwrap().ammo(AmmoKind::Clip),
        before + AmmoKind::Clip.clip_load() / 2
    );
    assert!(sim.world().get(drop).is_none());
}

#[test]
fn easiest_skill_doubles_ammo_pickups() {
    let rules = GameRules {
        skill: Skill::Baby,
        ..GameRules::default()
    };
    let (mut sim, pid, body) = solo_sim(rules, 1);
    let clip = place_item(&mut sim, MobjKind::Clip);
    let before = sim.world().player(pid).unwrap().ammo(AmmoKind::Clip);
    sim.touch_special(clip, body).unwrap();
    assert_eq!(
        sim.world().player(pid).unwrap().ammo(AmmoKind::Clip),
        before + 2 * AmmoKind::Clip.clip_load()
    );
}

#[test]
fn health_bonus_exceeds_the_normal_cap() {
    let (mut sim, pid, body) = solo_sim(GameRules::default(), 1);
    for _ in 0..2 {
        let bonus = place_item(&mut sim, MobjKind::HealthBonus);
        sim.touch_special(bonus, body).unwrap();
    }
    let p = sim.world().player(pid).unwrap();
    assert_eq!(p.health, MAX_HEALTH + 2);
    assert_eq!(sim.world().get(body).unwrap().health, MAX_HEALTH + 2);
    // Two counted items, two helpings of flash.
    assert_eq!(p.item_count, 2);
    assert!(p.bonus_count > 0);
}

#[test]
fn soulsphere_respects_the_bonus_cap() {
    let (mut sim, pid, body) = solo_sim(GameRules::default(), 1);
    for _ in 0..3 {
        let sphere = place_item(&mut sim, MobjKind::Soulsphere);
        sim.touch_special(sphere, body).unwrap();
    }
    assert_eq!(sim.world().player(pid).unwrap().health, BONUS_CAP);
}

#[test]
fn megasphere_needs_the_commercial_release() {
    let (mut sim, pid, body) = solo_sim(GameRules::default(), 1);
    let sphere = place_item(&mut sim, MobjKind::Megasphere);
    sim.touch_special(sphere, body).unwrap();
    // Declined: still in the world, nothing granted.
    assert!(sim.world().get(sphere).is_some());
    assert_eq!(sim.world().player(pid).unwrap().health, MAX_HEALTH);
}

#[test]
fn berserk_forces_the_fists_up() {
    let (mut sim, pid, body) = solo_sim(GameRules::default(), 1);
    let pack = place_item(&mut sim, MobjKind::Berserk);
    sim.touch_special(pack, body).unwrap();
    let p = sim.world().player(pid).unwrap();
    assert!(p.power_active(PowerKind::Strength));
    assert_eq!(p.pending_weapon, Some(WeaponKind::Fist));
    assert_eq!(p.health, MAX_HEALTH);
}

#[test]
fn backpack_doubles_capacity_only_once() {
    let (mut sim, pid, body) = solo_sim(GameRules::default(), 1);
    for _ in 0..2 {
        let pack = place_item(&mut sim, MobjKind::Backpack);
        sim.touch_special(pack, body).unwrap();
    }
    let p = sim.world().player(pid).unwrap();
    assert!(p.backpack);
    assert_eq!(p.max_ammo(AmmoKind::Shell), 2 * AmmoKind::Shell.base_max());
    // Each backpack still granted one load of everything.
    assert_eq!(p.ammo(AmmoKind::Shell), 2 * AmmoKind::Shell.clip_load());
}

#[test]
fn keys_persist_in_multiplayer_worlds() {
    let rules = GameRules {
        netgame: true,
        ..GameRules::default()
    };
    let (mut sim, pid, body) = solo_sim(rules, 1);
    let card = place_item(&mut sim, MobjKind::RedCard);
    sim.touch_special(card, body).unwrap();
    assert!(sim
        .world()
        .player(pid)
        .unwrap()
        .has_card(crate::player::KeyCard::RedCard));
    assert!(sim.world().get(card).is_some());

    // Re-touching grants nothing new and stays silent.
    sim.world_mut().player_mut(pid).unwrap().message = None;
    sim.touch_special(card, body).unwrap();
    assert_eq!(sim.world().player(pid).unwrap().message, None);
}

#[test]
fn weapons_stay_in_deathmatch() {
    let rules = GameRules {
        netgame: true,
        deathmatch: DeathmatchMode::WeaponsStay,
        ..GameRules::default()
    };
    let (mut sim, pid, body) = solo_sim(rules, 1);
    let shotgun = place_item(&mut sim, MobjKind::Shotgun);
    sim.touch_special(shotgun, body).unwrap();

    let p = sim.world().player(pid).unwrap();
    assert!(p.owns_weapon(WeaponKind::Shotgun));
    // Deathmatch stock: five loads.
    assert_eq!(p.ammo(AmmoKind::Shell), 5 * AmmoKind::Shell.clip_load());
    assert_eq!(p.pending_weapon, Some(WeaponKind::Shotgun));
    assert!(p.bonus_count > 0);
    // The weapon itself stays for the next player through.
    assert!(sim.world().get(shotgun).is_some());
    // No acceptance: no pickup event, but the fanfare still played,
    // non-positionally like every pickup sound.
    let events = sim.take_events();
    assert!(!events
        .iter()
        .any(|e| matches!(e, Event::ItemPickedUp { .. })));
    assert!(events.iter().any(|e| matches!(
        e,
        Event::Sound {
            origin: None,
            sound: crate::info::SoundId::WeaponUp
        }
    )));
}

#[test]
fn owned_stayed_weapon_is_ignored() {
    let rules = GameRules {
        netgame: true,
        deathmatch: DeathmatchMode::WeaponsStay,
        ..GameRules::default()
    };
    let (mut sim, pid, body) = solo_sim(rules, 1);
    let shotgun = place_item(&mut sim, MobjKind::Shotgun);
    sim.touch_special(shotgun, body).unwrap();
    let ammo_after_first = sim.world().player(pid).unwrap().ammo(AmmoKind::Shell);
    sim.touch_special(shotgun, body).unwrap();
    // Second touch grants nothing at all.
    assert_eq!(
        sim.world().player(pid).unwrap().ammo(AmmoKind::Shell),
        ammo_after_first
    );
}

#[test]
fn dead_players_pick_up_nothing() {
    let (mut sim, pid, body) = solo_sim(GameRules::default(), 1);
    sim.damage_mobj(body, None, None, 5000);
    let medikit = place_item(&mut sim, MobjKind::Medikit);
    sim.touch_special(medikit, body).unwrap();
    assert!(sim.world().get(medikit).is_some());
    assert_eq!(sim.world().player(pid).unwrap().health, 0);
}

#[test]
fn out_of_reach_specials_are_not_grabbed() {
    let (mut sim, pid, body) = solo_sim(GameRules::default(), 1);
    let medikit = place_item(&mut sim, MobjKind::Medikit);
    // Hoist the item well above the player's head.
    sim.world_mut().get_mut(medikit).unwrap().z = 100.0;
    sim.world_mut().player_mut(pid).unwrap().health = 50;
    sim.world_mut().get_mut(body).unwrap().health = 50;
    sim.touch_special(medikit, body).unwrap();
    assert_eq!(sim.world().player(pid).unwrap().health, 50);
    assert!(sim.world().get(medikit).is_some());
}

#[test]
fn unrecognized_special_is_a_game_data_error() {
    let (mut sim, _, body) = solo_sim(GameRules::default(), 1);
    let lamp = place_item(&mut sim, MobjKind::Candelabra);
    // Corrupt the tables: mark a non-gettable thing as special.
    sim.world_mut()
        .get_mut(lamp)
        .unwrap()
        .flags
        .insert(MobjFlags::SPECIAL);
    let err = sim.touch_special(lamp, body).unwrap_err();
    assert_eq!(err, GameDataError::UnknownPickup(SpriteTag::Candelabra));
}

#[test]
fn survived_fight_sets_all_the_hud_state() {
    let (mut sim, pid, body) = solo_sim(GameRules::default(), 1);
    let armor = place_item(&mut sim, MobjKind::GreenArmor);
    sim.touch_special(armor, body).unwrap();
    assert_eq!(
        sim.world().player(pid).unwrap().message,
        Some(MessageId::GotArmor)
    );

    let imp = place_monster(&mut sim, MobjKind::Imp);
    sim.damage_mobj(body, Some(imp), Some(imp), 21);
    let p = sim.world().player(pid).unwrap();
    // Green armor swallows a third of 21.
    assert_eq!(p.armor_points, 93);
    assert_eq!(p.health, MAX_HEALTH - 14);
    assert_eq!(p.attacker, Some(imp));
    assert!(p.damage_count > 0);
}
