//! Grant policies for ammo, weapons, health, armor, and power-ups.
//!
//! Every function returns `true` when something was actually granted and
//! `false` for an ordinary rejection (already full, not an improvement).
//! Rejections are never errors; they simply leave state untouched.

use tracing::debug;

use crate::entity::{Mobj, MobjFlags};
use crate::event::Event;
use crate::info::SoundId;
use crate::player::{
    AmmoKind, ArmorTier, Player, PowerKind, WeaponKind, BONUS_ADD, BONUS_CAP, MAX_HEALTH,
};
use crate::rules::{GameRules, Skill};

/// Mutable surroundings a grant may touch beyond the player itself.
pub struct PickupScope<'a> {
    /// Session rules.
    pub rules: &'a GameRules,
    /// Whether the toucher is the locally controlled player.
    pub is_console_player: bool,
    /// Side-effect log.
    pub events: &'a mut Vec<Event>,
}

/// Grants `clip_loads` clip loads of an ammo kind.
///
/// A count of 0 means half a clip load, rounded down. Quantities double on
/// the easiest and hardest difficulty tiers. Returns `false` without any
/// state change when the stock is already at capacity.
///
/// If the player's stock was exactly zero before the grant, the pending
/// weapon auto-switches to the preferred weapon for that ammo kind, but
/// only while a fallback weapon (fist, or fist/pistol) is raised.
pub fn give_ammo(player: &mut Player, kind: AmmoKind, clip_loads: i32, skill: Skill) -> bool {
    if player.ammo(kind) == player.max_ammo(kind) {
        return false;
    }

    let mut num = if clip_loads == 0 {
        kind.clip_load() / 2
    } else {
        clip_loads * kind.clip_load()
    };
    if skill.doubles_ammo() {
        num <<= 1;
    }

    let old = player.ammo(kind);
    player.set_ammo(kind, old + num);
    debug!(?kind, granted = num, stock = player.ammo(kind), "ammo granted");

    if old != 0 {
        // Already had some: never second-guess the current weapon choice.
        return true;
    }

    // Stock was dry; switch toward the best weapon that uses this kind.
    match kind {
        AmmoKind::Clip => {
            if player.ready_weapon == WeaponKind::Fist {
                player.pending_weapon = Some(if player.owns_weapon(WeaponKind::Chaingun) {
                    WeaponKind::Chaingun
                } else {
                    WeaponKind::Pistol
                });
            }
        }
        AmmoKind::Shell => {
            if matches!(player.ready_weapon, WeaponKind::Fist | WeaponKind::Pistol)
                && player.owns_weapon(WeaponKind::Shotgun)
            {
                player.pending_weapon = Some(WeaponKind::Shotgun);
            }
        }
        AmmoKind::Cell => {
            if matches!(player.ready_weapon, WeaponKind::Fist | WeaponKind::Pistol)
                && player.owns_weapon(WeaponKind::PlasmaRifle)
            {
                player.pending_weapon = Some(WeaponKind::PlasmaRifle);
            }
        }
        AmmoKind::Missile => {
            if player.ready_weapon == WeaponKind::Fist
                && player.owns_weapon(WeaponKind::RocketLauncher)
            {
                player.pending_weapon = Some(WeaponKind::RocketLauncher);
            }
        }
    }
    true
}

/// Grants a weapon, with the multiplayer weapon-stay rule.
///
/// In sessions where placed weapons persist, touching one that is not yet
/// owned grants partial ammo, a pickup flash, and the pending switch, then
/// still returns `false` so the caller leaves the object in the world.
/// Otherwise ammo is granted (one clip load if the weapon was dropped by a
/// dying enemy, two if placed) and the weapon itself if not already owned;
/// `true` requires at least one of the two to have succeeded.
pub fn give_weapon(
    player: &mut Player,
    weapon: WeaponKind,
    dropped: bool,
    scope: &mut PickupScope<'_>,
) -> bool {
    if scope.rules.weapons_stay(dropped) {
        if player.owns_weapon(weapon) {
            return false;
        }

        player.bonus_count += BONUS_ADD;
        player.give_weapon_owned(weapon);
        let clip_loads = if scope.rules.is_deathmatch() { 5 } else { 2 };
        if let Some(kind) = weapon.ammo() {
            let _ = give_ammo(player, kind, clip_loads, scope.rules.skill);
        }
        player.pending_weapon = Some(weapon);
        if scope.is_console_player {
            // Routed non-positionally, like the acceptance-tail sound.
            scope.events.push(Event::Sound {
                origin: None,
                sound: SoundId::WeaponUp,
            });
        }
        debug!(?weapon, "weapon taken but left in world (weapons stay)");
        return false;
    }

    let gave_ammo = weapon.ammo().is_some_and(|kind| {
        give_ammo(player, kind, if dropped { 1 } else { 2 }, scope.rules.skill)
    });

    let gave_weapon = if player.owns_weapon(weapon) {
        false
    } else {
        player.give_weapon_owned(weapon);
        player.pending_weapon = Some(weapon);
        true
    };

    gave_weapon || gave_ammo
}

/// Grants health points up to [`MAX_HEALTH`], mirroring into the body.
///
/// Returns `false` when already at or above the cap.
pub fn give_body(player: &mut Player, body: &mut Mobj, num: i32) -> bool {
    if player.health >= MAX_HEALTH {
        return false;
    }
    player.health = (player.health + num).min(MAX_HEALTH);
    body.health = player.health;
    true
}

/// Overwrites armor with a full suit of `tier`.
///
/// Rejected when the current points already meet or exceed the new suit;
/// otherwise both tier and points are replaced, never added.
pub fn give_armor(player: &mut Player, tier: ArmorTier) -> bool {
    let hits = tier.hits();
    if player.armor_points >= hits {
        return false;
    }
    player.armor_type = tier;
    player.armor_points = hits;
    true
}

/// Grants a power-up.
///
/// Timed power-ups overwrite their countdown unconditionally; invisibility
/// also sets the body's shadow flag. Strength grants a one-time 100-point
/// health bonus and stays active for the rest of the level. The full map
/// is the only one that rejects a re-grant.
pub fn give_power(player: &mut Player, body: &mut Mobj, kind: PowerKind) -> bool {
    match kind {
        PowerKind::Invulnerability | PowerKind::IronFeet | PowerKind::Infrared => {
            player.set_power(kind, kind.duration());
            true
        }
        PowerKind::Invisibility => {
            player.set_power(kind, kind.duration());
            body.flags.insert(MobjFlags::SHADOW);
            true
        }
        PowerKind::Strength => {
            let _ = give_body(player, body, 100);
            player.set_power(kind, kind.duration());
            true
        }
        PowerKind::Allmap => {
            if player.power_active(kind) {
                return false;
            }
            player.set_power(kind, kind.duration());
            true
        }
    }
}

/// Applies a backpack: on first pickup every ammo maximum is permanently
/// doubled, then one clip load of every kind is granted regardless of
/// current stock.
pub fn give_backpack(player: &mut Player, skill: Skill) {
    if !player.backpack {
        for kind in AmmoKind::ALL {
            player.double_max_ammo(kind);
        }
        player.backpack = true;
    }
    for kind in AmmoKind::ALL {
        let _ = give_ammo(player, kind, 1, skill);
    }
}

/// Adds a +1 health bonus, allowed past [`MAX_HEALTH`] up to [`BONUS_CAP`].
pub fn give_health_bonus(player: &mut Player, body: &mut Mobj) {
    player.health = (player.health + 1).min(BONUS_CAP);
    body.health = player.health;
}

/// Adds a +1 armor bonus up to [`BONUS_CAP`]; bare-skinned players get
/// tier-1 absorption so the point has an absorption fraction to use.
pub fn give_armor_bonus(player: &mut Player) {
    player.armor_points = (player.armor_points + 1).min(BONUS_CAP);
    if player.armor_type == ArmorTier::None {
        player.armor_type = ArmorTier::Green;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityId;
    use crate::info::MobjKind;
    use glam::Vec2;

    fn player() -> Player {
        Player::new(EntityId::new(0))
    }

    fn body() -> Mobj {
        Mobj::new(EntityId::new(0), MobjKind::Player, Vec2::ZERO, 0.0)
    }

    mod give_ammo_tests {
        use super::*;

        #[test]
        fn rejects_at_capacity() {
            let mut p = player();
            p.set_ammo(AmmoKind::Clip, p.max_ammo(AmmoKind::Clip));
            assert!(!give_ammo(&mut p, AmmoKind::Clip, 1, Skill::Medium));
            assert_eq!(p.ammo(AmmoKind::Clip), 200);
        }

        #[test]
        fn zero_clips_means_half_a_load() {
            let mut p = player();
            p.set_ammo(AmmoKind::Clip, 20);
            assert!(give_ammo(&mut p, AmmoKind::Clip, 0, Skill::Medium));
            assert_eq!(p.ammo(AmmoKind::Clip), 25);
        }

        #[test]
        fn easiest_and_hardest_double_quantity() {
            for skill in [Skill::Baby, Skill::Nightmare] {
                let mut p = player();
                p.set_ammo(AmmoKind::Shell, 1);
                assert!(give_ammo(&mut p, AmmoKind::Shell, 1, skill));
                assert_eq!(p.ammo(AmmoKind::Shell), 9);
            }
        }

        #[test]
        fn grant_clamps_at_capacity() {
            let mut p = player();
            p.set_ammo(AmmoKind::Missile, 49);
            assert!(give_ammo(&mut p, AmmoKind::Missile, 5, Skill::Medium));
            assert_eq!(p.ammo(AmmoKind::Missile), 50);
        }

        #[test]
        fn dry_shell_pickup_switches_to_owned_shotgun() {
            let mut p = player();
            p.give_weapon_owned(WeaponKind::Shotgun);
            assert_eq!(p.ammo(AmmoKind::Shell), 0);
            assert!(give_ammo(&mut p, AmmoKind::Shell, 1, Skill::Medium));
            assert_eq!(p.pending_weapon, Some(WeaponKind::Shotgun));
        }

        #[test]
        fn dry_clip_pickup_prefers_chaingun_over_pistol() {
            let mut p = player();
            p.set_ammo(AmmoKind::Clip, 0);
            p.ready_weapon = WeaponKind::Fist;
            assert!(give_ammo(&mut p, AmmoKind::Clip, 1, Skill::Medium));
            assert_eq!(p.pending_weapon, Some(WeaponKind::Pistol));

            let mut p = player();
            p.set_ammo(AmmoKind::Clip, 0);
            p.ready_weapon = WeaponKind::Fist;
            p.give_weapon_owned(WeaponKind::Chaingun);
            assert!(give_ammo(&mut p, AmmoKind::Clip, 1, Skill::Medium));
            assert_eq!(p.pending_weapon, Some(WeaponKind::Chaingun));
        }

        #[test]
        fn nonzero_stock_never_switches_weapons() {
            let mut p = player();
            p.give_weapon_owned(WeaponKind::Shotgun);
            p.set_ammo(AmmoKind::Shell, 3);
            assert!(give_ammo(&mut p, AmmoKind::Shell, 1, Skill::Medium));
            assert_eq!(p.pending_weapon, None);
        }
    }

    mod give_body_tests {
        use super::*;

        #[test]
        fn rejects_at_max_health() {
            let mut p = player();
            let mut b = body();
            assert!(!give_body(&mut p, &mut b, 10));
        }

        #[test]
        fn heals_and_mirrors_into_body() {
            let mut p = player();
            let mut b = body();
            p.health = 40;
            b.health = 40;
            assert!(give_body(&mut p, &mut b, 25));
            assert_eq!(p.health, 65);
            assert_eq!(b.health, 65);
        }

        #[test]
        fn heal_clamps_at_max() {
            let mut p = player();
            let mut b = body();
            p.health = 95;
            assert!(give_body(&mut p, &mut b, 25));
            assert_eq!(p.health, MAX_HEALTH);
        }
    }

    mod give_armor_tests {
        use super::*;

        #[test]
        fn rejects_when_not_an_improvement() {
            let mut p = player();
            p.armor_type = ArmorTier::Green;
            p.armor_points = 100;
            assert!(!give_armor(&mut p, ArmorTier::Green));
            assert_eq!(p.armor_type, ArmorTier::Green);
            assert_eq!(p.armor_points, 100);
        }

        #[test]
        fn overwrites_rather_than_adds() {
            let mut p = player();
            p.armor_type = ArmorTier::Green;
            p.armor_points = 30;
            assert!(give_armor(&mut p, ArmorTier::Blue));
            assert_eq!(p.armor_type, ArmorTier::Blue);
            assert_eq!(p.armor_points, 200);
        }
    }

    mod give_power_tests {
        use super::*;

        #[test]
        fn timed_powers_always_refresh() {
            let mut p = player();
            let mut b = body();
            p.set_power(PowerKind::Invulnerability, 3);
            assert!(give_power(&mut p, &mut b, PowerKind::Invulnerability));
            assert_eq!(
                p.power(PowerKind::Invulnerability),
                PowerKind::Invulnerability.duration()
            );
        }

        #[test]
        fn invisibility_sets_shadow_on_body() {
            let mut p = player();
            let mut b = body();
            assert!(give_power(&mut p, &mut b, PowerKind::Invisibility));
            assert!(b.flags.contains(MobjFlags::SHADOW));
        }

        #[test]
        fn strength_grants_health() {
            let mut p = player();
            let mut b = body();
            p.health = 10;
            assert!(give_power(&mut p, &mut b, PowerKind::Strength));
            assert_eq!(p.health, MAX_HEALTH);
            assert!(p.power_active(PowerKind::Strength));
        }

        #[test]
        fn allmap_rejects_regrant() {
            let mut p = player();
            let mut b = body();
            assert!(give_power(&mut p, &mut b, PowerKind::Allmap));
            assert!(!give_power(&mut p, &mut b, PowerKind::Allmap));
        }
    }

    mod backpack_tests {
        use super::*;

        #[test]
        fn doubles_maxima_exactly_once() {
            let mut p = player();
            give_backpack(&mut p, Skill::Medium);
            assert!(p.backpack);
            assert_eq!(p.max_ammo(AmmoKind::Clip), 400);
            assert_eq!(p.max_ammo(AmmoKind::Shell), 100);
            give_backpack(&mut p, Skill::Medium);
            assert_eq!(p.max_ammo(AmmoKind::Clip), 400);
            assert_eq!(p.max_ammo(AmmoKind::Missile), 100);
        }

        #[test]
        fn grants_one_load_of_everything() {
            let mut p = player();
            give_backpack(&mut p, Skill::Medium);
            assert_eq!(p.ammo(AmmoKind::Clip), 60);
            assert_eq!(p.ammo(AmmoKind::Shell), 4);
            assert_eq!(p.ammo(AmmoKind::Cell), 20);
            assert_eq!(p.ammo(AmmoKind::Missile), 1);
        }
    }

    mod bonus_tests {
        use super::*;

        #[test]
        fn health_bonus_exceeds_normal_cap() {
            let mut p = player();
            let mut b = body();
            give_health_bonus(&mut p, &mut b);
            give_health_bonus(&mut p, &mut b);
            assert_eq!(p.health, 102);
            assert_eq!(b.health, 102);
        }

        #[test]
        fn health_bonus_stops_at_bonus_cap() {
            let mut p = player();
            let mut b = body();
            p.health = BONUS_CAP;
            give_health_bonus(&mut p, &mut b);
            assert_eq!(p.health, BONUS_CAP);
        }

        #[test]
        fn armor_bonus_backfills_tier_one() {
            let mut p = player();
            give_armor_bonus(&mut p);
            assert_eq!(p.armor_points, 1);
            assert_eq!(p.armor_type, ArmorTier::Green);
        }

        #[test]
        fn armor_bonus_keeps_existing_tier() {
            let mut p = player();
            p.armor_type = ArmorTier::Blue;
            p.armor_points = 150;
            give_armor_bonus(&mut p);
            assert_eq!(p.armor_type, ArmorTier::Blue);
            assert_eq!(p.armor_points, 151);
        }
    }
}
