//! The damage pipeline and its kill sub-routine.
//!
//! [`damage_mobj`] applies one packet of damage to a shootable target,
//! staged in a fixed order: knockback, player-specific mitigation, health
//! subtraction, then either the kill sub-routine or the pain/retarget
//! tail. The stage order is part of the deterministic contract because
//! two of the stages draw from the PRNG.
//!
//! PRNG draw order per invocation: the fall-forward coin flip (only when
//! its preconditions all hold), then on the survivor path one pain-chance
//! byte, or on the kill path one death-tics fuzz byte.

use glam::Vec2;
use tracing::{debug, trace};

use crate::automap::Automap;
use crate::entity::{EntityId, MobjFlags};
use crate::event::Event;
use crate::info::{MobjKind, StateLabel};
use crate::player::{PlayerId, PlayerState, DAMAGE_FLASH_CAP};
use crate::rng::SimRng;
use crate::rules::GameRules;
use crate::world::World;

/// Damage at or above this pierces invulnerability and god mode.
const UNSTOPPABLE_DAMAGE: i32 = 1000;

/// Thrust per point of damage at mass 100.
const KNOCKBACK_SCALE: f32 = 12.5;

/// Fall-forward applies only to killing blows below this damage.
const FALL_FORWARD_MAX: i32 = 40;

/// Height advantage the inflictor needs for fall-forward.
const FALL_FORWARD_DROP: f32 = 64.0;

/// Aggression tics granted when damage acquires a new chase target.
const BASE_THRESHOLD: i32 = 100;

/// Floor sector tag of the scripted damaging exit.
const EXIT_SECTOR: u8 = 11;

/// What the pipelines need to know about the damage source after the
/// target borrow begins.
#[derive(Debug, Clone, Copy)]
struct SourceInfo {
    id: EntityId,
    kind: MobjKind,
    player: Option<PlayerId>,
}

fn snapshot_source(world: &World, source: Option<EntityId>) -> Option<SourceInfo> {
    let mobj = world.get(source?)?;
    Some(SourceInfo {
        id: mobj.id(),
        kind: mobj.kind,
        player: mobj.player,
    })
}

/// Applies `damage` to `target`.
///
/// `inflictor` is the thing that physically dealt the hit (a missile, or
/// the attacker itself for melee and hitscan) and drives knockback;
/// `source` is the creature credited with the damage and becomes the
/// target's new chase target. The two differ for projectiles. Either may
/// be `None` for environmental damage, which applies no knockback and
/// credits nobody.
///
/// Missing or non-shootable targets and already-dead targets are ignored.
#[allow(clippy::too_many_lines)]
pub fn damage_mobj(
    world: &mut World,
    rng: &mut SimRng,
    rules: &GameRules,
    events: &mut Vec<Event>,
    automap: &mut Automap,
    target: EntityId,
    inflictor: Option<EntityId>,
    source: Option<EntityId>,
    mut damage: i32,
) {
    let inflictor_at = inflictor
        .and_then(|id| world.get(id))
        .map(|m| (m.pos, m.z));
    let source_info = snapshot_source(world, source);
    let source_sawing = source_info
        .and_then(|s| s.player)
        .and_then(|pid| world.player(pid))
        .is_some_and(|p| p.ready_weapon == crate::player::WeaponKind::Chainsaw);

    let Some(t) = world.get_mut(target) else {
        return;
    };
    if !t.is_shootable() || t.health <= 0 {
        return;
    }

    // A charging skull stops dead when hit; the knockback below still
    // applies, so the hit converts the charge into a shove.
    if t.flags.contains(MobjFlags::SKULL_FLY) {
        t.vel = glam::Vec3::ZERO;
    }

    let target_pid = t.player;
    if target_pid.is_some() && rules.skill.halves_player_damage() {
        damage >>= 1;
    }

    // Knockback. Chainsaw hits from a player pin the target instead.
    if let Some((from, from_z)) = inflictor_at {
        if !t.flags.contains(MobjFlags::NO_CLIP) && !source_sawing {
            let mut dir = (t.pos - from).normalize_or_zero();
            #[allow(clippy::cast_precision_loss)]
            let mut thrust = damage as f32 * KNOCKBACK_SCALE / t.info().mass as f32;
            // A weak killing blow struck from well above may knock the
            // target toward the inflictor instead, so corpses sometimes
            // fall forward off a ledge.
            if damage < FALL_FORWARD_MAX
                && damage > t.health
                && t.z - from_z > FALL_FORWARD_DROP
                && rng.coin_flip()
            {
                dir = -dir;
                thrust *= 4.0;
            }
            t.vel.x += dir.x * thrust;
            t.vel.y += dir.y * thrust;
        }
    }

    // Player-only mitigation: the exit-floor fatality clamp, the
    // invulnerability gate, then armor absorption.
    if let Some(pid) = target_pid {
        let Some((player, body)) = world.player_with_body_mut(pid) else {
            return;
        };
        // The scripted damaging exit must not kill; the run ends with the
        // player at 1% instead.
        if body.sector_special == EXIT_SECTOR && damage >= body.health {
            damage = body.health - 1;
        }
        if damage < UNSTOPPABLE_DAMAGE && player.is_invulnerable() {
            return;
        }
        if player.armor_type != crate::player::ArmorTier::None {
            let mut saved = player.armor_type.saved(damage);
            if player.armor_points <= saved {
                // Armor is used up.
                saved = player.armor_points;
                player.armor_type = crate::player::ArmorTier::None;
            }
            player.armor_points -= saved;
            damage -= saved;
        }
        player.health -= damage;
        if player.health < 0 {
            player.health = 0;
        }
        player.attacker = source;
        player.damage_count = (player.damage_count + damage).min(DAMAGE_FLASH_CAP);
    }

    let Some(t) = world.get_mut(target) else {
        return;
    };
    t.health -= damage;
    trace!(target = %target, damage, health = t.health, "damage applied");
    if t.health <= 0 {
        kill_mobj(world, rng, rules, events, automap, target, source);
        return;
    }

    // Pain check: one byte against the static pain chance. A chance of
    // 256 can never lose. A charging skull never flinches.
    let Some(t) = world.get_mut(target) else {
        return;
    };
    let roll = u16::from(rng.next_byte());
    if roll < t.info().pain_chance && !t.flags.contains(MobjFlags::SKULL_FLY) {
        t.flags.insert(MobjFlags::JUST_HIT);
        t.set_state(StateLabel::Pain);
    }

    // Getting hurt wakes sleepers immediately.
    t.reaction_time = 0;

    // Retarget: switch aggression to the source unless still locked onto
    // the previous target. Arch-viles always switch, and are never
    // acquired as targets themselves.
    let acquires = (t.threshold == 0 || t.kind == MobjKind::Archvile)
        && source_info.is_some()
        && (rules.compat.allow_self_chase || source != Some(target))
        && source_info.is_some_and(|s| s.kind != MobjKind::Archvile);
    if acquires {
        t.target = source;
        t.threshold = BASE_THRESHOLD;
        if t.state == StateLabel::Spawn && t.info().has_see {
            t.set_state(StateLabel::See);
        }
    }
}

/// Kills `target`, crediting `source` with the kill.
///
/// Converts the target into a corpse, applies kill/frag tallies, selects
/// the death animation (gruesome when overkill exceeds the negated spawn
/// health), fuzzes its duration with one PRNG draw, and spawns the
/// monster's drop.
pub fn kill_mobj(
    world: &mut World,
    rng: &mut SimRng,
    rules: &GameRules,
    events: &mut Vec<Event>,
    automap: &mut Automap,
    target: EntityId,
    source: Option<EntityId>,
) {
    let source_info = snapshot_source(world, source);

    let Some(t) = world.get_mut(target) else {
        return;
    };
    t.flags.remove(MobjFlags::SHOOTABLE | MobjFlags::FLOAT | MobjFlags::SKULL_FLY);
    if t.kind != MobjKind::LostSoul {
        // Dead skulls keep floating; everything else falls.
        t.flags.remove(MobjFlags::NO_GRAVITY);
    }
    t.flags.insert(MobjFlags::CORPSE | MobjFlags::DROPOFF);
    t.height *= 0.25;

    let target_pid = t.player;
    let counts_kill = t.flags.contains(MobjFlags::COUNT_KILL);
    let drop_kind = t.info().drops;
    let drop_at = t.pos;
    debug!(target = %target, kind = ?t.kind, "killed");

    // Kill and frag tallies.
    if let Some(spid) = source_info.and_then(|s| s.player) {
        if let Some(sp) = world.player_mut(spid) {
            if counts_kill {
                sp.kill_count += 1;
            }
            if let Some(tpid) = target_pid {
                sp.frags[tpid.index()] += 1;
            }
        }
    } else if !rules.netgame && counts_kill {
        // Solo play: environment kills still count toward the tally.
        if let Some(p) = world.player_mut(PlayerId::new(0)) {
            p.kill_count += 1;
        }
    }

    if let Some(tpid) = target_pid {
        if let Some((player, body)) = world.player_with_body_mut(tpid) {
            if source_info.is_none() {
                // Environment deaths count against yourself.
                player.frags[tpid.index()] += 1;
            }
            body.flags.remove(MobjFlags::SOLID);
            player.state = PlayerState::Dead;
            player.pending_weapon = None;
        }
        events.push(Event::WeaponLowered { player: tpid });
        if tpid == rules.console_player && automap.is_active() {
            automap.stop();
            events.push(Event::AutomapClosed { player: tpid });
        }
    }

    if let Some(t) = world.get_mut(target) {
        let info = t.info();
        let gruesome = info.has_xdeath && t.health < -info.spawn_health;
        t.set_state(if gruesome {
            StateLabel::XDeath
        } else {
            StateLabel::Death
        });
        t.tics -= i32::from(rng.next_byte() & 3);
        if t.tics < 1 {
            t.tics = 1;
        }
    }

    events.push(Event::MobjKilled {
        target,
        source: source_info.map(|s| s.id),
    });

    if rules.compat.monster_drops {
        if let Some(kind) = drop_kind {
            let id = spawn_drop(world, kind, drop_at);
            events.push(Event::ItemDropped { id, kind });
        }
    }
}

/// Spawns a death drop slightly tossed, flagged as dropped so the ammo
/// economy halves it.
fn spawn_drop(world: &mut World, kind: MobjKind, at: Vec2) -> EntityId {
    let id = world.spawn(kind, at, 0.0);
    if let Some(item) = world.get_mut(id) {
        item.flags.insert(MobjFlags::DROPPED);
        item.vel.z = 4.0;
    }
    id
}
