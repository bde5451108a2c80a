//! Entity types for the simulation.
//!
//! A [`Mobj`] ("map object") is any simulated thing: a monster, a player
//! body, a projectile, or a pickup item. Both pipelines mutate mobjs; the
//! level/AI layer spawns them and decays corpses, which is outside this
//! core.
//!
//! # Invariants
//!
//! - `health <= 0` implies [`MobjFlags::CORPSE`] set and
//!   [`MobjFlags::SHOOTABLE`] cleared; the kill sub-routine maintains this.
//! - A mobj holds at most one chase target at a time.

pub mod flags;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use flags::MobjFlags;

use crate::info::{MobjInfo, MobjKind, StateLabel};
use crate::player::PlayerId;

/// Unique identifier for a mobj.
///
/// A newtype over `u64`, ordered by numeric value so that any iteration
/// keyed on IDs is deterministic across platforms.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates an `EntityId` from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// A simulated map object.
///
/// World position is split into a 2D footprint plus a separate height
/// coordinate to match the 2.5-D maths of the rules (vertical reach tests,
/// the fall-forward height check).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mobj {
    id: EntityId,
    /// Type tag; keys the static [`MobjInfo`] table.
    pub kind: MobjKind,
    /// Current hit points; goes negative to record overkill.
    pub health: i32,
    /// Capability flags.
    pub flags: MobjFlags,
    /// 2D world position.
    pub pos: Vec2,
    /// Bottom height above the floor datum.
    pub z: f32,
    /// Velocity; x/y map to `pos`, z to height.
    pub vel: Vec3,
    /// Live collision height, quartered on death.
    pub height: f32,
    /// Coarse animation/behaviour state.
    pub state: StateLabel,
    /// Tics remaining in the current state; negative never times out.
    pub tics: i32,
    /// Owning player, if this is a player body.
    pub player: Option<PlayerId>,
    /// Current chase target.
    pub target: Option<EntityId>,
    /// Tics of aggression left before the mobj considers switching targets.
    pub threshold: i32,
    /// Tics before the mobj may act; zeroed by damage to wake sleepers.
    pub reaction_time: i32,
    /// Special tag of the floor sector under the mobj, supplied by the
    /// (external) geometry layer. Tag 11 is the scripted-exit floor.
    pub sector_special: u8,
}

impl Mobj {
    /// Creates a mobj of `kind` at a position, applying the spawn defaults
    /// from the static info table.
    #[must_use]
    pub fn new(id: EntityId, kind: MobjKind, pos: Vec2, z: f32) -> Self {
        let info = kind.info();
        Self {
            id,
            kind,
            health: info.spawn_health,
            flags: info.spawn_flags,
            pos,
            z,
            vel: Vec3::ZERO,
            height: info.height,
            state: StateLabel::Spawn,
            tics: StateLabel::Spawn.base_tics(),
            player: None,
            target: None,
            threshold: 0,
            reaction_time: 0,
            sector_special: 0,
        }
    }

    /// Returns the mobj's identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Looks up the static constants for this mobj's kind.
    #[must_use]
    pub const fn info(&self) -> MobjInfo {
        self.kind.info()
    }

    /// Switches to a new state and resets its tic counter.
    pub fn set_state(&mut self, state: StateLabel) {
        self.state = state;
        self.tics = state.base_tics();
    }

    /// True if the mobj can currently be damaged.
    #[must_use]
    pub const fn is_shootable(&self) -> bool {
        self.flags.contains(MobjFlags::SHOOTABLE)
    }

    /// True if this is a pickup-on-touch item.
    #[must_use]
    pub const fn is_special(&self) -> bool {
        self.flags.contains(MobjFlags::SPECIAL)
    }

    /// True if the mobj is dead.
    #[must_use]
    pub const fn is_corpse(&self) -> bool {
        self.flags.contains(MobjFlags::CORPSE)
    }
}
