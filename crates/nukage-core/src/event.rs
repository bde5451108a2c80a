//! Side-effect events emitted toward the external collaborators.
//!
//! The pipelines mutate the entity/player model directly, but everything
//! the outside world must act on (audio, UI, the automap overlay) is
//! recorded here and drained by the embedding game once per tick. The log
//! is part of the deterministic output: a replay must produce the same
//! events in the same order.

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::info::{MobjKind, SoundId, SpriteTag};
use crate::player::PlayerId;

/// A side effect produced by one pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Play a sound effect. `origin: None` routes a non-positional sound.
    Sound {
        /// Entity the sound is attached to, or `None` for non-positional.
        origin: Option<EntityId>,
        /// Which sound.
        sound: SoundId,
    },
    /// A pickup was accepted.
    ItemPickedUp {
        /// Who picked it up.
        player: PlayerId,
        /// The item's sprite tag.
        sprite: SpriteTag,
        /// Whether the object was removed from the world.
        removed: bool,
    },
    /// An entity died.
    MobjKilled {
        /// The dead entity.
        target: EntityId,
        /// The entity credited with the kill, if any.
        source: Option<EntityId>,
    },
    /// A dying monster dropped an item.
    ItemDropped {
        /// The spawned pickup.
        id: EntityId,
        /// What was dropped.
        kind: MobjKind,
    },
    /// A player died and their raised weapon was forced down; the
    /// embedding game lowers the weapon sprite.
    WeaponLowered {
        /// Whose weapon.
        player: PlayerId,
    },
    /// The local player died with the automap overlay open; the overlay
    /// was forced closed.
    AutomapClosed {
        /// Whose overlay.
        player: PlayerId,
    },
}
