//! Fatal game-data errors.
//!
//! These indicate corrupted or mismatched static game data, never a
//! transient gameplay condition. Ordinary rejections (ammo already full,
//! armor not an improvement, key already owned) are plain boolean results
//! and are deliberately *not* represented here.

use thiserror::Error;

use crate::info::SpriteTag;

/// Mismatch between the item tables and the pickup dispatch chain.
///
/// A touched special object whose sprite tag no resolver recognizes means
/// the static game data and the resolver chain have gone out of sync. The
/// enclosing operation aborts; there is no recovery path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameDataError {
    /// No resolver in the pickup chain recognized the sprite tag.
    #[error("unknown gettable thing: sprite tag {0:?} matched no pickup category")]
    UnknownPickup(SpriteTag),
}
