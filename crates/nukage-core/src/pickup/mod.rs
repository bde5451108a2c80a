//! Pickup resolution chain.
//!
//! When the collision layer reports that an alive toucher reached a
//! special object, [`touch_special`] walks a fixed, data-visible chain of
//! category resolvers: armor, bonus item, key, health item, power-up,
//! ammo, weapon. Each resolver either does not recognize the sprite tag
//! (chain continues), recognizes it but declines the grant (stop, nothing
//! happens), or applies the grant (stop, the shared acceptance tail runs).
//!
//! A sprite tag no resolver recognizes is a fatal game-data error: the
//! item tables and the dispatch chain have gone out of sync.

pub mod economy;
mod resolvers;

use tracing::{debug, error};

use crate::entity::{EntityId, Mobj, MobjFlags};
use crate::error::GameDataError;
use crate::event::Event;
use crate::info::{SoundId, SpriteTag};
use crate::msg::MessageId;
use crate::player::{Player, BONUS_ADD};
use crate::rules::GameRules;
use crate::world::World;

pub use economy::PickupScope;
pub use resolvers::chain;

/// How far below the toucher's feet a special may still be reached.
const REACH_BELOW: f32 = 8.0;

/// Read-only snapshot of the touched special object.
///
/// Resolvers never mutate the special; it is either removed whole by the
/// acceptance tail or left untouched.
#[derive(Debug, Clone, Copy)]
pub struct PickupItem {
    /// The special's entity ID.
    pub id: EntityId,
    /// Visual tag, the dispatch key.
    pub sprite: SpriteTag,
    /// The special's flags (dropped, counts-as-item).
    pub flags: MobjFlags,
}

/// Result of one category resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Tag not recognized by this category; the chain continues.
    NotMine,
    /// Tag recognized but the grant declined; the chain stops with no
    /// effect beyond whatever the resolver already applied internally
    /// (the weapons-stay path).
    Rejected,
    /// Grant applied; the chain stops and the acceptance tail runs.
    Accepted {
        /// HUD message to set, if any.
        message: Option<MessageId>,
        /// Pickup sound; the generic blip unless overridden.
        sound: SoundId,
        /// Whether the special is consumed from the world.
        remove: bool,
    },
}

/// One category of gettable things.
///
/// Implementations inspect only the sprite tag and apply their grant
/// through the economy functions.
pub trait CategoryResolver: Sync {
    /// Category name, for logs and for asserting the chain order.
    fn category(&self) -> &'static str;

    /// Attempts to resolve the touched item within this category.
    fn try_resolve(
        &self,
        item: &PickupItem,
        player: &mut Player,
        body: &mut Mobj,
        scope: &mut PickupScope<'_>,
    ) -> Outcome;
}

/// Resolves a touch between a special object and a toucher.
///
/// Non-player touchers, dead touchers, and touches failing the vertical
/// reach test are silent no-ops. On acceptance the shared tail applies
/// the item tally, the bonus flash, the HUD message, the pickup sound
/// (non-positional, console player only), and removal when requested.
///
/// # Errors
///
/// [`GameDataError::UnknownPickup`] when no resolver recognizes the
/// sprite tag. This signals corrupted game data and aborts processing.
pub fn touch_special(
    world: &mut World,
    rules: &GameRules,
    events: &mut Vec<Event>,
    special: EntityId,
    toucher: EntityId,
) -> Result<(), GameDataError> {
    let Some(sp) = world.get(special) else {
        return Ok(());
    };
    if !sp.is_special() {
        return Ok(());
    }
    let item = PickupItem {
        id: special,
        sprite: sp.info().sprite,
        flags: sp.flags,
    };
    let sp_z = sp.z;

    let Some(toucher_ref) = world.get(toucher) else {
        return Ok(());
    };
    // Vertical reach: the collision layer already filters on this, but a
    // stale event after a lift movement must not grant through a floor.
    let delta = sp_z - toucher_ref.z;
    if delta > toucher_ref.height || delta < -REACH_BELOW {
        return Ok(());
    }
    // Dead things can't pick up anything.
    if toucher_ref.health <= 0 {
        return Ok(());
    }
    let Some(pid) = toucher_ref.player else {
        return Ok(());
    };

    let resolved = {
        let Some((player, body)) = world.player_with_body_mut(pid) else {
            return Ok(());
        };
        let mut scope = PickupScope {
            rules,
            is_console_player: pid == rules.console_player,
            events,
        };
        let mut resolved = None;
        for resolver in chain() {
            match resolver.try_resolve(&item, player, body, &mut scope) {
                Outcome::NotMine => {}
                Outcome::Rejected => {
                    debug!(
                        category = resolver.category(),
                        sprite = ?item.sprite,
                        "pickup declined"
                    );
                    resolved = Some(None);
                    break;
                }
                Outcome::Accepted {
                    message,
                    sound,
                    remove,
                } => {
                    debug!(
                        category = resolver.category(),
                        sprite = ?item.sprite,
                        remove,
                        "pickup accepted"
                    );
                    resolved = Some(Some((message, sound, remove)));
                    break;
                }
            }
        }
        resolved
    };

    match resolved {
        None => {
            error!(sprite = ?item.sprite, "unknown gettable thing");
            Err(GameDataError::UnknownPickup(item.sprite))
        }
        Some(None) => Ok(()),
        Some(Some((message, sound, remove))) => {
            if let Some(player) = world.player_mut(pid) {
                if item.flags.contains(MobjFlags::COUNT_ITEM) {
                    player.item_count += 1;
                }
                player.bonus_count += BONUS_ADD;
                if message.is_some() {
                    player.message = message;
                }
            }
            if remove {
                world.remove(special);
            }
            events.push(Event::ItemPickedUp {
                player: pid,
                sprite: item.sprite,
                removed: remove,
            });
            if pid == rules.console_player {
                events.push(Event::Sound {
                    origin: None,
                    sound,
                });
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_order_is_fixed() {
        let categories: Vec<&str> = chain().iter().map(|r| r.category()).collect();
        assert_eq!(
            categories,
            vec!["armor", "bonus", "key", "health", "power", "ammo", "weapon"]
        );
    }
}
