//! The seven pickup category resolvers, in chain priority order.

use super::economy::{
    give_ammo, give_armor, give_armor_bonus, give_backpack, give_body, give_health_bonus,
    give_power, give_weapon, PickupScope,
};
use super::{CategoryResolver, Outcome, PickupItem};
use crate::entity::{Mobj, MobjFlags};
use crate::info::{SoundId, SpriteTag};
use crate::msg::MessageId;
use crate::player::{ArmorTier, KeyCard, Player, PowerKind, WeaponKind, BONUS_CAP};
use crate::rules::GameMode;

/// The fixed resolver chain, highest priority first.
///
/// The order is part of the rule set: an object matching several
/// categories resolves to the first one here.
#[must_use]
pub fn chain() -> [&'static dyn CategoryResolver; 7] {
    [
        &ArmorResolver,
        &BonusResolver,
        &KeyResolver,
        &HealthResolver,
        &PowerResolver,
        &AmmoResolver,
        &WeaponResolver,
    ]
}

fn accepted(message: MessageId, sound: SoundId, remove: bool) -> Outcome {
    Outcome::Accepted {
        message: Some(message),
        sound,
        remove,
    }
}

/// Green and blue armor suits.
struct ArmorResolver;

impl CategoryResolver for ArmorResolver {
    fn category(&self) -> &'static str {
        "armor"
    }

    fn try_resolve(
        &self,
        item: &PickupItem,
        player: &mut Player,
        _body: &mut Mobj,
        _scope: &mut PickupScope<'_>,
    ) -> Outcome {
        let (tier, message) = match item.sprite {
            SpriteTag::GreenArmor => (ArmorTier::Green, MessageId::GotArmor),
            SpriteTag::BlueArmor => (ArmorTier::Blue, MessageId::GotMegaArmor),
            _ => return Outcome::NotMine,
        };
        if give_armor(player, tier) {
            accepted(message, SoundId::ItemUp, true)
        } else {
            Outcome::Rejected
        }
    }
}

/// Health/armor bonuses and the spheres that ignore the normal caps.
struct BonusResolver;

impl CategoryResolver for BonusResolver {
    fn category(&self) -> &'static str {
        "bonus"
    }

    fn try_resolve(
        &self,
        item: &PickupItem,
        player: &mut Player,
        body: &mut Mobj,
        scope: &mut PickupScope<'_>,
    ) -> Outcome {
        match item.sprite {
            SpriteTag::HealthBonus => {
                give_health_bonus(player, body);
                accepted(MessageId::GotHealthBonus, SoundId::ItemUp, true)
            }
            SpriteTag::ArmorBonus => {
                give_armor_bonus(player);
                accepted(MessageId::GotArmorBonus, SoundId::ItemUp, true)
            }
            SpriteTag::Soulsphere => {
                player.health = (player.health + 100).min(BONUS_CAP);
                body.health = player.health;
                accepted(MessageId::GotSoulsphere, SoundId::GetPower, true)
            }
            SpriteTag::Megasphere => {
                if scope.rules.mode != GameMode::Commercial {
                    return Outcome::Rejected;
                }
                player.health = BONUS_CAP;
                body.health = player.health;
                let _ = give_armor(player, ArmorTier::Blue);
                accepted(MessageId::GotMegasphere, SoundId::GetPower, true)
            }
            _ => Outcome::NotMine,
        }
    }
}

/// Key cards and skull keys.
struct KeyResolver;

impl CategoryResolver for KeyResolver {
    fn category(&self) -> &'static str {
        "key"
    }

    fn try_resolve(
        &self,
        item: &PickupItem,
        player: &mut Player,
        _body: &mut Mobj,
        scope: &mut PickupScope<'_>,
    ) -> Outcome {
        let (card, message) = match item.sprite {
            SpriteTag::BlueCard => (KeyCard::BlueCard, MessageId::GotBlueCard),
            SpriteTag::YellowCard => (KeyCard::YellowCard, MessageId::GotYellowCard),
            SpriteTag::RedCard => (KeyCard::RedCard, MessageId::GotRedCard),
            SpriteTag::BlueSkull => (KeyCard::BlueSkull, MessageId::GotBlueSkull),
            SpriteTag::YellowSkull => (KeyCard::YellowSkull, MessageId::GotYellowSkull),
            SpriteTag::RedSkull => (KeyCard::RedSkull, MessageId::GotRedSkull),
            _ => return Outcome::NotMine,
        };
        // Re-touching an owned key is still an acceptance, just a mute one.
        let message = (!player.has_card(card)).then_some(message);
        player.give_card(card);
        Outcome::Accepted {
            message,
            sound: SoundId::ItemUp,
            // Keys stay in the world for the other participants.
            remove: !scope.rules.netgame,
        }
    }
}

/// Stimpacks and medikits.
struct HealthResolver;

impl CategoryResolver for HealthResolver {
    fn category(&self) -> &'static str {
        "health"
    }

    fn try_resolve(
        &self,
        item: &PickupItem,
        player: &mut Player,
        body: &mut Mobj,
        _scope: &mut PickupScope<'_>,
    ) -> Outcome {
        match item.sprite {
            SpriteTag::Stimpack => {
                if give_body(player, body, 10) {
                    accepted(MessageId::GotStimpack, SoundId::ItemUp, true)
                } else {
                    Outcome::Rejected
                }
            }
            SpriteTag::Medikit => {
                if give_body(player, body, 25) {
                    // Checked after healing, so this branch cannot fire; a
                    // known quirk of the original rules, kept as-is.
                    let message = if player.health < 25 {
                        MessageId::GotMedikitNeeded
                    } else {
                        MessageId::GotMedikit
                    };
                    accepted(message, SoundId::ItemUp, true)
                } else {
                    Outcome::Rejected
                }
            }
            _ => Outcome::NotMine,
        }
    }
}

/// Timed and flag-like power-ups.
struct PowerResolver;

impl CategoryResolver for PowerResolver {
    fn category(&self) -> &'static str {
        "power"
    }

    fn try_resolve(
        &self,
        item: &PickupItem,
        player: &mut Player,
        body: &mut Mobj,
        _scope: &mut PickupScope<'_>,
    ) -> Outcome {
        let (power, message) = match item.sprite {
            SpriteTag::InvulnSphere => {
                (PowerKind::Invulnerability, MessageId::GotInvulnerability)
            }
            SpriteTag::Berserk => (PowerKind::Strength, MessageId::GotBerserk),
            SpriteTag::BlurSphere => (PowerKind::Invisibility, MessageId::GotInvisibility),
            SpriteTag::RadiationSuit => (PowerKind::IronFeet, MessageId::GotRadiationSuit),
            SpriteTag::ComputerMap => (PowerKind::Allmap, MessageId::GotComputerMap),
            SpriteTag::LightGoggles => (PowerKind::Infrared, MessageId::GotLightGoggles),
            _ => return Outcome::NotMine,
        };
        if !give_power(player, body, power) {
            return Outcome::Rejected;
        }
        if power == PowerKind::Strength && player.ready_weapon != WeaponKind::Fist {
            // Berserk shoves the fists up front.
            player.pending_weapon = Some(WeaponKind::Fist);
        }
        accepted(message, SoundId::GetPower, true)
    }
}

/// Loose ammo, ammo boxes, and the backpack.
struct AmmoResolver;

impl CategoryResolver for AmmoResolver {
    fn category(&self) -> &'static str {
        "ammo"
    }

    fn try_resolve(
        &self,
        item: &PickupItem,
        player: &mut Player,
        _body: &mut Mobj,
        scope: &mut PickupScope<'_>,
    ) -> Outcome {
        use crate::player::AmmoKind;

        let skill = scope.rules.skill;
        let (kind, clip_loads, message) = match item.sprite {
            SpriteTag::Clip => {
                // A dropped clip is half empty.
                let loads = i32::from(!item.flags.contains(MobjFlags::DROPPED));
                (AmmoKind::Clip, loads, MessageId::GotClip)
            }
            SpriteTag::ClipBox => (AmmoKind::Clip, 5, MessageId::GotClipBox),
            SpriteTag::Rocket => (AmmoKind::Missile, 1, MessageId::GotRocket),
            SpriteTag::RocketBox => (AmmoKind::Missile, 5, MessageId::GotRocketBox),
            SpriteTag::Cell => (AmmoKind::Cell, 1, MessageId::GotCell),
            SpriteTag::CellPack => (AmmoKind::Cell, 5, MessageId::GotCellPack),
            SpriteTag::Shells => (AmmoKind::Shell, 1, MessageId::GotShells),
            SpriteTag::ShellBox => (AmmoKind::Shell, 5, MessageId::GotShellBox),
            SpriteTag::Backpack => {
                give_backpack(player, skill);
                return accepted(MessageId::GotBackpack, SoundId::ItemUp, true);
            }
            _ => return Outcome::NotMine,
        };
        if give_ammo(player, kind, clip_loads, skill) {
            accepted(message, SoundId::ItemUp, true)
        } else {
            Outcome::Rejected
        }
    }
}

/// Weapon pickups.
struct WeaponResolver;

impl CategoryResolver for WeaponResolver {
    fn category(&self) -> &'static str {
        "weapon"
    }

    fn try_resolve(
        &self,
        item: &PickupItem,
        player: &mut Player,
        _body: &mut Mobj,
        scope: &mut PickupScope<'_>,
    ) -> Outcome {
        let (weapon, message) = match item.sprite {
            SpriteTag::BfgSprite => (WeaponKind::Bfg9000, MessageId::GotBfg9000),
            SpriteTag::ChaingunSprite => (WeaponKind::Chaingun, MessageId::GotChaingun),
            SpriteTag::ChainsawSprite => (WeaponKind::Chainsaw, MessageId::GotChainsaw),
            SpriteTag::LauncherSprite => {
                (WeaponKind::RocketLauncher, MessageId::GotRocketLauncher)
            }
            SpriteTag::PlasmaSprite => (WeaponKind::PlasmaRifle, MessageId::GotPlasmaRifle),
            SpriteTag::ShotgunSprite => (WeaponKind::Shotgun, MessageId::GotShotgun),
            SpriteTag::SuperShotgunSprite => {
                if scope.rules.mode != GameMode::Commercial {
                    return Outcome::Rejected;
                }
                (WeaponKind::SuperShotgun, MessageId::GotSuperShotgun)
            }
            _ => return Outcome::NotMine,
        };
        let dropped = item.flags.contains(MobjFlags::DROPPED);
        if give_weapon(player, weapon, dropped, scope) {
            accepted(message, SoundId::WeaponUp, true)
        } else {
            Outcome::Rejected
        }
    }
}
