//! Player state and the closed per-player enumerations.
//!
//! A [`Player`] is the participant-side view of a player body [`Mobj`]:
//! ammo, armor, weapons, power-ups, keys, cheats, and the HUD counters the
//! renderer observes. The player and its body hold non-owning mutual
//! back-references; in this engine one never outlives the other.
//!
//! The per-ammo, per-weapon, and per-power tables are explicit mappings
//! from closed enumerations, matched exhaustively so a new kind cannot
//! silently fall through.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entity::EntityId;
use crate::msg::MessageId;

/// Simulation tics per second.
pub const TICRATE: i32 = 35;

/// Maximum number of participants.
pub const MAX_PLAYERS: usize = 4;

/// Normal health cap for health items.
pub const MAX_HEALTH: i32 = 100;

/// Higher cap that bonus items may fill up to.
pub const BONUS_CAP: i32 = 200;

/// Bonus-flash frames added per accepted pickup.
pub const BONUS_ADD: i32 = 6;

/// Cap on the damage-flash counter.
pub const DAMAGE_FLASH_CAP: i32 = 100;

/// Index of a participant.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlayerId(usize);

impl PlayerId {
    /// Creates a `PlayerId` from a raw participant index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four ammo kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmmoKind {
    /// Bullets, shared by the pistol and chaingun.
    Clip,
    /// Shotgun shells.
    Shell,
    /// Energy cells, shared by the plasma rifle and BFG.
    Cell,
    /// Rockets.
    Missile,
}

impl AmmoKind {
    /// All kinds, in table order.
    pub const ALL: [Self; 4] = [Self::Clip, Self::Shell, Self::Cell, Self::Missile];

    /// Units granted by one clip load of this kind.
    #[must_use]
    pub const fn clip_load(self) -> i32 {
        match self {
            Self::Clip => 10,
            Self::Shell => 4,
            Self::Cell => 20,
            Self::Missile => 1,
        }
    }

    /// Carrying capacity before a backpack doubles it.
    #[must_use]
    pub const fn base_max(self) -> i32 {
        match self {
            Self::Clip => 200,
            Self::Shell => 50,
            Self::Cell => 300,
            Self::Missile => 50,
        }
    }

    const fn idx(self) -> usize {
        match self {
            Self::Clip => 0,
            Self::Shell => 1,
            Self::Cell => 2,
            Self::Missile => 3,
        }
    }
}

/// The nine weapons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Bare fists; no ammo.
    Fist,
    /// Pistol.
    Pistol,
    /// Shotgun.
    Shotgun,
    /// Chaingun.
    Chaingun,
    /// Rocket launcher.
    RocketLauncher,
    /// Plasma rifle.
    PlasmaRifle,
    /// BFG 9000.
    Bfg9000,
    /// Chainsaw; no ammo, and its melee hits never knock targets back.
    Chainsaw,
    /// Super shotgun (Commercial only).
    SuperShotgun,
}

impl WeaponKind {
    /// The ammo kind this weapon consumes, if any.
    #[must_use]
    pub const fn ammo(self) -> Option<AmmoKind> {
        match self {
            Self::Fist | Self::Chainsaw => None,
            Self::Pistol | Self::Chaingun => Some(AmmoKind::Clip),
            Self::Shotgun | Self::SuperShotgun => Some(AmmoKind::Shell),
            Self::PlasmaRifle | Self::Bfg9000 => Some(AmmoKind::Cell),
            Self::RocketLauncher => Some(AmmoKind::Missile),
        }
    }

    const fn idx(self) -> usize {
        match self {
            Self::Fist => 0,
            Self::Pistol => 1,
            Self::Shotgun => 2,
            Self::Chaingun => 3,
            Self::RocketLauncher => 4,
            Self::PlasmaRifle => 5,
            Self::Bfg9000 => 6,
            Self::Chainsaw => 7,
            Self::SuperShotgun => 8,
        }
    }
}

/// Power-up countdown slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerKind {
    /// Damage negation below the 1000-damage threshold.
    Invulnerability,
    /// Berserk fists; lasts the rest of the level.
    Strength,
    /// Partial invisibility; also sets the body's shadow flag.
    Invisibility,
    /// Environmental damage protection.
    IronFeet,
    /// Full automap.
    Allmap,
    /// Light amplification.
    Infrared,
}

impl PowerKind {
    /// Countdown set when the power-up is granted.
    ///
    /// `Strength` and `Allmap` are flag-like: a value of 1 simply marks
    /// them active for the rest of the level.
    #[must_use]
    pub const fn duration(self) -> i32 {
        match self {
            Self::Invulnerability => 30 * TICRATE,
            Self::Invisibility | Self::IronFeet => 60 * TICRATE,
            Self::Infrared => 120 * TICRATE,
            Self::Strength | Self::Allmap => 1,
        }
    }

    const fn idx(self) -> usize {
        match self {
            Self::Invulnerability => 0,
            Self::Strength => 1,
            Self::Invisibility => 2,
            Self::IronFeet => 3,
            Self::Allmap => 4,
            Self::Infrared => 5,
        }
    }
}

/// The six key cards and skull keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCard {
    /// Blue keycard.
    BlueCard,
    /// Yellow keycard.
    YellowCard,
    /// Red keycard.
    RedCard,
    /// Blue skull key.
    BlueSkull,
    /// Yellow skull key.
    YellowSkull,
    /// Red skull key.
    RedSkull,
}

impl KeyCard {
    const fn idx(self) -> usize {
        match self {
            Self::BlueCard => 0,
            Self::YellowCard => 1,
            Self::RedCard => 2,
            Self::BlueSkull => 3,
            Self::YellowSkull => 4,
            Self::RedSkull => 5,
        }
    }
}

/// Armor absorption tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorTier {
    /// No armor.
    #[default]
    None,
    /// Green armor: absorbs one third of incoming damage.
    Green,
    /// Blue armor: absorbs half of incoming damage.
    Blue,
}

impl ArmorTier {
    /// Armor points granted when a suit of this tier is picked up.
    #[must_use]
    pub const fn hits(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Green => 100,
            Self::Blue => 200,
        }
    }

    /// Damage absorbed by this tier, truncating toward zero.
    #[must_use]
    pub const fn saved(self, damage: i32) -> i32 {
        match self {
            Self::None => 0,
            Self::Green => damage / 3,
            Self::Blue => damage / 2,
        }
    }
}

bitflags! {
    /// Cheat-mode bits.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Cheats: u32 {
        /// God mode: negates damage below the 1000-damage threshold.
        const GOD_MODE = 0x01;
        /// No clipping.
        const NO_CLIP  = 0x02;
    }
}

/// Whether the participant is alive or awaiting respawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Playing.
    #[default]
    Alive,
    /// Dead; the view follows the killer until respawn.
    Dead,
}

/// Per-participant state.
///
/// `health` mirrors the body mobj's health; every mutation in the pipelines
/// writes both sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// The body mobj this player controls.
    pub body: EntityId,
    /// Alive or dead.
    pub state: PlayerState,
    /// Health mirror of the body.
    pub health: i32,
    /// Armor point budget; bonus pickups may exceed `armor_type.hits()`.
    pub armor_points: i32,
    /// Live absorption tier; always consulted for the absorption fraction.
    pub armor_type: ArmorTier,
    ammo: [i32; 4],
    max_ammo: [i32; 4],
    owned: [bool; 9],
    /// Weapon currently raised.
    pub ready_weapon: WeaponKind,
    /// Weapon to switch to, if a change is pending.
    pub pending_weapon: Option<WeaponKind>,
    powers: [i32; 6],
    cards: [bool; 6],
    /// Active cheat bits.
    pub cheats: Cheats,
    /// Frames of pickup flash remaining.
    pub bonus_count: i32,
    /// Frames of damage flash remaining; capped at [`DAMAGE_FLASH_CAP`].
    pub damage_count: i32,
    /// Monsters killed.
    pub kill_count: u32,
    /// Counted items picked up.
    pub item_count: u32,
    /// Frags scored against each participant; own slot counts suicides and
    /// environment deaths.
    pub frags: [u32; MAX_PLAYERS],
    /// Transient HUD message key.
    pub message: Option<MessageId>,
    /// Whoever hurt this player last.
    pub attacker: Option<EntityId>,
    /// Set once the first backpack doubles the ammo maxima.
    pub backpack: bool,
}

impl Player {
    /// Creates a fresh player bound to a body mobj.
    #[must_use]
    pub fn new(body: EntityId) -> Self {
        let mut owned = [false; 9];
        owned[WeaponKind::Fist.idx()] = true;
        owned[WeaponKind::Pistol.idx()] = true;
        let mut ammo = [0; 4];
        ammo[AmmoKind::Clip.idx()] = 50;
        Self {
            body,
            state: PlayerState::Alive,
            health: MAX_HEALTH,
            armor_points: 0,
            armor_type: ArmorTier::None,
            ammo,
            max_ammo: [
                AmmoKind::Clip.base_max(),
                AmmoKind::Shell.base_max(),
                AmmoKind::Cell.base_max(),
                AmmoKind::Missile.base_max(),
            ],
            owned,
            ready_weapon: WeaponKind::Pistol,
            pending_weapon: None,
            powers: [0; 6],
            cards: [false; 6],
            cheats: Cheats::empty(),
            bonus_count: 0,
            damage_count: 0,
            kill_count: 0,
            item_count: 0,
            frags: [0; MAX_PLAYERS],
            message: None,
            attacker: None,
            backpack: false,
        }
    }

    /// Current stock of an ammo kind.
    #[must_use]
    pub const fn ammo(&self, kind: AmmoKind) -> i32 {
        self.ammo[kind.idx()]
    }

    /// Carrying capacity of an ammo kind.
    #[must_use]
    pub const fn max_ammo(&self, kind: AmmoKind) -> i32 {
        self.max_ammo[kind.idx()]
    }

    /// Sets the stock of an ammo kind, clamping into `0..=max`.
    pub fn set_ammo(&mut self, kind: AmmoKind, count: i32) {
        self.ammo[kind.idx()] = count.clamp(0, self.max_ammo[kind.idx()]);
    }

    /// Doubles the capacity of an ammo kind (backpack).
    pub(crate) fn double_max_ammo(&mut self, kind: AmmoKind) {
        self.max_ammo[kind.idx()] *= 2;
    }

    /// Whether the player owns a weapon.
    #[must_use]
    pub const fn owns_weapon(&self, weapon: WeaponKind) -> bool {
        self.owned[weapon.idx()]
    }

    /// Marks a weapon as owned.
    pub fn give_weapon_owned(&mut self, weapon: WeaponKind) {
        self.owned[weapon.idx()] = true;
    }

    /// Remaining tics of a power-up; 0 means inactive.
    #[must_use]
    pub const fn power(&self, kind: PowerKind) -> i32 {
        self.powers[kind.idx()]
    }

    /// Sets a power-up countdown.
    pub fn set_power(&mut self, kind: PowerKind, tics: i32) {
        self.powers[kind.idx()] = tics;
    }

    /// Whether a power-up is currently active.
    #[must_use]
    pub const fn power_active(&self, kind: PowerKind) -> bool {
        self.powers[kind.idx()] > 0
    }

    /// Whether the player holds a key.
    #[must_use]
    pub const fn has_card(&self, card: KeyCard) -> bool {
        self.cards[card.idx()]
    }

    /// Grants a key. Re-granting is a no-op.
    pub fn give_card(&mut self, card: KeyCard) {
        self.cards[card.idx()] = true;
    }

    /// True when god mode or an invulnerability sphere is shielding the
    /// player.
    #[must_use]
    pub fn is_invulnerable(&self) -> bool {
        self.cheats.contains(Cheats::GOD_MODE) || self.power_active(PowerKind::Invulnerability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(EntityId::new(1))
    }

    #[test]
    fn fresh_player_loadout() {
        let p = player();
        assert_eq!(p.health, MAX_HEALTH);
        assert!(p.owns_weapon(WeaponKind::Fist));
        assert!(p.owns_weapon(WeaponKind::Pistol));
        assert!(!p.owns_weapon(WeaponKind::Shotgun));
        assert_eq!(p.ammo(AmmoKind::Clip), 50);
        assert_eq!(p.ammo(AmmoKind::Shell), 0);
        assert_eq!(p.max_ammo(AmmoKind::Cell), 300);
    }

    #[test]
    fn set_ammo_clamps_to_capacity() {
        let mut p = player();
        p.set_ammo(AmmoKind::Shell, 999);
        assert_eq!(p.ammo(AmmoKind::Shell), 50);
        p.set_ammo(AmmoKind::Shell, -5);
        assert_eq!(p.ammo(AmmoKind::Shell), 0);
    }

    #[test]
    fn ammoless_weapons_have_no_ammo_kind() {
        assert_eq!(WeaponKind::Fist.ammo(), None);
        assert_eq!(WeaponKind::Chainsaw.ammo(), None);
        assert_eq!(WeaponKind::Chaingun.ammo(), Some(AmmoKind::Clip));
    }

    #[test]
    fn armor_tier_fractions_truncate() {
        assert_eq!(ArmorTier::Green.saved(30), 10);
        assert_eq!(ArmorTier::Blue.saved(30), 15);
        assert_eq!(ArmorTier::Green.saved(2), 0);
        assert_eq!(ArmorTier::None.saved(100), 0);
    }

    #[test]
    fn god_mode_and_sphere_both_shield() {
        let mut p = player();
        assert!(!p.is_invulnerable());
        p.cheats.insert(Cheats::GOD_MODE);
        assert!(p.is_invulnerable());
        p.cheats.remove(Cheats::GOD_MODE);
        p.set_power(PowerKind::Invulnerability, 10);
        assert!(p.is_invulnerable());
    }

    #[test]
    fn keys_are_idempotent() {
        let mut p = player();
        assert!(!p.has_card(KeyCard::RedSkull));
        p.give_card(KeyCard::RedSkull);
        p.give_card(KeyCard::RedSkull);
        assert!(p.has_card(KeyCard::RedSkull));
    }

    #[test]
    fn serialization_roundtrip() {
        let mut p = player();
        p.set_ammo(AmmoKind::Cell, 40);
        p.give_card(KeyCard::BlueCard);
        let json = serde_json::to_string(&p).unwrap();
        let restored: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, restored);
    }
}
