//! Static per-type game data.
//!
//! This module is the closed catalogue the two pipelines dispatch over:
//! - [`MobjKind`]: every entity type the core simulates or spawns
//! - [`MobjInfo`]: per-kind constants (spawn health, pain chance, mass, ...)
//! - [`SpriteTag`]: the visual tag the pickup chain dispatches on
//! - [`SoundId`]: sound effects emitted as side effects
//! - [`StateLabel`]: the coarse animation/behaviour states the rules touch
//!
//! Everything here is a closed enumeration resolved with exhaustive
//! matches, so adding a kind without wiring its data is a compile error
//! rather than a silent fall-through.

use serde::{Deserialize, Serialize};

use crate::entity::flags::MobjFlags;

/// Sound effects the pipelines request from the external audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundId {
    /// Generic pickup blip, the default for any accepted pickup.
    ItemUp,
    /// Weapon pickup fanfare.
    WeaponUp,
    /// Power-up and sphere pickup sound.
    GetPower,
}

/// Coarse animation/behaviour states referenced by the rule engine.
///
/// Frame-level animation lives outside this core; the pipelines only need
/// to know which of these a type is in and to switch between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateLabel {
    /// Idle as spawned; monsters in this state have not been alerted.
    Spawn,
    /// Alerted and chasing.
    See,
    /// Flinching from a non-lethal hit.
    Pain,
    /// Normal death animation.
    Death,
    /// Gruesome death animation for heavy overkill.
    XDeath,
}

impl StateLabel {
    /// Baseline duration in tics for the first frame of the state.
    ///
    /// Negative means the state never times out on its own.
    #[must_use]
    pub const fn base_tics(self) -> i32 {
        match self {
            Self::Spawn => -1,
            Self::See => 4,
            Self::Pain => 6,
            Self::Death => 10,
            Self::XDeath => 5,
        }
    }
}

/// Visual sprite tag. The pickup chain dispatches on this, never on the
/// entity kind, matching how the original item tables were keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteTag {
    // Armor
    GreenArmor,
    BlueArmor,
    // Bonus items
    HealthBonus,
    ArmorBonus,
    Soulsphere,
    Megasphere,
    // Keys
    BlueCard,
    YellowCard,
    RedCard,
    BlueSkull,
    YellowSkull,
    RedSkull,
    // Health
    Stimpack,
    Medikit,
    // Power-ups
    InvulnSphere,
    Berserk,
    BlurSphere,
    RadiationSuit,
    ComputerMap,
    LightGoggles,
    // Ammo
    Clip,
    ClipBox,
    Rocket,
    RocketBox,
    Cell,
    CellPack,
    Shells,
    ShellBox,
    Backpack,
    // Weapons
    BfgSprite,
    ChaingunSprite,
    ChainsawSprite,
    LauncherSprite,
    PlasmaSprite,
    ShotgunSprite,
    SuperShotgunSprite,
    // Actors and scenery (never gettable)
    PlayerSprite,
    TrooperSprite,
    SergeantSprite,
    CommandoSprite,
    GuardSprite,
    ImpSprite,
    DemonSprite,
    SkullSprite,
    VileSprite,
    Candelabra,
}

/// Every entity type the core simulates, references, or spawns as a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MobjKind {
    /// A participant's body.
    Player,
    // Monsters
    /// Former human rifleman, drops a clip.
    Trooper,
    /// Former human shotgunner, drops its shotgun.
    Sergeant,
    /// Former human commando, drops its chaingun.
    Commando,
    /// Secret-level trooper, drops a clip.
    Guard,
    /// Imp.
    Imp,
    /// Demon.
    Demon,
    /// Flying skull; rams with a charging attack and keeps floating as a
    /// corpse.
    LostSoul,
    /// Arch-vile; always retargets its attacker and is never chased.
    Archvile,
    // Pickups
    /// Green armor, tier 1.
    GreenArmor,
    /// Blue armor, tier 2.
    BlueArmor,
    /// +1 health bonus, may exceed the normal cap.
    HealthBonus,
    /// +1 armor bonus, may exceed the normal cap.
    ArmorBonus,
    /// Soulsphere, +100 health up to the bonus cap.
    Soulsphere,
    /// Megasphere, full health plus tier-2 armor (Commercial only).
    Megasphere,
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
    /// Stimpack, +10 health.
    Stimpack,
    /// Medikit, +25 health.
    Medikit,
    /// Invulnerability sphere.
    InvulnSphere,
    /// Berserk pack.
    Berserk,
    /// Partial invisibility sphere.
    BlurSphere,
    /// Radiation shielding suit.
    RadiationSuit,
    /// Computer area map.
    ComputerMap,
    /// Light amplification goggles.
    LightGoggles,
    /// Ammo clip; also the drop for dead troopers and guards.
    Clip,
    /// Box of bullets.
    ClipBox,
    /// Single rocket.
    Rocket,
    /// Box of rockets.
    RocketBox,
    /// Energy cell.
    Cell,
    /// Energy cell pack.
    CellPack,
    /// Four shotgun shells.
    Shells,
    /// Box of shells.
    ShellBox,
    /// Backpack, doubles ammo maxima once.
    Backpack,
    /// BFG 9000 pickup.
    Bfg9000,
    /// Chaingun pickup; also the drop for dead commandos.
    Chaingun,
    /// Chainsaw pickup.
    Chainsaw,
    /// Rocket launcher pickup.
    RocketLauncher,
    /// Plasma rifle pickup.
    PlasmaRifle,
    /// Shotgun pickup; also the drop for dead sergeants.
    Shotgun,
    /// Super shotgun pickup (Commercial only).
    SuperShotgun,
    /// Scenery used in tests as a never-gettable touchable.
    Candelabra,
}

/// Per-kind static constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MobjInfo {
    /// Health assigned at spawn; overkill below its negation selects the
    /// gruesome death animation.
    pub spawn_health: i32,
    /// Pain probability out of 256, compared against one PRNG byte draw.
    /// 256 means the pain state is always entered.
    pub pain_chance: u16,
    /// Mass; divides into knockback thrust.
    pub mass: i32,
    /// Collision height in map units, quartered on death.
    pub height: f32,
    /// Visual tag; keys the pickup dispatch chain.
    pub sprite: SpriteTag,
    /// Flags applied at spawn.
    pub spawn_flags: MobjFlags,
    /// Item spawned when a monster of this kind dies, if any.
    pub drops: Option<MobjKind>,
    /// Whether the kind has an alerted chase state.
    pub has_see: bool,
    /// Whether the kind has a separate gruesome death animation.
    pub has_xdeath: bool,
}

const MONSTER_FLAGS: MobjFlags = MobjFlags::SOLID
    .union(MobjFlags::SHOOTABLE)
    .union(MobjFlags::COUNT_KILL);

const ITEM_FLAGS: MobjFlags = MobjFlags::SPECIAL;

const ARTIFACT_FLAGS: MobjFlags = MobjFlags::SPECIAL.union(MobjFlags::COUNT_ITEM);

impl MobjInfo {
    const fn monster(
        spawn_health: i32,
        pain_chance: u16,
        mass: i32,
        sprite: SpriteTag,
        drops: Option<MobjKind>,
    ) -> Self {
        Self {
            spawn_health,
            pain_chance,
            mass,
            height: 56.0,
            sprite,
            spawn_flags: MONSTER_FLAGS,
            drops,
            has_see: true,
            has_xdeath: true,
        }
    }

    const fn item(sprite: SpriteTag, counted: bool) -> Self {
        Self {
            spawn_health: 1000,
            pain_chance: 0,
            mass: 100,
            height: 16.0,
            sprite,
            spawn_flags: if counted { ARTIFACT_FLAGS } else { ITEM_FLAGS },
            drops: None,
            has_see: false,
            has_xdeath: false,
        }
    }
}

impl MobjKind {
    /// Looks up the static constants for this kind.
    #[must_use]
    pub const fn info(self) -> MobjInfo {
        match self {
            Self::Player => MobjInfo {
                spawn_health: 100,
                pain_chance: 255,
                mass: 100,
                height: 56.0,
                sprite: SpriteTag::PlayerSprite,
                spawn_flags: MobjFlags::SOLID
                    .union(MobjFlags::SHOOTABLE)
                    .union(MobjFlags::DROPOFF),
                drops: None,
                has_see: true,
                has_xdeath: true,
            },
            Self::Trooper => MobjInfo::monster(
                20,
                200,
                100,
                SpriteTag::TrooperSprite,
                Some(Self::Clip),
            ),
            Self::Sergeant => MobjInfo::monster(
                30,
                170,
                100,
                SpriteTag::SergeantSprite,
                Some(Self::Shotgun),
            ),
            Self::Commando => MobjInfo::monster(
                70,
                170,
                100,
                SpriteTag::CommandoSprite,
                Some(Self::Chaingun),
            ),
            Self::Guard => MobjInfo::monster(
                50,
                170,
                100,
                SpriteTag::GuardSprite,
                Some(Self::Clip),
            ),
            Self::Imp => MobjInfo::monster(60, 200, 100, SpriteTag::ImpSprite, None),
            Self::Demon => MobjInfo::monster(150, 180, 400, SpriteTag::DemonSprite, None),
            Self::LostSoul => MobjInfo {
                // Pain chance 256: a skull always flinches when hurt.
                pain_chance: 256,
                has_xdeath: false,
                spawn_flags: MONSTER_FLAGS
                    .union(MobjFlags::FLOAT)
                    .union(MobjFlags::NO_GRAVITY)
                    // Skulls do not count toward the kill tally.
                    .difference(MobjFlags::COUNT_KILL),
                ..MobjInfo::monster(100, 0, 50, SpriteTag::SkullSprite, None)
            },
            Self::Archvile => {
                MobjInfo::monster(700, 10, 500, SpriteTag::VileSprite, None)
            }
            Self::GreenArmor => MobjInfo::item(SpriteTag::GreenArmor, false),
            Self::BlueArmor => MobjInfo::item(SpriteTag::BlueArmor, false),
            Self::HealthBonus => MobjInfo::item(SpriteTag::HealthBonus, true),
            Self::ArmorBonus => MobjInfo::item(SpriteTag::ArmorBonus, true),
            Self::Soulsphere => MobjInfo::item(SpriteTag::Soulsphere, true),
            Self::Megasphere => MobjInfo::item(SpriteTag::Megasphere, true),
            Self::BlueCard => MobjInfo::item(SpriteTag::BlueCard, false),
            Self::YellowCard => MobjInfo::item(SpriteTag::YellowCard, false),
            Self::RedCard => MobjInfo::item(SpriteTag::RedCard, false),
            Self::BlueSkull => MobjInfo::item(SpriteTag::BlueSkull, false),
            Self::YellowSkull => MobjInfo::item(SpriteTag::YellowSkull, false),
            Self::RedSkull => MobjInfo::item(SpriteTag::RedSkull, false),
            Self::Stimpack => MobjInfo::item(SpriteTag::Stimpack, false),
            Self::Medikit => MobjInfo::item(SpriteTag::Medikit, false),
            Self::InvulnSphere => MobjInfo::item(SpriteTag::InvulnSphere, true),
            Self::Berserk => MobjInfo::item(SpriteTag::Berserk, true),
            Self::BlurSphere => MobjInfo::item(SpriteTag::BlurSphere, true),
            Self::RadiationSuit => MobjInfo::item(SpriteTag::RadiationSuit, false),
            Self::ComputerMap => MobjInfo::item(SpriteTag::ComputerMap, true),
            Self::LightGoggles => MobjInfo::item(SpriteTag::LightGoggles, true),
            Self::Clip => MobjInfo::item(SpriteTag::Clip, false),
            Self::ClipBox => MobjInfo::item(SpriteTag::ClipBox, false),
            Self::Rocket => MobjInfo::item(SpriteTag::Rocket, false),
            Self::RocketBox => MobjInfo::item(SpriteTag::RocketBox, false),
            Self::Cell => MobjInfo::item(SpriteTag::Cell, false),
            Self::CellPack => MobjInfo::item(SpriteTag::CellPack, false),
            Self::Shells => MobjInfo::item(SpriteTag::Shells, false),
            Self::ShellBox => MobjInfo::item(SpriteTag::ShellBox, false),
            Self::Backpack => MobjInfo::item(SpriteTag::Backpack, false),
            Self::Bfg9000 => MobjInfo::item(SpriteTag::BfgSprite, false),
            Self::Chaingun => MobjInfo::item(SpriteTag::ChaingunSprite, false),
            Self::Chainsaw => MobjInfo::item(SpriteTag::ChainsawSprite, false),
            Self::RocketLauncher => MobjInfo::item(SpriteTag::LauncherSprite, false),
            Self::PlasmaRifle => MobjInfo::item(SpriteTag::PlasmaSprite, false),
            Self::Shotgun => MobjInfo::item(SpriteTag::ShotgunSprite, false),
            Self::SuperShotgun => MobjInfo::item(SpriteTag::SuperShotgunSprite, false),
            Self::Candelabra => MobjInfo {
                spawn_flags: MobjFlags::SOLID,
                ..MobjInfo::item(SpriteTag::Candelabra, false)
            },
        }
    }
}
