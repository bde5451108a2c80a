//! Canonical message keys for the transient player HUD line.
//!
//! The core only selects which message applies, plus any format argument;
//! localization and string lookup are the embedding game's concern.

use serde::{Deserialize, Serialize};

/// A canonical message key with optional format arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageId {
    // Armor
    /// Picked up green armor.
    GotArmor,
    /// Picked up blue armor.
    GotMegaArmor,
    // Bonus items
    /// Picked up a health bonus.
    GotHealthBonus,
    /// Picked up an armor bonus.
    GotArmorBonus,
    /// Picked up a soulsphere.
    GotSoulsphere,
    /// Picked up a megasphere.
    GotMegasphere,
    // Keys
    /// Picked up a blue keycard.
    GotBlueCard,
    /// Picked up a yellow keycard.
    GotYellowCard,
    /// Picked up a red keycard.
    GotRedCard,
    /// Picked up a blue skull key.
    GotBlueSkull,
    /// Picked up a yellow skull key.
    GotYellowSkull,
    /// Picked up a red skull key.
    GotRedSkull,
    // Health
    /// Picked up a stimpack.
    GotStimpack,
    /// Picked up a medikit that was really needed.
    GotMedikitNeeded,
    /// Picked up a medikit.
    GotMedikit,
    // Power-ups
    /// Invulnerability.
    GotInvulnerability,
    /// Berserk strength.
    GotBerserk,
    /// Partial invisibility.
    GotInvisibility,
    /// Radiation shielding suit.
    GotRadiationSuit,
    /// Computer area map.
    GotComputerMap,
    /// Light amplification goggles.
    GotLightGoggles,
    // Ammo
    /// Picked up a clip.
    GotClip,
    /// Picked up a box of bullets.
    GotClipBox,
    /// Picked up a rocket.
    GotRocket,
    /// Picked up a box of rockets.
    GotRocketBox,
    /// Picked up an energy cell.
    GotCell,
    /// Picked up an energy cell pack.
    GotCellPack,
    /// Picked up four shotgun shells.
    GotShells,
    /// Picked up a box of shells.
    GotShellBox,
    /// Picked up a backpack full of ammo.
    GotBackpack,
    // Weapons
    /// Picked up the BFG 9000.
    GotBfg9000,
    /// Picked up the chaingun.
    GotChaingun,
    /// Picked up the chainsaw.
    GotChainsaw,
    /// Picked up the rocket launcher.
    GotRocketLauncher,
    /// Picked up the plasma rifle.
    GotPlasmaRifle,
    /// Picked up the shotgun.
    GotShotgun,
    /// Picked up the super shotgun.
    GotSuperShotgun,
    // Automap
    /// Follow mode switched on.
    AutomapFollowOn,
    /// Follow mode switched off.
    AutomapFollowOff,
    /// Grid overlay switched on.
    AutomapGridOn,
    /// Grid overlay switched off.
    AutomapGridOff,
    /// Placed a numbered mark; the argument is the mark index.
    AutomapMarkedSpot(u8),
    /// Cleared all marks.
    AutomapMarksCleared,
}
