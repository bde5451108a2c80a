//! Session-wide rule flags: mission variant, difficulty, multiplayer mode,
//! and the compatibility toggles for preserved historical quirks.

use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Mission variant. Gates content such as the megasphere and the super
/// shotgun, which only exist in the Commercial release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Demo episode.
    Shareware,
    /// Full original release.
    #[default]
    Registered,
    /// Commercial sequel data.
    Commercial,
}

/// Difficulty tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skill {
    /// Easiest: doubled ammo pickups, player damage halved.
    Baby,
    /// Easy.
    Easy,
    /// Normal.
    #[default]
    Medium,
    /// Hard.
    Hard,
    /// Hardest: doubled ammo pickups.
    Nightmare,
}

impl Skill {
    /// Ammo pickups grant double quantity on the easiest and hardest tiers.
    #[must_use]
    pub const fn doubles_ammo(self) -> bool {
        matches!(self, Self::Baby | Self::Nightmare)
    }

    /// Player damage is halved on the easiest tier.
    #[must_use]
    pub const fn halves_player_damage(self) -> bool {
        matches!(self, Self::Baby)
    }
}

/// Deathmatch rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathmatchMode {
    /// Cooperative or single player.
    #[default]
    Off,
    /// Classic deathmatch: placed weapons stay in the world for everyone.
    WeaponsStay,
    /// Alternate deathmatch: items respawn, weapons are consumed normally.
    ItemRespawn,
}

/// Compatibility toggles for deliberately preserved odd behaviours.
///
/// The original keeps these unconditional; defaults reproduce it. The
/// struct exists as the documented override point rather than a promise
/// that other combinations are sensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compat {
    /// Pre-1.9 engines let a mobj acquire itself as a chase target.
    pub allow_self_chase: bool,
    /// Dying monsters drop their weapon or clip.
    pub monster_drops: bool,
}

impl Default for Compat {
    fn default() -> Self {
        Self {
            allow_self_chase: false,
            monster_drops: true,
        }
    }
}

/// The session rule set passed into both pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Mission variant.
    pub mode: GameMode,
    /// Difficulty tier.
    pub skill: Skill,
    /// True in any multi-participant session.
    pub netgame: bool,
    /// Deathmatch rule set; meaningless unless `netgame`.
    pub deathmatch: DeathmatchMode,
    /// The locally controlled participant; pickup sounds and the automap
    /// close signal are only routed for this player.
    pub console_player: PlayerId,
    /// Historical-quirk toggles.
    pub compat: Compat,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            skill: Skill::default(),
            netgame: false,
            deathmatch: DeathmatchMode::default(),
            console_player: PlayerId::new(0),
            compat: Compat::default(),
        }
    }
}

impl GameRules {
    /// True in any deathmatch rule set.
    #[must_use]
    pub const fn is_deathmatch(&self) -> bool {
        !matches!(self.deathmatch, DeathmatchMode::Off)
    }

    /// Whether a touched weapon persists in the world for other
    /// participants instead of being consumed.
    #[must_use]
    pub const fn weapons_stay(&self, dropped: bool) -> bool {
        self.netgame && !matches!(self.deathmatch, DeathmatchMode::ItemRespawn) && !dropped
    }
}
