//! Capability flags carried by every entity at runtime.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Behaviour, collision and bookkeeping flags for an entity.
    ///
    /// Both pipelines read and mutate these. The invariant `health <= 0
    /// implies CORPSE set and SHOOTABLE clear` is maintained by the kill
    /// sub-routine, not by this type.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MobjFlags: u32 {
        /// Pickup-on-touch item; the collision layer routes touches here.
        const SPECIAL    = 0x0000_0001;
        /// Blocks movement.
        const SOLID      = 0x0000_0002;
        /// Can be hit; damage against non-shootable targets is a no-op.
        const SHOOTABLE  = 0x0000_0004;
        /// Set when a pain state was just entered, makes monsters fight back.
        const JUST_HIT   = 0x0000_0008;
        /// Not affected by gravity.
        const NO_GRAVITY = 0x0000_0010;
        /// Corpses may slide off ledges.
        const DROPOFF    = 0x0000_0020;
        /// Passes through walls and other entities; never knocked back.
        const NO_CLIP    = 0x0000_0040;
        /// Floating monster, cleared on death.
        const FLOAT      = 0x0000_0080;
        /// In-flight projectile.
        const MISSILE    = 0x0000_0100;
        /// Dropped by a dying enemy rather than placed in the level.
        const DROPPED    = 0x0000_0200;
        /// Fuzzy/invisible render, set by the invisibility power-up.
        const SHADOW     = 0x0000_0400;
        /// Dead; decays externally.
        const CORPSE     = 0x0000_0800;
        /// Counts toward the kill tally when killed.
        const COUNT_KILL = 0x0000_1000;
        /// Counts toward the item tally when picked up.
        const COUNT_ITEM = 0x0000_2000;
        /// Mid charging ram attack (flying skull).
        const SKULL_FLY  = 0x0000_4000;
        /// Spawned asleep, ignores sound wake-ups.
        const AMBUSH     = 0x0000_8000;
    }
}
