//! The simulation context: the single owner of all mutable rule-engine
//! state.
//!
//! [`Simulation`] bundles the world, the seeded PRNG, the session rules,
//! the event log, and the automap overlay, and exposes the two pipeline
//! entry points. Everything is single threaded; determinism follows from
//! the seed, the call sequence, and nothing else.

use glam::Vec2;
use tracing::info;

use crate::automap::{Automap, AutomapCommand};
use crate::damage;
use crate::entity::EntityId;
use crate::error::GameDataError;
use crate::event::Event;
use crate::pickup;
use crate::player::PowerKind;
use crate::rng::SimRng;
use crate::rules::GameRules;
use crate::world::World;

/// Owns the full mutable state of one level run.
#[derive(Debug)]
pub struct Simulation {
    world: World,
    rng: SimRng,
    rules: GameRules,
    events: Vec<Event>,
    automap: Automap,
    tick: u64,
}

impl Simulation {
    /// Creates a simulation with the given rules and PRNG seed.
    #[must_use]
    pub fn new(rules: GameRules, seed: u64) -> Self {
        info!(seed, ?rules, "simulation created");
        Self {
            world: World::new(),
            rng: SimRng::new(seed),
            rules,
            events: Vec::new(),
            automap: Automap::new(),
            tick: 0,
        }
    }

    /// The world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// The world, mutably. The level/AI layer spawns and moves through
    /// this.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The session rules.
    #[must_use]
    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// The automap overlay.
    #[must_use]
    pub const fn automap(&self) -> &Automap {
        &self.automap
    }

    /// Completed tics since the run started.
    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Total PRNG draws so far; replays must agree on this at every tick.
    #[must_use]
    pub const fn rng_draws(&self) -> u64 {
        self.rng.draws()
    }

    /// Resolves a touch between a special object and a toucher.
    ///
    /// # Errors
    ///
    /// [`GameDataError::UnknownPickup`] when the touched special's sprite
    /// tag matches no pickup category.
    pub fn touch_special(
        &mut self,
        special: EntityId,
        toucher: EntityId,
    ) -> Result<(), GameDataError> {
        pickup::touch_special(&mut self.world, &self.rules, &mut self.events, special, toucher)
    }

    /// Applies damage to a target through the full pipeline.
    pub fn damage_mobj(
        &mut self,
        target: EntityId,
        inflictor: Option<EntityId>,
        source: Option<EntityId>,
        damage: i32,
    ) {
        damage::damage_mobj(
            &mut self.world,
            &mut self.rng,
            &self.rules,
            &mut self.events,
            &mut self.automap,
            target,
            inflictor,
            source,
            damage,
        );
    }

    /// Kills a target outright, outside the damage pipeline (scripted
    /// deaths, telefrags).
    pub fn kill_mobj(&mut self, target: EntityId, source: Option<EntityId>) {
        damage::kill_mobj(
            &mut self.world,
            &mut self.rng,
            &self.rules,
            &mut self.events,
            &mut self.automap,
            target,
            source,
        );
    }

    /// Routes a discrete automap command for the console player.
    ///
    /// Returns whether the overlay consumed it.
    pub fn automap_command(&mut self, cmd: AutomapCommand) -> bool {
        let pid = self.rules.console_player;
        let pos = self
            .world
            .player(pid)
            .and_then(|p| self.world.get(p.body))
            .map_or(Vec2::ZERO, |body| body.pos);
        let Some(player) = self.world.player_mut(pid) else {
            return false;
        };
        self.automap.handle_command(cmd, pos, player)
    }

    /// Feeds a raw keydown to the automap cheat detector.
    pub fn automap_key(&mut self, key: u8) {
        self.automap.key_down(key);
    }

    /// Advances the per-tick counters: flash countdowns and timed
    /// power-ups. The level/AI layer runs mobj thinking separately.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
        for i in 0..self.world.player_count() {
            let Some(player) = self.world.player_mut(crate::player::PlayerId::new(i)) else {
                continue;
            };
            if player.bonus_count > 0 {
                player.bonus_count -= 1;
            }
            if player.damage_count > 0 {
                player.damage_count -= 1;
            }
            for power in [
                PowerKind::Invulnerability,
                PowerKind::Invisibility,
                PowerKind::IronFeet,
                PowerKind::Infrared,
            ] {
                let left = player.power(power);
                if left > 0 {
                    player.set_power(power, left - 1);
                }
            }
            // Strength and Allmap last the rest of the level.
        }
    }

    /// Drains the accumulated event log.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// The accumulated events without draining them.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
