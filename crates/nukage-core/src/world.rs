//! World container: every live mobj plus the participant array.
//!
//! Storage is a `BTreeMap` keyed by monotonically assigned [`EntityId`]s,
//! so iteration order is deterministic across platforms. The world is the
//! single shared mutable resource of the simulation; there is no interior
//! mutability and no locking because the simulation is single threaded.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, Mobj};
use crate::info::MobjKind;
use crate::player::{Player, PlayerId, MAX_PLAYERS};

/// Container for all mobjs and players in the current map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    mobjs: BTreeMap<EntityId, Mobj>,
    players: Vec<Player>,
    next_id: u64,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a mobj of `kind` at a position and returns its ID.
    pub fn spawn(&mut self, kind: MobjKind, pos: Vec2, z: f32) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        self.mobjs.insert(id, Mobj::new(id, kind, pos, z));
        id
    }

    /// Spawns a player body and registers its participant slot.
    ///
    /// # Panics
    ///
    /// Panics if [`MAX_PLAYERS`] participants are already registered; the
    /// session setup layer is responsible for never exceeding it.
    pub fn spawn_player(&mut self, pos: Vec2) -> (PlayerId, EntityId) {
        assert!(
            self.players.len() < MAX_PLAYERS,
            "participant slots exhausted"
        );
        let pid = PlayerId::new(self.players.len());
        let body = self.spawn(MobjKind::Player, pos, 0.0);
        if let Some(mobj) = self.mobjs.get_mut(&body) {
            mobj.player = Some(pid);
        }
        self.players.push(Player::new(body));
        (pid, body)
    }

    /// Removes a mobj from the simulation.
    pub fn remove(&mut self, id: EntityId) -> Option<Mobj> {
        self.mobjs.remove(&id)
    }

    /// Returns a mobj by ID.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Mobj> {
        self.mobjs.get(&id)
    }

    /// Returns a mutable mobj by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Mobj> {
        self.mobjs.get_mut(&id)
    }

    /// Iterates mobjs in ID order.
    pub fn mobjs(&self) -> impl Iterator<Item = &Mobj> {
        self.mobjs.values()
    }

    /// Number of live mobjs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mobjs.len()
    }

    /// True when no mobjs exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mobjs.is_empty()
    }

    /// The participant array.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of registered participants.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// A participant by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// A mutable participant by ID.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    /// Borrows a participant and its body mobj at the same time.
    ///
    /// The player array and the mobj map are separate fields, so the two
    /// mutable borrows are disjoint.
    pub fn player_with_body_mut(&mut self, id: PlayerId) -> Option<(&mut Player, &mut Mobj)> {
        let Self { mobjs, players, .. } = self;
        let player = players.get_mut(id.index())?;
        let body = mobjs.get_mut(&player.body)?;
        Some((player, body))
    }
}
