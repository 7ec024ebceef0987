//! In-memory actor registry with linear-scan spatial queries.
//!
//! This is the arena behind every id lookup: sessions and registries keep
//! [`ObjectId`]s and tolerate them resolving to nothing once an actor
//! despawns. Real deployments would back [`WorldOracle`] with a proper
//! spatial index; the registry scan is the reference semantics.

use std::collections::{BTreeMap, HashSet};

use crate::env::WorldOracle;

use super::actor::{ActorKind, ActorState, ClanId, PartyId};
use super::common::{ObjectId, Position};

/// Registry of every live actor, keyed by id.
///
/// Iteration (and therefore `nearby` enumeration order) follows ascending id,
/// which keeps capacity truncation deterministic in tests.
#[derive(Debug, Default)]
pub struct World {
    actors: BTreeMap<ObjectId, ActorState>,
    /// Actor pairs with broken line of sight (symmetric).
    sight_blocks: HashSet<(ObjectId, ObjectId)>,
    /// Actors whose view to their chosen ground point is obstructed.
    ground_blocks: HashSet<ObjectId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an actor.
    pub fn insert(&mut self, actor: ActorState) {
        self.actors.insert(actor.id, actor);
    }

    /// Removes an actor; outstanding ids simply stop resolving.
    pub fn remove(&mut self, id: ObjectId) -> Option<ActorState> {
        self.actors.remove(&id)
    }

    pub fn actor_mut(&mut self, id: ObjectId) -> Option<&mut ActorState> {
        self.actors.get_mut(&id)
    }

    pub fn actors(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.values()
    }

    /// Marks line of sight between two actors as obstructed.
    pub fn block_sight(&mut self, a: ObjectId, b: ObjectId) {
        self.sight_blocks.insert((a, b));
        self.sight_blocks.insert((b, a));
    }

    /// Marks the view from `caster` to its ground target as obstructed.
    pub fn block_ground_sight(&mut self, caster: ObjectId) {
        self.ground_blocks.insert(caster);
    }

    fn within(&self, origin: Position, radius: u32) -> impl Iterator<Item = &ActorState> {
        self.actors
            .values()
            .filter(move |actor| actor.position.is_within_range(origin, radius))
    }
}

impl WorldOracle for World {
    fn actor(&self, id: ObjectId) -> Option<&ActorState> {
        self.actors.get(&id)
    }

    fn nearby(&self, origin: ObjectId, radius: u32) -> Vec<ObjectId> {
        let Some(center) = self.actors.get(&origin) else {
            return Vec::new();
        };
        self.within(center.position, radius)
            .filter(|actor| actor.id != origin)
            .map(|actor| actor.id)
            .collect()
    }

    fn nearby_between(&self, from: ObjectId, origin: ObjectId, radius: u32) -> Vec<ObjectId> {
        let Some(center) = self.actors.get(&origin) else {
            return Vec::new();
        };
        self.within(center.position, radius)
            .filter(|actor| actor.id != from)
            .map(|actor| actor.id)
            .collect()
    }

    fn can_see(&self, from: ObjectId, to: ObjectId) -> bool {
        !self.sight_blocks.contains(&(from, to))
    }

    fn can_see_position(&self, from: ObjectId, _to: Position) -> bool {
        !self.ground_blocks.contains(&from)
    }

    fn party_members(&self, party: PartyId) -> Vec<ObjectId> {
        self.actors
            .values()
            .filter(|actor| actor.is_player() && actor.social.party == Some(party))
            .map(|actor| actor.id)
            .collect()
    }

    fn clan_members(&self, clan: ClanId) -> Vec<ObjectId> {
        self.actors
            .values()
            .filter(|actor| actor.is_player() && actor.social.clan == Some(clan))
            .map(|actor| actor.id)
            .collect()
    }

    fn summon_of(&self, owner: ObjectId) -> Option<ObjectId> {
        self.actors
            .values()
            .find(|actor| matches!(actor.kind, ActorKind::Summon { owner: o, .. } if o == owner))
            .map(|actor| actor.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor_at(id: u32, x: i32) -> ActorState {
        ActorState::new(ObjectId(id), ActorKind::Player, Position::new(x, 0, 0))
    }

    #[test]
    fn nearby_excludes_origin_and_respects_radius() {
        let mut world = World::new();
        world.insert(actor_at(1, 0));
        world.insert(actor_at(2, 50));
        world.insert(actor_at(3, 500));

        let found = world.nearby(ObjectId(1), 100);
        assert_eq!(found, vec![ObjectId(2)]);
    }

    #[test]
    fn nearby_between_includes_origin_but_not_caster() {
        let mut world = World::new();
        world.insert(actor_at(1, 0));
        world.insert(actor_at(2, 50));
        world.insert(actor_at(3, 60));

        let found = world.nearby_between(ObjectId(1), ObjectId(2), 100);
        assert_eq!(found, vec![ObjectId(2), ObjectId(3)]);
    }

    #[test]
    fn sight_blocks_are_symmetric() {
        let mut world = World::new();
        world.insert(actor_at(1, 0));
        world.insert(actor_at(2, 10));
        assert!(world.can_see(ObjectId(1), ObjectId(2)));
        world.block_sight(ObjectId(1), ObjectId(2));
        assert!(!world.can_see(ObjectId(1), ObjectId(2)));
        assert!(!world.can_see(ObjectId(2), ObjectId(1)));
    }
}
