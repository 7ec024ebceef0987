//! Traits describing read-only world access.
//!
//! The targeting pipeline never touches a concrete world type directly; it
//! queries a [`WorldOracle`] so the rules can run against the in-memory
//! registry, a test fixture, or a full spatial index without changes.

use crate::state::{ActorState, ClanId, ObjectId, PartyId, Position};

/// Read-only world surface consumed by target resolution and scope expansion.
///
/// `nearby*` queries return a snapshot of ids; enumeration order is
/// unspecified by contract, though implementations should be deterministic so
/// capacity truncation is reproducible.
pub trait WorldOracle {
    /// Looks up a live actor. `None` means despawned or never known.
    fn actor(&self, id: ObjectId) -> Option<&ActorState>;

    /// Actors within `radius` of `origin`'s position, excluding `origin`.
    fn nearby(&self, origin: ObjectId, radius: u32) -> Vec<ObjectId>;

    /// Actors known to `from` within `radius` of `origin`'s position.
    /// Excludes `from`, includes `origin`.
    fn nearby_between(&self, from: ObjectId, origin: ObjectId, radius: u32) -> Vec<ObjectId>;

    /// Line of sight between two actors.
    fn can_see(&self, from: ObjectId, to: ObjectId) -> bool;

    /// Line of sight from an actor to an arbitrary world point.
    fn can_see_position(&self, from: ObjectId, to: Position) -> bool;

    /// Members of a party, companions excluded.
    fn party_members(&self, party: PartyId) -> Vec<ObjectId>;

    /// Online members of a clan, companions excluded.
    fn clan_members(&self, clan: ClanId) -> Vec<ObjectId>;

    /// The companion (pet or servitor) currently serving `owner`, if any.
    fn summon_of(&self, owner: ObjectId) -> Option<ObjectId>;
}
