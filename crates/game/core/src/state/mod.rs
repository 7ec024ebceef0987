//! World state: actor identity, actor data, and the live registry.
mod actor;
mod common;
mod world;

pub use actor::{
    ActorKind, ActorState, AllyId, ClanId, CommandChannelId, DuelSlot, DuelTeam, NpcProfile,
    OlympiadSlot, PartyId, SocialLinks, StaticKind,
};
pub use common::{ObjectId, Position, ResourceMeter, ShotCharges, SkillId, ZoneFlags};
pub use world::World;
