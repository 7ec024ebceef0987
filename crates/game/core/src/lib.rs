//! Deterministic targeting rules and world state shared across the runtime.
//!
//! `game-core` defines the canonical skill targeting pipeline: target-type
//! resolution of the primary target, affect-scope expansion into the full
//! affected set, and the pairwise affect-object filters applied per
//! candidate. All queries flow through the [`env::WorldOracle`] seam so the
//! rules stay testable without a live world.
pub mod config;
pub mod env;
pub mod message;
pub mod skill;
pub mod state;

pub use config::GameConfig;
pub use env::WorldOracle;
pub use message::SystemMessage;
pub use skill::{
    AffectObject, AffectScope, CastIntent, ChannelingSpec, EffectFamilies, FanArc,
    SkillDescriptor, TargetError, TargetType,
};
pub use state::{
    ActorKind, ActorState, NpcProfile, ObjectId, Position, ResourceMeter, ShotCharges, SkillId,
    SocialLinks, StaticKind, World, ZoneFlags,
};
