//! Unified error types surfaced by the runtime API.
//!
//! Redundant session transitions (starting while active, stopping while idle)
//! are logged and ignored rather than bubbled; errors here are the failures a
//! caller can actually act on.
use thiserror::Error;

use game_core::{SkillId, TargetError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("skill {0} has no channeling definition")]
    NotChannelable(SkillId),

    #[error("no channeling effect registered for skill {id} at level {level}")]
    MissingSkillDefinition { id: SkillId, level: u8 },

    #[error(transparent)]
    Target(#[from] TargetError),
}
