//! Runtime orchestration for channeled skills.
//!
//! This crate wires the `game-core` targeting rules into live sessions: a
//! fixed-rate scheduler for periodic ticks, a shared registry tracking who is
//! channeling what onto whom, and a per-caster [`Channelizer`] state machine
//! that applies stacked channeling effects through injectable oracle seams.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the error types downstream clients interact with
//! - [`scheduler`] hosts the fixed-rate task loop and its cancel handle
//! - [`channel`] holds the registry and the per-caster session
//! - [`oracle`] provides the skill, effect, and notification adapters
pub mod api;
pub mod channel;
pub mod oracle;
pub mod scheduler;

pub use api::{Result, RuntimeError};
pub use channel::{ChannelRegistry, Channelizer, SharedWorld};
pub use oracle::{
    EffectApplication, EffectSink, EffectTable, EventNotifier, Notifier, RuntimeEvent,
    SkillOracle, SkillTable,
};
pub use scheduler::{Scheduler, TaskControl, TaskHandle};
