//! Injectable adapters around the systems a channeling session touches.
//!
//! Each seam is a trait with an in-memory implementation: skill definitions,
//! the effect system the ticks feed, and caster-facing notifications. The
//! session only sees the traits, so tests swap in whatever they need.
mod effects;
mod notify;
mod skills;

pub use effects::{EffectApplication, EffectSink, EffectTable};
pub use notify::{EventNotifier, Notifier, RuntimeEvent};
pub use skills::{SkillOracle, SkillTable};
