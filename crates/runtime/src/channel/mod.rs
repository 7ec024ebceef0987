//! Channeling state: the shared target-side registry and the caster-side
//! session state machine.
mod registry;
mod session;

pub use registry::ChannelRegistry;
pub use session::{Channelizer, SharedWorld};
