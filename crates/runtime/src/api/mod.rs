//! Public API surface shared by runtime consumers.
mod errors;

pub use errors::{Result, RuntimeError};
