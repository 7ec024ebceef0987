//! Compile-time rule constants.
//!
//! Mirrors the content-defined knobs the targeting pipeline depends on.
//! Anything that real content would configure per-world lives here as an
//! associated constant so the rules stay deterministic and easy to test.

/// Static configuration for the targeting and channeling rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    /// NPC template id of the advance-base outpost structure.
    pub const OUTPOST_TEMPLATE_ID: u32 = 36590;

    /// NPC template id of the rideable mount creature category.
    pub const MOUNT_TEMPLATE_ID: u32 = 12621;
}
