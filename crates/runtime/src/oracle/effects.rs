//! Seam to the effect system fed by channeling ticks.
use std::collections::HashMap;
use std::sync::Mutex;

use game_core::{ObjectId, SkillId};

/// Where channeling ticks deliver their stacked effects.
pub trait EffectSink: Send + Sync {
    /// Applies `effect` at `level` onto `target`, replacing any level already
    /// present.
    fn apply(&self, effect: SkillId, level: u8, source: ObjectId, target: ObjectId);

    /// Removes `effect` from `target` entirely.
    fn remove(&self, effect: SkillId, target: ObjectId);

    /// Level currently active on `target`, if any.
    fn active_level(&self, effect: SkillId, target: ObjectId) -> Option<u8>;
}

/// One call into [`EffectSink::apply`], kept for assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectApplication {
    pub effect: SkillId,
    pub level: u8,
    pub source: ObjectId,
    pub target: ObjectId,
}

/// In-memory effect store standing in for the buff system.
#[derive(Debug, Default)]
pub struct EffectTable {
    active: Mutex<HashMap<(SkillId, ObjectId), u8>>,
    history: Mutex<Vec<EffectApplication>>,
}

impl EffectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every apply call observed, in order.
    pub fn applications(&self) -> Vec<EffectApplication> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl EffectSink for EffectTable {
    fn apply(&self, effect: SkillId, level: u8, source: ObjectId, target: ObjectId) {
        self.active
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert((effect, target), level);
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(EffectApplication {
                effect,
                level,
                source,
                target,
            });
    }

    fn remove(&self, effect: SkillId, target: ObjectId) {
        self.active
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&(effect, target));
    }

    fn active_level(&self, effect: SkillId, target: ObjectId) -> Option<u8> {
        self.active
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&(effect, target))
            .copied()
    }
}
