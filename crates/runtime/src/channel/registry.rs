//! Target-side view of active channels.
//!
//! For each `(target, effect)` pair the registry holds the set of casters
//! currently channeling that effect onto that target. The set's cardinality
//! drives the stacked effect level.
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use game_core::{ObjectId, SkillId};

type Key = (ObjectId, SkillId);

/// Shared multiset of active channelizers, keyed by target and effect.
#[derive(Debug, Default)]
pub struct ChannelRegistry {
    channels: Mutex<HashMap<Key, HashSet<ObjectId>>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, HashMap<Key, HashSet<ObjectId>>> {
        self.channels.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Registers `channelizer` against `(target, effect)`. Re-adding an
    /// already-present channelizer is a no-op. Returns the cardinality after
    /// the operation.
    pub fn add_channelizer(
        &self,
        target: ObjectId,
        effect: SkillId,
        channelizer: ObjectId,
    ) -> usize {
        let mut channels = self.locked();
        let entry = channels.entry((target, effect)).or_default();
        entry.insert(channelizer);
        entry.len()
    }

    /// Removes `channelizer` from `(target, effect)`. Removing an absent
    /// channelizer is a no-op; an emptied entry is dropped. Returns the
    /// cardinality after the operation.
    pub fn remove_channelizer(
        &self,
        target: ObjectId,
        effect: SkillId,
        channelizer: ObjectId,
    ) -> usize {
        let mut channels = self.locked();
        let Some(entry) = channels.get_mut(&(target, effect)) else {
            return 0;
        };
        entry.remove(&channelizer);
        let remaining = entry.len();
        if remaining == 0 {
            channels.remove(&(target, effect));
        }
        remaining
    }

    /// Number of casters currently channeling `effect` onto `target`.
    pub fn channelizer_count(&self, target: ObjectId, effect: SkillId) -> usize {
        self.locked()
            .get(&(target, effect))
            .map_or(0, HashSet::len)
    }

    /// Whether anything is being channeled onto `target` at all.
    pub fn is_channelized(&self, target: ObjectId) -> bool {
        self.locked()
            .keys()
            .any(|(channelized, _)| *channelized == target)
    }

    /// Snapshot of the casters channeling `effect` onto `target`, in
    /// ascending id order.
    pub fn channelizers(&self, target: ObjectId, effect: SkillId) -> Vec<ObjectId> {
        let channels = self.locked();
        let mut casters: Vec<ObjectId> = channels
            .get(&(target, effect))
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        casters.sort();
        casters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: ObjectId = ObjectId(1);
    const EFFECT: SkillId = SkillId(5);

    #[test]
    fn add_is_idempotent_per_channelizer() {
        let registry = ChannelRegistry::new();
        assert_eq!(registry.add_channelizer(TARGET, EFFECT, ObjectId(10)), 1);
        assert_eq!(registry.add_channelizer(TARGET, EFFECT, ObjectId(10)), 1);
        assert_eq!(registry.add_channelizer(TARGET, EFFECT, ObjectId(11)), 2);
        assert_eq!(registry.channelizer_count(TARGET, EFFECT), 2);
    }

    #[test]
    fn remove_drops_empty_entries() {
        let registry = ChannelRegistry::new();
        registry.add_channelizer(TARGET, EFFECT, ObjectId(10));
        assert_eq!(registry.remove_channelizer(TARGET, EFFECT, ObjectId(10)), 0);
        assert!(!registry.is_channelized(TARGET));
        // Absent removals stay no-ops.
        assert_eq!(registry.remove_channelizer(TARGET, EFFECT, ObjectId(10)), 0);
    }

    #[test]
    fn effects_on_the_same_target_are_tracked_independently() {
        let registry = ChannelRegistry::new();
        registry.add_channelizer(TARGET, EFFECT, ObjectId(10));
        registry.add_channelizer(TARGET, SkillId(6), ObjectId(11));
        assert_eq!(registry.channelizer_count(TARGET, EFFECT), 1);
        assert_eq!(registry.channelizer_count(TARGET, SkillId(6)), 1);
        registry.remove_channelizer(TARGET, EFFECT, ObjectId(10));
        assert!(registry.is_channelized(TARGET));
        assert_eq!(registry.channelizers(TARGET, SkillId(6)), vec![ObjectId(11)]);
    }
}
