//! Skill definition lookup.
use std::collections::HashMap;

use tracing::warn;

use game_core::{SkillDescriptor, SkillId};

/// Read-only access to skill definitions, leveled per channeling stack.
pub trait SkillOracle: Send + Sync {
    /// The effect skill applied by a channel at the given stacked level.
    fn channeling_skill(&self, id: SkillId, level: u8) -> Option<SkillDescriptor>;

    /// Highest defined level for `id`; the stacked level is capped here.
    fn max_level(&self, id: SkillId) -> u8;
}

/// In-memory skill table keyed by id and level.
#[derive(Debug, Default)]
pub struct SkillTable {
    skills: HashMap<(SkillId, u8), SkillDescriptor>,
}

impl SkillTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, rewriting the deprecated generic target
    /// category on the way in.
    pub fn add(&mut self, mut skill: SkillDescriptor) {
        if skill.normalize() {
            warn!(skill = %skill.id, level = skill.level, "legacy target category rewritten");
        }
        self.skills.insert((skill.id, skill.level), skill);
    }

    pub fn with(mut self, skill: SkillDescriptor) -> Self {
        self.add(skill);
        self
    }
}

impl SkillOracle for SkillTable {
    fn channeling_skill(&self, id: SkillId, level: u8) -> Option<SkillDescriptor> {
        self.skills.get(&(id, level)).cloned()
    }

    fn max_level(&self, id: SkillId) -> u8 {
        self.skills
            .keys()
            .filter(|(skill, _)| *skill == id)
            .map(|(_, level)| *level)
            .max()
            .unwrap_or(0)
    }
}
