//! Skill descriptors: the immutable data targeting runs on.
//!
//! A [`SkillDescriptor`] carries the target category, affect scope, affect
//! filter, and shape/capacity parameters. Channeling behavior is described by
//! an optional [`ChannelingSpec`] rather than a zero-means-none effect id.

pub mod targets;

use std::time::Duration;

use crate::state::SkillId;

pub use targets::{AffectObject, AffectScope, TargetError, TargetType};

bitflags::bitflags! {
    /// Coarse effect families consulted by category-specific guards.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EffectFamilies: u8 {
        /// Consumes the target corpse (drain-style effects).
        const DRAIN = 1 << 0;
    }
}

/// Fan-shaped affect area parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FanArc {
    /// Offset added to the caster-to-target heading, in degrees.
    pub start_angle: f64,
    /// Fan radius in game units.
    pub radius: u32,
    /// Full opening angle of the fan, in degrees.
    pub angle: f64,
}

/// Periodic channeling parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelingSpec {
    /// Effect applied (and stacked) on every tick.
    pub effect_id: SkillId,
    pub initial_delay: Duration,
    pub interval: Duration,
    /// Mana paid per tick; 0 channels for free.
    pub mp_per_tick: u32,
}

/// Caster intent accompanying a cast request.
///
/// `forced` is the explicit hostile confirmation (a held modifier key in the
/// client UI) required before striking a non-flagged player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastIntent {
    pub forced: bool,
}

impl CastIntent {
    pub const fn normal() -> Self {
        Self { forced: false }
    }

    pub const fn forced() -> Self {
        Self { forced: true }
    }
}

/// Immutable description of one skill level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDescriptor {
    pub id: SkillId,
    pub level: u8,
    pub target_type: TargetType,
    pub affect_scope: AffectScope,
    pub affect_object: AffectObject,
    /// Radius of the affect area in game units.
    pub affect_range: u32,
    /// Maximum affected entities; 0 means unlimited.
    pub affect_limit: u32,
    /// Maximum caster-to-target distance validated per channel tick.
    pub effect_range: u32,
    pub fan: FanArc,
    /// Harmful skills are rejected in no-harm zones and flag PvP.
    pub harmful: bool,
    pub effect_families: EffectFamilies,
    pub channeling: Option<ChannelingSpec>,
    /// Consumes spiritshots when charged; soulshots otherwise.
    pub uses_spiritshot: bool,
}

impl SkillDescriptor {
    pub fn new(
        id: SkillId,
        level: u8,
        target_type: TargetType,
        affect_scope: AffectScope,
        affect_object: AffectObject,
    ) -> Self {
        Self {
            id,
            level,
            target_type,
            affect_scope,
            affect_object,
            affect_range: 0,
            affect_limit: 0,
            effect_range: 0,
            fan: FanArc::default(),
            harmful: false,
            effect_families: EffectFamilies::empty(),
            channeling: None,
            uses_spiritshot: false,
        }
    }

    pub fn with_affect_range(mut self, range: u32) -> Self {
        self.affect_range = range;
        self
    }

    pub fn with_affect_limit(mut self, limit: u32) -> Self {
        self.affect_limit = limit;
        self
    }

    pub fn with_effect_range(mut self, range: u32) -> Self {
        self.effect_range = range;
        self
    }

    pub fn with_fan(mut self, fan: FanArc) -> Self {
        self.fan = fan;
        self
    }

    pub fn harmful(mut self) -> Self {
        self.harmful = true;
        self
    }

    pub fn with_effect_families(mut self, families: EffectFamilies) -> Self {
        self.effect_families = families;
        self
    }

    pub fn with_channeling(mut self, channeling: ChannelingSpec) -> Self {
        self.channeling = Some(channeling);
        self
    }

    pub fn is_channeling(&self) -> bool {
        self.channeling.is_some()
    }

    /// One-time normalization of the deprecated legacy target category.
    ///
    /// Must run when the descriptor is loaded; resolution itself never
    /// rewrites skill data. Returns true when the descriptor was rewritten so
    /// the loader can log a compatibility warning.
    pub fn normalize(&mut self) -> bool {
        if self.target_type != TargetType::Legacy {
            return false;
        }
        self.target_type = TargetType::Any;
        self.affect_scope = AffectScope::Single;
        self.affect_object = AffectObject::All;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rewrites_only_legacy_descriptors() {
        let mut legacy = SkillDescriptor::new(
            SkillId(1),
            1,
            TargetType::Legacy,
            AffectScope::Fan,
            AffectObject::NotFriend,
        );
        assert!(legacy.normalize());
        assert_eq!(legacy.target_type, TargetType::Any);
        assert_eq!(legacy.affect_scope, AffectScope::Single);
        assert_eq!(legacy.affect_object, AffectObject::All);

        let mut modern = SkillDescriptor::new(
            SkillId(2),
            1,
            TargetType::Enemy,
            AffectScope::Single,
            AffectObject::NotFriend,
        );
        assert!(!modern.normalize());
        assert_eq!(modern.target_type, TargetType::Enemy);
    }
}
