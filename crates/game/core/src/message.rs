//! Caster-directed system messages.
//!
//! Rejections and session aborts always surface one of these through the
//! runtime's notifier; configuration defects are log-only and have no
//! message.

/// A message shown to the caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemMessage {
    IncorrectTarget,
    CannotUseOnYourself,
    CantSeeTarget,
    MaliciousSkillInPeaceZone,
    SkillRemovedDueLackMp,
    TargetTooFar,
}

impl SystemMessage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IncorrectTarget => "incorrect target",
            Self::CannotUseOnYourself => "cannot use this on yourself",
            Self::CantSeeTarget => "cannot see target",
            Self::MaliciousSkillInPeaceZone => {
                "a malicious skill cannot be used in a peace zone"
            }
            Self::SkillRemovedDueLackMp => "skill removed due to lack of mp",
            Self::TargetTooFar => "target is too far away",
        }
    }
}
