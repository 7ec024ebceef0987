//! Pairwise secondary-eligibility filters.
//!
//! Applied as the final per-candidate gate inside scope expansion, and
//! directly by single-target scopes. Pure predicates over two actor states.

use strum::{Display, EnumIter};

use crate::config::GameConfig;
use crate::state::ActorState;

/// Secondary eligibility of a candidate relative to the cast source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AffectObject {
    /// Accepts everything.
    All,
    /// Same clan as the source.
    Clan,
    /// Non-hostile: not attack-eligible for the source.
    Friend,
    /// Concealed hideout occupants. Not implemented; never matches.
    HiddenPlace,
    /// Invisible candidates only.
    Invisible,
    /// Accepts nothing.
    None,
    /// Hostile: attack-eligible for the source and still alive.
    NotFriend,
    /// Dead NPC corpses.
    DeadNpcBody,
    /// Undead NPCs.
    UndeadEnemy,
    /// The rideable mount creature category.
    Mount,
}

impl AffectObject {
    /// Whether `candidate` passes this filter for a cast by `source`.
    pub fn eligible(&self, source: &ActorState, candidate: &ActorState) -> bool {
        match self {
            Self::All => true,
            Self::None => false,
            Self::Clan => {
                source.is_playable()
                    && source.social.clan.is_some()
                    && candidate.is_playable()
                    && source.is_in_clan_with(candidate)
            }
            Self::Friend => !candidate.is_auto_attackable_by(source),
            Self::NotFriend => {
                !candidate.is_dead() && candidate.is_auto_attackable_by(source)
            }
            Self::HiddenPlace => false,
            Self::Invisible => candidate.invisible,
            Self::DeadNpcBody => candidate.is_npc() && candidate.is_dead(),
            Self::UndeadEnemy => candidate
                .npc_profile()
                .is_some_and(|profile| profile.undead),
            Self::Mount => candidate
                .npc_profile()
                .is_some_and(|profile| profile.template_id == GameConfig::MOUNT_TEMPLATE_ID),
        }
    }
}
