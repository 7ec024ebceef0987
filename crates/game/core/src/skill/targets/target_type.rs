//! Primary-target resolution, one rule per target category.
//!
//! Each variant validates the caster-chosen candidate against its own
//! legality predicate. Resolution never panics and never mutates: a rejected
//! candidate comes back as a [`TargetError`] carrying the caster-facing
//! reason (or silence), and the legacy category is handled by load-time
//! descriptor normalization, not by rewriting skills here.

use strum::{Display, EnumIter};
use thiserror::Error;

use crate::config::GameConfig;
use crate::env::WorldOracle;
use crate::message::SystemMessage;
use crate::skill::{CastIntent, EffectFamilies, SkillDescriptor};
use crate::state::{ActorKind, ActorState, ObjectId, StaticKind, ZoneFlags};

/// Why resolution produced no target.
///
/// Every variant except [`TargetError::NoTarget`] maps to a caster-facing
/// message; `NoTarget` is the silent absence the structural categories use.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("incorrect target")]
    IncorrectTarget,
    #[error("cannot use this on yourself")]
    CannotUseOnYourself,
    #[error("cannot see target")]
    CantSeeTarget,
    #[error("a malicious skill cannot be used in a peace zone")]
    MaliciousSkillInPeaceZone,
    #[error("no target")]
    NoTarget,
}

impl TargetError {
    /// The message shown to the caster, if this rejection has one.
    pub fn message(&self) -> Option<SystemMessage> {
        match self {
            Self::IncorrectTarget => Some(SystemMessage::IncorrectTarget),
            Self::CannotUseOnYourself => Some(SystemMessage::CannotUseOnYourself),
            Self::CantSeeTarget => Some(SystemMessage::CantSeeTarget),
            Self::MaliciousSkillInPeaceZone => Some(SystemMessage::MaliciousSkillInPeaceZone),
            Self::NoTarget => None,
        }
    }
}

/// Target category of a skill: how the primary target is validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetType {
    /// Advance-base outposts.
    Outpost,
    /// Enemies behind fortifications: attackable doors.
    Artillery,
    /// Doors or treasure chests.
    DoorTreasure,
    /// Any enemy, allies included.
    Enemy,
    /// Friendly: anything not attack-eligible.
    NotEnemy,
    /// Enemies only, allies excluded.
    EnemyOnly,
    /// Fortress flagpoles.
    Flagpole,
    /// A caster-chosen ground point.
    Ground,
    /// Siege holy artifacts.
    SiegeArtifact,
    /// Items lying in the world.
    Item,
    /// No target; the cast applies from the caster.
    None,
    /// NPC corpses.
    NpcBody,
    /// Anyone except the caster.
    Others,
    /// Player or pet corpses.
    PcBody,
    /// The caster, ignoring the candidate.
    SelfOnly,
    /// The caster's servitor (not a pet).
    Summon,
    /// Anything targetable.
    Any,
    /// Rideable mount creatures. Not implemented.
    Mount,
    /// Deprecated generic category; rewritten to `Any` at descriptor load.
    Legacy,
}

impl TargetType {
    /// Resolves the primary target for a cast of `skill` by `caster` on the
    /// user-chosen `candidate`.
    pub fn resolve<W>(
        &self,
        skill: &SkillDescriptor,
        caster: ObjectId,
        candidate: Option<ObjectId>,
        intent: CastIntent,
        world: &W,
    ) -> Result<ObjectId, TargetError>
    where
        W: WorldOracle + ?Sized,
    {
        let caster_state = world.actor(caster).ok_or(TargetError::NoTarget)?;
        match self {
            Self::SelfOnly | Self::None => Ok(caster),

            Self::Outpost => {
                let target = candidate_state(world, candidate, TargetError::IncorrectTarget)?;
                let is_outpost = target
                    .npc_profile()
                    .is_some_and(|p| p.template_id == GameConfig::OUTPOST_TEMPLATE_ID);
                if !is_outpost || target.is_dead() {
                    return Err(TargetError::IncorrectTarget);
                }
                Ok(target.id)
            }

            Self::Artillery => {
                let target = candidate_state(world, candidate, TargetError::IncorrectTarget)?;
                if !target.is_door()
                    || target.is_dead()
                    || !target.is_auto_attackable_by(caster_state)
                {
                    return Err(TargetError::IncorrectTarget);
                }
                Ok(target.id)
            }

            Self::DoorTreasure => {
                let target = candidate_state(world, candidate, TargetError::IncorrectTarget)?;
                if !target.is_door() && !matches!(target.kind, ActorKind::Chest) {
                    return Err(TargetError::IncorrectTarget);
                }
                Ok(target.id)
            }

            Self::Enemy => {
                let target = candidate_state(world, candidate, TargetError::NoTarget)?;
                if target.is_dead() || target.id == caster || !target.is_creature() {
                    return Err(TargetError::NoTarget);
                }
                if target.is_npc() {
                    return if target.is_auto_attackable_by(caster_state) {
                        Ok(target.id)
                    } else {
                        Err(TargetError::IncorrectTarget)
                    };
                }
                // Striking a non-flagged player needs the explicit hostile
                // confirmation.
                if caster_state.is_playable()
                    && !target.is_auto_attackable_by(caster_state)
                    && !intent.forced
                {
                    return Err(TargetError::IncorrectTarget);
                }
                Ok(target.id)
            }

            Self::NotEnemy => {
                let target = candidate_state(world, candidate, TargetError::IncorrectTarget)?;
                if !target.is_creature()
                    || target.is_dead()
                    || target.is_auto_attackable_by(caster_state)
                {
                    return Err(TargetError::IncorrectTarget);
                }
                Ok(target.id)
            }

            Self::EnemyOnly => resolve_enemy_only(caster_state, candidate, world),

            Self::Flagpole => {
                let target = candidate_state(world, candidate, TargetError::NoTarget)?;
                if !matches!(target.kind, ActorKind::StaticObject(StaticKind::Flagpole)) {
                    return Err(TargetError::NoTarget);
                }
                Ok(target.id)
            }

            Self::Ground => {
                if !caster_state.is_playable() {
                    return Err(TargetError::NoTarget);
                }
                let Some(point) = caster_state.ground_target else {
                    return Err(TargetError::CantSeeTarget);
                };
                if !world.can_see_position(caster, point) {
                    return Err(TargetError::CantSeeTarget);
                }
                if skill.harmful && caster_state.zones.contains(ZoneFlags::PEACE) {
                    return Err(TargetError::MaliciousSkillInPeaceZone);
                }
                Ok(caster)
            }

            Self::SiegeArtifact => {
                let target = candidate_state(world, candidate, TargetError::NoTarget)?;
                if !matches!(target.kind, ActorKind::SiegeArtifact) {
                    return Err(TargetError::NoTarget);
                }
                Ok(target.id)
            }

            Self::Item => {
                let target = candidate_state(world, candidate, TargetError::NoTarget)?;
                if !matches!(target.kind, ActorKind::WorldItem) {
                    return Err(TargetError::NoTarget);
                }
                // Item casts apply from the caster.
                Ok(caster)
            }

            Self::NpcBody => {
                let target = candidate_state(world, candidate, TargetError::IncorrectTarget)?;
                if !target.is_npc() || !target.is_dead() {
                    return Err(TargetError::IncorrectTarget);
                }
                // Decayed corpses no longer feed drain-family effects.
                if skill.effect_families.contains(EffectFamilies::DRAIN)
                    && target.npc_profile().is_some_and(|p| p.corpse_decayed)
                {
                    return Err(TargetError::NoTarget);
                }
                Ok(target.id)
            }

            Self::Others => {
                let target = candidate_state(world, candidate, TargetError::CannotUseOnYourself)?;
                if target.id == caster {
                    return Err(TargetError::CannotUseOnYourself);
                }
                Ok(target.id)
            }

            Self::PcBody => {
                let target = candidate_state(world, candidate, TargetError::IncorrectTarget)?;
                let is_pc_or_pet = target.is_player()
                    || matches!(target.kind, ActorKind::Summon { pet: true, .. });
                if !is_pc_or_pet || !target.is_dead() {
                    return Err(TargetError::IncorrectTarget);
                }
                Ok(target.id)
            }

            Self::Summon => {
                let servitor = world
                    .summon_of(caster)
                    .and_then(|id| world.actor(id))
                    .filter(|summon| matches!(summon.kind, ActorKind::Summon { pet: false, .. }))
                    .ok_or(TargetError::NoTarget)?;
                Ok(servitor.id)
            }

            Self::Any => {
                let target = candidate_state(world, candidate, TargetError::NoTarget)?;
                if caster_state.is_playable()
                    && target.is_auto_attackable_by(caster_state)
                    && !intent.forced
                {
                    return Err(TargetError::IncorrectTarget);
                }
                Ok(target.id)
            }

            // Not implemented; accepts the candidate as observed upstream.
            Self::Mount => candidate.ok_or(TargetError::NoTarget),

            // Only reachable when a loader skipped normalization.
            Self::Legacy => Self::Any.resolve(skill, caster, candidate, intent, world),
        }
    }

    /// Resolves the primary target and expands it into the full affected
    /// set. The entry point one-shot casts use.
    pub fn targets<W>(
        &self,
        skill: &SkillDescriptor,
        caster: ObjectId,
        candidate: Option<ObjectId>,
        intent: CastIntent,
        world: &W,
    ) -> Result<Vec<ObjectId>, TargetError>
    where
        W: WorldOracle + ?Sized,
    {
        let primary = self.resolve(skill, caster, candidate, intent, world)?;
        Ok(skill.affect_scope.expand(caster, primary, skill, world))
    }
}

fn candidate_state<'w, W>(
    world: &'w W,
    candidate: Option<ObjectId>,
    missing: TargetError,
) -> Result<&'w ActorState, TargetError>
where
    W: WorldOracle + ?Sized,
{
    candidate
        .and_then(|id| world.actor(id))
        .ok_or(missing)
}

/// The hostile-only precedence chain: every named relationship produces its
/// own rejection before the general PvP-eligibility gate. The ally and
/// command-channel exclusions are checked caster-to-candidate only, matching
/// the observed behavior.
fn resolve_enemy_only<W>(
    caster: &ActorState,
    candidate: Option<ObjectId>,
    world: &W,
) -> Result<ObjectId, TargetError>
where
    W: WorldOracle + ?Sized,
{
    let target = candidate_state(world, candidate, TargetError::IncorrectTarget)?;
    if !target.is_creature()
        || target.id == caster.id
        || target.is_dead()
        || !target.is_auto_attackable_by(caster)
    {
        return Err(TargetError::IncorrectTarget);
    }

    if target.is_npc() {
        return if target.is_auto_attackable_by(caster) {
            Ok(target.id)
        } else {
            Err(TargetError::IncorrectTarget)
        };
    }

    if !caster.is_playable() {
        return Err(TargetError::NoTarget);
    }

    // In olympiad, only the opposite side is a legal target.
    if caster.social.olympiad.is_some() {
        return if target.is_playable() && caster.is_olympiad_opponent_of(target) {
            Ok(target.id)
        } else {
            Err(TargetError::IncorrectTarget)
        };
    }

    // In a duel, only the opposing team.
    if caster.is_in_duel_with(target) {
        return if caster.is_duel_opponent_of(target) {
            Ok(target.id)
        } else {
            Err(TargetError::IncorrectTarget)
        };
    }

    if caster.is_in_party_with(target) {
        return Err(TargetError::IncorrectTarget);
    }

    if caster.zones.contains(ZoneFlags::PVP) {
        return Ok(target.id);
    }

    if caster.is_in_clan_with(target) {
        return Err(TargetError::IncorrectTarget);
    }

    if caster.is_in_ally_with(target) {
        return Err(TargetError::IncorrectTarget);
    }

    if caster.is_in_command_channel_with(target) {
        return Err(TargetError::IncorrectTarget);
    }

    if caster.is_on_same_siege_side_with(target) {
        return Err(TargetError::IncorrectTarget);
    }

    if caster.is_at_war_with(target) {
        return Ok(target.id);
    }

    if !caster.can_pvp(target) && target.is_playable() && target.social.karma == 0 {
        return Err(TargetError::IncorrectTarget);
    }

    Ok(target.id)
}
