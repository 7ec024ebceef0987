//! Actor model and the pairwise relationship queries targeting depends on.
//!
//! Actors are plain data keyed by [`ObjectId`]; every relational predicate the
//! target-type rules need (duel sides, olympiad sides, clan wars, siege
//! membership) is answered from the two actor states alone so resolution
//! never reaches for globals.

use super::common::{ObjectId, Position, ResourceMeter, ShotCharges, ZoneFlags};

/// Party membership handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyId(pub u32);

/// Clan membership handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClanId(pub u32);

/// Alliance membership handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllyId(pub u32);

/// Command-channel (multi-party union) membership handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandChannelId(pub u32);

/// Duel membership: which duel, and which of its two teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelSlot {
    pub duel_id: u32,
    pub team: DuelTeam,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuelTeam {
    A,
    B,
}

/// Olympiad match membership: which match, and which side of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OlympiadSlot {
    pub game_id: u32,
    pub side: u8,
}

/// Fixed sub-type of a static siege structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaticKind {
    Flagpole,
    Signpost,
}

/// Template-driven NPC attributes consulted by targeting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcProfile {
    pub template_id: u32,
    /// Inherently attack-eligible (monsters), as opposed to friendly NPCs.
    pub attackable: bool,
    pub undead: bool,
    /// Corpse already past the decay threshold for drain-family consumption.
    pub corpse_decayed: bool,
    /// NPC social clan used by the NPC branch of the pledge scope.
    pub npc_clan: Option<u32>,
}

/// What an actor fundamentally is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Player,
    /// A player-owned companion. Pets are excluded from summon-targeted casts.
    Summon { owner: ObjectId, pet: bool },
    Npc(NpcProfile),
    Door { attackable: bool },
    Chest,
    StaticObject(StaticKind),
    /// Siege holy artifact.
    SiegeArtifact,
    /// An item lying in the world.
    WorldItem,
}

/// Social links that drive the relational targeting rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SocialLinks {
    pub party: Option<PartyId>,
    pub clan: Option<ClanId>,
    pub ally: Option<AllyId>,
    pub command_channel: Option<CommandChannelId>,
    pub duel: Option<DuelSlot>,
    pub olympiad: Option<OlympiadSlot>,
    /// Siege side (attacker/defender registration), when in a siege.
    pub siege_side: Option<u32>,
    /// Outlaw points; a positive value marks the actor as open PvP.
    pub karma: u32,
    /// Clans this actor's clan has declared war on.
    pub war_clans: Vec<ClanId>,
}

/// Complete per-actor state tracked by the world registry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: ObjectId,
    pub kind: ActorKind,
    pub position: Position,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub invisible: bool,
    pub zones: ZoneFlags,
    /// Charged per-cast ammunition.
    pub shots: ShotCharges,
    /// Charges re-applied automatically after each consuming cast.
    pub auto_shots: ShotCharges,
    /// Caster-chosen world point for ground-targeted casts.
    pub ground_target: Option<Position>,
    pub social: SocialLinks,
}

impl ActorState {
    /// Creates a living actor with full meters at the given position.
    pub fn new(id: ObjectId, kind: ActorKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            hp: ResourceMeter::full(100),
            mp: ResourceMeter::full(100),
            invisible: false,
            zones: ZoneFlags::empty(),
            shots: ShotCharges::empty(),
            auto_shots: ShotCharges::empty(),
            ground_target: None,
            social: SocialLinks::default(),
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, ActorKind::Player)
    }

    pub fn is_summon(&self) -> bool {
        matches!(self.kind, ActorKind::Summon { .. })
    }

    /// Player or player-controlled companion.
    pub fn is_playable(&self) -> bool {
        matches!(self.kind, ActorKind::Player | ActorKind::Summon { .. })
    }

    pub fn is_npc(&self) -> bool {
        matches!(self.kind, ActorKind::Npc(_))
    }

    pub fn is_door(&self) -> bool {
        matches!(self.kind, ActorKind::Door { .. })
    }

    /// Living creatures and destructible structures participate in combat;
    /// items on the ground and pure scenery do not.
    pub fn is_creature(&self) -> bool {
        !matches!(
            self.kind,
            ActorKind::StaticObject(_) | ActorKind::SiegeArtifact | ActorKind::WorldItem
        )
    }

    pub fn is_dead(&self) -> bool {
        self.hp.is_empty()
    }

    pub fn npc_profile(&self) -> Option<&NpcProfile> {
        match &self.kind {
            ActorKind::Npc(profile) => Some(profile),
            _ => None,
        }
    }

    /// Whether `attacker` may strike this actor without an explicit hostile
    /// confirmation: monsters, flagged outlaws, duel/olympiad opponents,
    /// clan-war enemies, and anyone inside an open-PvP zone.
    pub fn is_auto_attackable_by(&self, attacker: &ActorState) -> bool {
        match &self.kind {
            ActorKind::Npc(profile) => profile.attackable,
            ActorKind::Door { attackable } => *attackable,
            ActorKind::Chest => false,
            ActorKind::StaticObject(_) | ActorKind::SiegeArtifact | ActorKind::WorldItem => false,
            ActorKind::Player | ActorKind::Summon { .. } => {
                self.social.karma > 0
                    || self.zones.contains(ZoneFlags::PVP)
                    || attacker.zones.contains(ZoneFlags::PVP)
                    || self.is_duel_opponent_of(attacker)
                    || self.is_olympiad_opponent_of(attacker)
                    || attacker.is_at_war_with(self)
            }
        }
    }

    pub fn is_in_party_with(&self, other: &ActorState) -> bool {
        matches!((self.social.party, other.social.party), (Some(a), Some(b)) if a == b)
    }

    pub fn is_in_clan_with(&self, other: &ActorState) -> bool {
        matches!((self.social.clan, other.social.clan), (Some(a), Some(b)) if a == b)
    }

    pub fn is_in_ally_with(&self, other: &ActorState) -> bool {
        matches!((self.social.ally, other.social.ally), (Some(a), Some(b)) if a == b)
    }

    pub fn is_in_command_channel_with(&self, other: &ActorState) -> bool {
        matches!(
            (self.social.command_channel, other.social.command_channel),
            (Some(a), Some(b)) if a == b
        )
    }

    /// Both actors participate in the same duel, regardless of team.
    pub fn is_in_duel_with(&self, other: &ActorState) -> bool {
        matches!(
            (self.social.duel, other.social.duel),
            (Some(a), Some(b)) if a.duel_id == b.duel_id
        )
    }

    /// Opposing teams of the same duel.
    pub fn is_duel_opponent_of(&self, other: &ActorState) -> bool {
        matches!(
            (self.social.duel, other.social.duel),
            (Some(a), Some(b)) if a.duel_id == b.duel_id && a.team != b.team
        )
    }

    /// Opposing sides of the same olympiad match.
    pub fn is_olympiad_opponent_of(&self, other: &ActorState) -> bool {
        matches!(
            (self.social.olympiad, other.social.olympiad),
            (Some(a), Some(b)) if a.game_id == b.game_id && a.side != b.side
        )
    }

    pub fn is_on_same_siege_side_with(&self, other: &ActorState) -> bool {
        matches!(
            (self.social.siege_side, other.social.siege_side),
            (Some(a), Some(b)) if a == b
        )
    }

    pub fn is_at_war_with(&self, other: &ActorState) -> bool {
        match other.social.clan {
            Some(their_clan) => {
                self.social.clan.is_some() && self.social.war_clans.contains(&their_clan)
            }
            None => false,
        }
    }

    /// General PvP eligibility gate used after every named exclusion has
    /// fallen through: open-PvP state on either side, or a declared war.
    pub fn can_pvp(&self, target: &ActorState) -> bool {
        target.social.karma > 0
            || self.zones.contains(ZoneFlags::PVP)
            || target.zones.contains(ZoneFlags::PVP)
            || self.is_at_war_with(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u32) -> ActorState {
        ActorState::new(ObjectId(id), ActorKind::Player, Position::ORIGIN)
    }

    #[test]
    fn monsters_are_always_auto_attackable() {
        let caster = player(1);
        let monster = ActorState::new(
            ObjectId(2),
            ActorKind::Npc(NpcProfile {
                template_id: 20001,
                attackable: true,
                ..NpcProfile::default()
            }),
            Position::ORIGIN,
        );
        assert!(monster.is_auto_attackable_by(&caster));
    }

    #[test]
    fn duel_opponents_require_opposite_teams() {
        let mut a = player(1);
        let mut b = player(2);
        a.social.duel = Some(DuelSlot {
            duel_id: 7,
            team: DuelTeam::A,
        });
        b.social.duel = Some(DuelSlot {
            duel_id: 7,
            team: DuelTeam::A,
        });
        assert!(a.is_in_duel_with(&b));
        assert!(!a.is_duel_opponent_of(&b));

        b.social.duel = Some(DuelSlot {
            duel_id: 7,
            team: DuelTeam::B,
        });
        assert!(a.is_duel_opponent_of(&b));
        assert!(b.is_auto_attackable_by(&a));
    }

    #[test]
    fn war_check_needs_both_clans() {
        let mut a = player(1);
        let mut b = player(2);
        a.social.clan = Some(ClanId(10));
        a.social.war_clans.push(ClanId(20));
        assert!(!a.is_at_war_with(&b));
        b.social.clan = Some(ClanId(20));
        assert!(a.is_at_war_with(&b));
    }
}
