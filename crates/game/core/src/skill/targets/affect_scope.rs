//! Affect-scope expansion: from one resolved primary target to the full
//! affected set.
//!
//! Every variant follows the same pipeline: pick an origin (caster for
//! point-blank/fan, primary target for ranged variants), query the world,
//! apply the variant's relational predicate, gate each survivor through the
//! skill's affect filter, and truncate to the affect limit. Enumeration order
//! is preserved through truncation except for the hp-sorted variant.
//!
//! Variants that are not meaningful here expand to an empty set; callers
//! treat "not implemented" and "legitimately no targets" identically.

use strum::{Display, EnumIter};

use crate::env::WorldOracle;
use crate::skill::SkillDescriptor;
use crate::state::{ActorState, ObjectId, ZoneFlags};

/// How a resolved primary target expands into the affected set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AffectScope {
    /// The primary target alone, if the affect filter accepts it.
    Single,
    /// Area around the caster.
    PointBlank,
    /// Area around the primary target.
    Range,
    /// As `Range`, ordered by ascending health fraction.
    RangeSortByHp,
    /// Angular sector in front of the caster.
    Fan,
    /// The primary target's party, companions included.
    Party,
    /// The primary target's clan roster.
    Pledge,
    /// Union of `Party` and `Pledge`.
    PartyPledge,
    /// Dead clan mates around the primary target.
    DeadPledge,
    /// Dead command-channel mates around the primary target.
    DeadUnion,
    /// Affects nothing.
    None,
    /// Boss-specific scope. Not implemented.
    Boss,
    /// Ring-shaped area. Not implemented.
    RingRange,
    /// Square area around the primary target. Not implemented.
    Square,
    /// Square area around the caster. Not implemented.
    SquarePointBlank,
    /// Static-object scope. Not implemented.
    StaticObject,
    /// Mount scope. Not implemented.
    Mount,
}

impl AffectScope {
    /// Expands `primary` into the ordered affected set for a cast by
    /// `caster`. Missing actors shrink the result; this never fails.
    pub fn expand<W>(
        &self,
        caster: ObjectId,
        primary: ObjectId,
        skill: &SkillDescriptor,
        world: &W,
    ) -> Vec<ObjectId>
    where
        W: WorldOracle + ?Sized,
    {
        match self {
            Self::Single => expand_single(caster, primary, skill, world),
            Self::PointBlank => expand_point_blank(caster, skill, world),
            Self::Range => expand_range(caster, primary, skill, world),
            Self::RangeSortByHp => expand_range_sort_by_hp(caster, primary, skill, world),
            Self::Fan => expand_fan(caster, primary, skill, world),
            Self::Party => expand_party(primary, skill, world),
            Self::Pledge => expand_pledge(primary, skill, world),
            Self::PartyPledge => {
                let mut targets = expand_party(primary, skill, world);
                for id in expand_pledge(primary, skill, world) {
                    if !targets.contains(&id) {
                        targets.push(id);
                    }
                }
                targets
            }
            Self::DeadPledge => expand_dead_pledge(primary, skill, world),
            Self::DeadUnion => expand_dead_union(primary, skill, world),
            Self::None
            | Self::Boss
            | Self::RingRange
            | Self::Square
            | Self::SquarePointBlank
            | Self::StaticObject
            | Self::Mount => Vec::new(),
        }
    }
}

/// 0 means unlimited.
fn limit_of(skill: &SkillDescriptor) -> usize {
    if skill.affect_limit == 0 {
        usize::MAX
    } else {
        skill.affect_limit as usize
    }
}

/// Smallest signed angular difference `a - b`, in `(-180, 180]` degrees.
fn angle_diff(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    if diff > 180.0 { diff - 360.0 } else { diff }
}

fn expand_single<W>(
    caster: ObjectId,
    primary: ObjectId,
    skill: &SkillDescriptor,
    world: &W,
) -> Vec<ObjectId>
where
    W: WorldOracle + ?Sized,
{
    let (Some(caster_state), Some(primary_state)) = (world.actor(caster), world.actor(primary))
    else {
        return Vec::new();
    };
    if !skill.affect_object.eligible(caster_state, primary_state) {
        return Vec::new();
    }
    vec![primary]
}

fn expand_point_blank<W>(caster: ObjectId, skill: &SkillDescriptor, world: &W) -> Vec<ObjectId>
where
    W: WorldOracle + ?Sized,
{
    let Some(caster_state) = world.actor(caster) else {
        return Vec::new();
    };
    let limit = limit_of(skill);
    let mut targets = Vec::new();
    for id in world.nearby(caster, skill.affect_range) {
        if targets.len() >= limit {
            break;
        }
        let Some(candidate) = world.actor(id) else {
            continue;
        };
        if !skill.affect_object.eligible(caster_state, candidate) {
            continue;
        }
        targets.push(id);
    }
    targets
}

fn expand_range<W>(
    caster: ObjectId,
    primary: ObjectId,
    skill: &SkillDescriptor,
    world: &W,
) -> Vec<ObjectId>
where
    W: WorldOracle + ?Sized,
{
    let Some(caster_state) = world.actor(caster) else {
        return Vec::new();
    };
    let limit = limit_of(skill);
    let mut targets = Vec::new();
    for id in world.nearby_between(caster, primary, skill.affect_range) {
        if targets.len() >= limit {
            break;
        }
        let Some(candidate) = world.actor(id) else {
            continue;
        };
        if !candidate.is_creature() || candidate.is_dead() {
            continue;
        }
        if !skill.affect_object.eligible(caster_state, candidate) {
            continue;
        }
        targets.push(id);
    }
    targets
}

fn expand_range_sort_by_hp<W>(
    caster: ObjectId,
    primary: ObjectId,
    skill: &SkillDescriptor,
    world: &W,
) -> Vec<ObjectId>
where
    W: WorldOracle + ?Sized,
{
    let Some(caster_state) = world.actor(caster) else {
        return Vec::new();
    };
    let mut candidates: Vec<(ObjectId, f64)> = world
        .nearby_between(caster, primary, skill.affect_range)
        .into_iter()
        .filter_map(|id| world.actor(id).map(|state| (id, state)))
        .filter(|(_, state)| state.is_creature() && !state.is_dead())
        .filter(|(_, state)| skill.affect_object.eligible(caster_state, state))
        .map(|(id, state)| (id, state.hp.fraction()))
        .collect();

    // Stable sort keeps enumeration order for equal fractions.
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
    candidates.truncate(limit_of(skill));
    candidates.into_iter().map(|(id, _)| id).collect()
}

fn expand_fan<W>(
    caster: ObjectId,
    primary: ObjectId,
    skill: &SkillDescriptor,
    world: &W,
) -> Vec<ObjectId>
where
    W: WorldOracle + ?Sized,
{
    let (Some(caster_state), Some(primary_state)) = (world.actor(caster), world.actor(primary))
    else {
        return Vec::new();
    };
    let heading = caster_state
        .position
        .heading_deg_to(primary_state.position);
    let sector_center = heading + skill.fan.start_angle;
    let limit = limit_of(skill);
    let mut targets = Vec::new();
    for id in world.nearby(caster, skill.fan.radius) {
        if targets.len() >= limit {
            break;
        }
        let Some(candidate) = world.actor(id) else {
            continue;
        };
        if !candidate.is_creature() || candidate.is_dead() {
            continue;
        }
        let candidate_angle = caster_state.position.heading_deg_to(candidate.position);
        if angle_diff(candidate_angle, sector_center).abs() > skill.fan.angle / 2.0 {
            continue;
        }
        if !skill.affect_object.eligible(caster_state, candidate) {
            continue;
        }
        if !world.can_see(caster, id) {
            continue;
        }
        targets.push(id);
    }
    targets
}

/// Maps a companion to its owning player for the solo-party fallback.
fn acting_player<'w, W>(state: &'w ActorState, world: &'w W) -> Option<&'w ActorState>
where
    W: WorldOracle + ?Sized,
{
    match state.kind {
        crate::state::ActorKind::Summon { owner, .. } => world.actor(owner),
        _ if state.is_player() => Some(state),
        _ => None,
    }
}

fn expand_party<W>(primary: ObjectId, skill: &SkillDescriptor, world: &W) -> Vec<ObjectId>
where
    W: WorldOracle + ?Sized,
{
    let Some(primary_state) = world.actor(primary) else {
        return Vec::new();
    };
    if !primary_state.is_creature() {
        return Vec::new();
    }
    let limit = limit_of(skill);
    let mut targets = Vec::new();
    let mut push_member = |member: &ActorState, targets: &mut Vec<ObjectId>| {
        if targets.len() >= limit {
            return;
        }
        if !primary_state
            .position
            .is_within_range(member.position, skill.affect_range)
        {
            return;
        }
        if !skill.affect_object.eligible(primary_state, member) {
            return;
        }
        targets.push(member.id);
    };

    if let Some(party) = primary_state.social.party {
        for member_id in world.party_members(party) {
            if targets.len() >= limit {
                break;
            }
            let Some(member) = world.actor(member_id) else {
                continue;
            };
            push_member(member, &mut targets);
            if let Some(summon) = world.summon_of(member_id).and_then(|id| world.actor(id)) {
                push_member(summon, &mut targets);
            }
        }
    } else if let Some(player) = acting_player(primary_state, world) {
        push_member(player, &mut targets);
        if let Some(summon) = world.summon_of(player.id).and_then(|id| world.actor(id)) {
            push_member(summon, &mut targets);
        }
    }
    targets
}

/// Duel cross-check shared by the pledge-flavored scopes: when the anchor is
/// dueling, only roster mates in the same duel (and, when both sides are
/// partied, the same party) are affected.
fn duel_allows(anchor: &ActorState, member: &ActorState) -> bool {
    let Some(anchor_duel) = anchor.social.duel else {
        return true;
    };
    match member.social.duel {
        Some(member_duel) if member_duel.duel_id == anchor_duel.duel_id => {
            match (anchor.social.party, member.social.party) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
        }
        _ => false,
    }
}

/// Olympiad cross-check: same match, same side.
fn olympiad_allows(anchor: &ActorState, member: &ActorState) -> bool {
    let Some(anchor_slot) = anchor.social.olympiad else {
        return true;
    };
    matches!(
        member.social.olympiad,
        Some(slot) if slot.game_id == anchor_slot.game_id && slot.side == anchor_slot.side
    )
}

fn expand_pledge<W>(primary: ObjectId, skill: &SkillDescriptor, world: &W) -> Vec<ObjectId>
where
    W: WorldOracle + ?Sized,
{
    let Some(primary_state) = world.actor(primary) else {
        return Vec::new();
    };
    let limit = limit_of(skill);
    let mut targets = Vec::new();

    if primary_state.is_player() {
        let mut push_candidate = |candidate: &ActorState, targets: &mut Vec<ObjectId>| {
            if targets.len() >= limit {
                return;
            }
            if !primary_state
                .position
                .is_within_range(candidate.position, skill.affect_range)
            {
                return;
            }
            if !skill.affect_object.eligible(primary_state, candidate) {
                return;
            }
            targets.push(candidate.id);
        };

        let Some(clan) = primary_state.social.clan else {
            // Clanless fallback: the player and their companion.
            push_candidate(primary_state, &mut targets);
            if let Some(summon) = world.summon_of(primary).and_then(|id| world.actor(id)) {
                push_candidate(summon, &mut targets);
            }
            return targets;
        };

        for member_id in world.clan_members(clan) {
            if targets.len() >= limit {
                break;
            }
            let Some(member) = world.actor(member_id) else {
                continue;
            };
            if !duel_allows(primary_state, member) {
                continue;
            }
            if !olympiad_allows(primary_state, member) {
                continue;
            }
            push_candidate(member, &mut targets);
            if let Some(summon) = world.summon_of(member_id).and_then(|id| world.actor(id)) {
                push_candidate(summon, &mut targets);
            }
        }
    } else if let Some(profile) = primary_state.npc_profile() {
        targets.push(primary);
        let Some(npc_clan) = profile.npc_clan else {
            return targets;
        };
        for id in world.nearby(primary, skill.affect_range) {
            if targets.len() >= limit {
                break;
            }
            let Some(candidate) = world.actor(id) else {
                continue;
            };
            if candidate
                .npc_profile()
                .is_some_and(|p| p.npc_clan == Some(npc_clan))
            {
                targets.push(id);
            }
        }
    }
    targets
}

fn expand_dead_pledge<W>(primary: ObjectId, skill: &SkillDescriptor, world: &W) -> Vec<ObjectId>
where
    W: WorldOracle + ?Sized,
{
    let Some(primary_state) = world.actor(primary) else {
        return Vec::new();
    };
    if !primary_state.is_playable() {
        return Vec::new();
    }
    let Some(anchor) = acting_player(primary_state, world) else {
        return Vec::new();
    };
    let Some(clan) = anchor.social.clan else {
        return Vec::new();
    };

    let limit = limit_of(skill);
    let mut targets = Vec::new();
    for id in world.nearby(primary, skill.affect_range) {
        if targets.len() >= limit {
            break;
        }
        let Some(candidate) = world.actor(id) else {
            continue;
        };
        if !candidate.is_playable() || candidate.social.clan != Some(clan) {
            continue;
        }
        if !duel_allows(anchor, candidate) {
            continue;
        }
        if !olympiad_allows(anchor, candidate) {
            continue;
        }
        // Siege bystanders: inside the battlefield without a side.
        if candidate.zones.contains(ZoneFlags::SIEGE) && candidate.social.siege_side.is_none() {
            continue;
        }
        if !candidate.is_dead() {
            continue;
        }
        if !skill.affect_object.eligible(anchor, candidate) {
            continue;
        }
        targets.push(id);
    }
    targets
}

fn expand_dead_union<W>(primary: ObjectId, skill: &SkillDescriptor, world: &W) -> Vec<ObjectId>
where
    W: WorldOracle + ?Sized,
{
    let Some(primary_state) = world.actor(primary) else {
        return Vec::new();
    };
    if !primary_state.is_playable() {
        return Vec::new();
    }
    let limit = limit_of(skill);
    let mut targets = Vec::new();
    for id in world.nearby(primary, skill.affect_range) {
        if targets.len() >= limit {
            break;
        }
        let Some(candidate) = world.actor(id) else {
            continue;
        };
        if !candidate.is_creature() {
            continue;
        }
        if !primary_state.is_in_command_channel_with(candidate) {
            continue;
        }
        if !candidate.is_dead() {
            continue;
        }
        if !skill.affect_object.eligible(primary_state, candidate) {
            continue;
        }
        targets.push(id);
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::{AffectObject, FanArc, TargetType};
    use crate::state::{
        ActorKind, ClanId, CommandChannelId, NpcProfile, PartyId, Position, ResourceMeter, SkillId,
        World,
    };

    fn skill(scope: AffectScope, object: AffectObject) -> SkillDescriptor {
        SkillDescriptor::new(SkillId(1), 1, TargetType::Enemy, scope, object)
            .with_affect_range(1000)
    }

    fn player_at(id: u32, x: i32) -> ActorState {
        ActorState::new(ObjectId(id), ActorKind::Player, Position::new(x, 0, 0))
    }

    fn monster_at(id: u32, x: i32, y: i32) -> ActorState {
        ActorState::new(
            ObjectId(id),
            ActorKind::Npc(NpcProfile {
                template_id: 20001,
                attackable: true,
                ..NpcProfile::default()
            }),
            Position::new(x, y, 0),
        )
    }

    #[test]
    fn single_returns_primary_or_nothing() {
        let mut world = World::new();
        world.insert(player_at(1, 0));
        world.insert(player_at(2, 10));

        let accept = skill(AffectScope::Single, AffectObject::Friend);
        assert_eq!(
            AffectScope::Single.expand(ObjectId(1), ObjectId(2), &accept, &world),
            vec![ObjectId(2)]
        );

        let reject = skill(AffectScope::Single, AffectObject::NotFriend);
        assert_eq!(
            AffectScope::Single.expand(ObjectId(1), ObjectId(2), &reject, &world),
            Vec::new()
        );
    }

    #[test]
    fn range_filters_dead_and_truncates_in_enumeration_order() {
        let mut world = World::new();
        world.insert(player_at(1, 0));
        world.insert(monster_at(2, 10, 0));
        let mut dead = monster_at(3, 20, 0);
        dead.hp = ResourceMeter::new(0, 100);
        world.insert(dead);
        world.insert(monster_at(4, 30, 0));
        world.insert(monster_at(5, 40, 0));

        let sk = skill(AffectScope::Range, AffectObject::NotFriend).with_affect_limit(2);
        let targets = AffectScope::Range.expand(ObjectId(1), ObjectId(2), &sk, &world);
        assert_eq!(targets, vec![ObjectId(2), ObjectId(4)]);
    }

    #[test]
    fn range_sort_by_hp_orders_ascending_with_stable_ties() {
        let mut world = World::new();
        world.insert(player_at(1, 0));
        let mut wounded = monster_at(2, 10, 0);
        wounded.hp = ResourceMeter::new(50, 100);
        let mut critical = monster_at(3, 20, 0);
        critical.hp = ResourceMeter::new(10, 100);
        let healthy_a = monster_at(4, 30, 0);
        let healthy_b = monster_at(5, 40, 0);
        world.insert(wounded);
        world.insert(critical);
        world.insert(healthy_a);
        world.insert(healthy_b);

        let sk = skill(AffectScope::RangeSortByHp, AffectObject::NotFriend);
        let targets = AffectScope::RangeSortByHp.expand(ObjectId(1), ObjectId(2), &sk, &world);
        assert_eq!(
            targets,
            vec![ObjectId(3), ObjectId(2), ObjectId(4), ObjectId(5)]
        );

        let limited = skill(AffectScope::RangeSortByHp, AffectObject::NotFriend)
            .with_affect_limit(2);
        let targets =
            AffectScope::RangeSortByHp.expand(ObjectId(1), ObjectId(2), &limited, &world);
        assert_eq!(targets, vec![ObjectId(3), ObjectId(2)]);
    }

    #[test]
    fn fan_keeps_candidates_inside_the_sector_with_line_of_sight() {
        let mut world = World::new();
        world.insert(player_at(1, 0));
        // Primary straight ahead on +x.
        world.insert(monster_at(2, 100, 0));
        // Slightly off axis, inside a 60 degree fan.
        world.insert(monster_at(3, 100, 40));
        // Perpendicular, outside the fan.
        world.insert(monster_at(4, 0, 100));
        // Inside the fan but occluded.
        world.insert(monster_at(5, 120, -30));
        world.block_sight(ObjectId(1), ObjectId(5));

        let sk = skill(AffectScope::Fan, AffectObject::NotFriend).with_fan(FanArc {
            start_angle: 0.0,
            radius: 200,
            angle: 60.0,
        });
        let targets = AffectScope::Fan.expand(ObjectId(1), ObjectId(2), &sk, &world);
        assert_eq!(targets, vec![ObjectId(2), ObjectId(3)]);
    }

    #[test]
    fn party_includes_members_and_in_range_companions() {
        let mut world = World::new();
        let mut caster = player_at(1, 0);
        caster.social.party = Some(PartyId(7));
        let mut mate = player_at(2, 100);
        mate.social.party = Some(PartyId(7));
        let mut far_mate = player_at(3, 5000);
        far_mate.social.party = Some(PartyId(7));
        world.insert(caster);
        world.insert(mate);
        world.insert(far_mate);
        world.insert(ActorState::new(
            ObjectId(4),
            ActorKind::Summon {
                owner: ObjectId(2),
                pet: false,
            },
            Position::new(120, 0, 0),
        ));

        let sk = skill(AffectScope::Party, AffectObject::All);
        let targets = AffectScope::Party.expand(ObjectId(1), ObjectId(1), &sk, &world);
        assert_eq!(targets, vec![ObjectId(1), ObjectId(2), ObjectId(4)]);
    }

    #[test]
    fn party_solo_falls_back_to_player_and_companion() {
        let mut world = World::new();
        world.insert(player_at(1, 0));
        world.insert(ActorState::new(
            ObjectId(2),
            ActorKind::Summon {
                owner: ObjectId(1),
                pet: true,
            },
            Position::new(50, 0, 0),
        ));

        let sk = skill(AffectScope::Party, AffectObject::All);
        let targets = AffectScope::Party.expand(ObjectId(1), ObjectId(1), &sk, &world);
        assert_eq!(targets, vec![ObjectId(1), ObjectId(2)]);
    }

    #[test]
    fn pledge_walks_the_clan_roster_with_duel_exclusions() {
        let mut world = World::new();
        let mut caster = player_at(1, 0);
        caster.social.clan = Some(ClanId(3));
        let mut mate = player_at(2, 100);
        mate.social.clan = Some(ClanId(3));
        let mut other_clan = player_at(3, 100);
        other_clan.social.clan = Some(ClanId(4));
        world.insert(caster);
        world.insert(mate);
        world.insert(other_clan);

        let sk = skill(AffectScope::Pledge, AffectObject::All);
        let targets = AffectScope::Pledge.expand(ObjectId(1), ObjectId(1), &sk, &world);
        assert_eq!(targets, vec![ObjectId(1), ObjectId(2)]);

        // A dueling anchor only reaches roster mates in the same duel.
        let mut dueling = world.actor(ObjectId(1)).unwrap().clone();
        dueling.social.duel = Some(crate::state::DuelSlot {
            duel_id: 1,
            team: crate::state::DuelTeam::A,
        });
        world.insert(dueling);
        let targets = AffectScope::Pledge.expand(ObjectId(1), ObjectId(1), &sk, &world);
        assert_eq!(targets, vec![ObjectId(1)]);
    }

    #[test]
    fn party_pledge_unions_without_duplicates() {
        let mut world = World::new();
        let mut caster = player_at(1, 0);
        caster.social.party = Some(PartyId(7));
        caster.social.clan = Some(ClanId(3));
        let mut both = player_at(2, 100);
        both.social.party = Some(PartyId(7));
        both.social.clan = Some(ClanId(3));
        let mut clan_only = player_at(3, 200);
        clan_only.social.clan = Some(ClanId(3));
        world.insert(caster);
        world.insert(both);
        world.insert(clan_only);

        let sk = skill(AffectScope::PartyPledge, AffectObject::All);
        let targets = AffectScope::PartyPledge.expand(ObjectId(1), ObjectId(1), &sk, &world);
        assert_eq!(targets, vec![ObjectId(1), ObjectId(2), ObjectId(3)]);
    }

    #[test]
    fn dead_union_collects_dead_channel_mates_only() {
        let mut world = World::new();
        let mut anchor = player_at(1, 0);
        anchor.social.command_channel = Some(CommandChannelId(5));
        let mut dead_mate = player_at(2, 100);
        dead_mate.social.command_channel = Some(CommandChannelId(5));
        dead_mate.hp = ResourceMeter::new(0, 100);
        let mut living_mate = player_at(3, 100);
        living_mate.social.command_channel = Some(CommandChannelId(5));
        let mut dead_stranger = player_at(4, 100);
        dead_stranger.hp = ResourceMeter::new(0, 100);
        world.insert(anchor);
        world.insert(dead_mate);
        world.insert(living_mate);
        world.insert(dead_stranger);

        let sk = skill(AffectScope::DeadUnion, AffectObject::All);
        let targets = AffectScope::DeadUnion.expand(ObjectId(9), ObjectId(1), &sk, &world);
        assert_eq!(targets, vec![ObjectId(2)]);
    }

    #[test]
    fn dead_pledge_requires_clan_dead_state_and_siege_side() {
        let mut world = World::new();
        let mut anchor = player_at(1, 0);
        anchor.social.clan = Some(ClanId(3));
        let mut dead_mate = player_at(2, 100);
        dead_mate.social.clan = Some(ClanId(3));
        dead_mate.hp = ResourceMeter::new(0, 100);
        let mut bystander = player_at(3, 100);
        bystander.social.clan = Some(ClanId(3));
        bystander.hp = ResourceMeter::new(0, 100);
        bystander.zones = ZoneFlags::SIEGE;
        world.insert(anchor);
        world.insert(dead_mate);
        world.insert(bystander);

        let sk = skill(AffectScope::DeadPledge, AffectObject::All);
        let targets = AffectScope::DeadPledge.expand(ObjectId(9), ObjectId(1), &sk, &world);
        assert_eq!(targets, vec![ObjectId(2)]);
    }

    #[test]
    fn unimplemented_scopes_expand_to_nothing() {
        let mut world = World::new();
        world.insert(player_at(1, 0));
        world.insert(monster_at(2, 10, 0));

        for scope in [
            AffectScope::None,
            AffectScope::Boss,
            AffectScope::RingRange,
            AffectScope::Square,
            AffectScope::SquarePointBlank,
            AffectScope::StaticObject,
            AffectScope::Mount,
        ] {
            let sk = skill(scope, AffectObject::All);
            assert!(scope.expand(ObjectId(1), ObjectId(2), &sk, &world).is_empty());
        }
    }
}
