//! Per-caster channeling session.
//!
//! A [`Channelizer`] is Idle or Active. Starting resolves the primary target
//! through the core targeting rules, registers single-scope targets
//! immediately, and schedules the periodic tick. Each tick gates on mana,
//! rebuilds the affected set, and feeds the stacked effect level into the
//! effect sink. Stopping and tick-side aborts share one teardown path; the
//! session mutex plus the task liveness flag make the pair idempotent
//! against an in-flight tick.
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use tracing::{debug, error, warn};

use game_core::{
    AffectScope, CastIntent, ChannelingSpec, ObjectId, ShotCharges, SkillDescriptor,
    SystemMessage, World, WorldOracle,
};

use crate::api::{Result, RuntimeError};
use crate::channel::ChannelRegistry;
use crate::oracle::{EffectSink, Notifier, SkillOracle};
use crate::scheduler::{Scheduler, TaskControl, TaskHandle};

/// Shared mutable world state. Writes happen only inside a tick or through
/// the embedding game loop.
pub type SharedWorld = Arc<RwLock<World>>;

struct ActiveChannel {
    skill: SkillDescriptor,
    spec: ChannelingSpec,
    primary: ObjectId,
    /// Single-scope channels stay locked on the resolved primary; area
    /// scopes re-expand every tick.
    locked: bool,
    /// Every target registered so far, in first-seen order. Teardown walks
    /// this list.
    affected: Vec<ObjectId>,
    handle: Option<TaskHandle>,
}

struct ChannelizerInner {
    caster: ObjectId,
    world: SharedWorld,
    skills: Arc<dyn SkillOracle>,
    effects: Arc<dyn EffectSink>,
    notifier: Arc<dyn Notifier>,
    registry: Arc<ChannelRegistry>,
    active: Mutex<Option<ActiveChannel>>,
}

/// Clonable handle to one caster's channeling state.
#[derive(Clone)]
pub struct Channelizer {
    inner: Arc<ChannelizerInner>,
}

impl Channelizer {
    pub fn new(
        caster: ObjectId,
        world: SharedWorld,
        skills: Arc<dyn SkillOracle>,
        effects: Arc<dyn EffectSink>,
        notifier: Arc<dyn Notifier>,
        registry: Arc<ChannelRegistry>,
    ) -> Self {
        Self {
            inner: Arc::new(ChannelizerInner {
                caster,
                world,
                skills,
                effects,
                notifier,
                registry,
                active: Mutex::new(None),
            }),
        }
    }

    pub fn caster(&self) -> ObjectId {
        self.inner.caster
    }

    pub fn is_channeling(&self) -> bool {
        lock_active(&self.inner).is_some()
    }

    /// Starts channeling `skill` at `candidate`.
    ///
    /// Resolution failures notify the caster and bubble the cause. Starting
    /// while already Active logs a warning and leaves the running session
    /// untouched.
    pub fn start_channeling(
        &self,
        skill: SkillDescriptor,
        candidate: Option<ObjectId>,
        intent: CastIntent,
    ) -> Result<()> {
        let Some(spec) = skill.channeling.clone() else {
            return Err(RuntimeError::NotChannelable(skill.id));
        };

        let mut guard = lock_active(&self.inner);
        if guard.is_some() {
            warn!(caster = %self.inner.caster, skill = %skill.id, "already channeling");
            return Ok(());
        }

        let primary = {
            let world = read_world(&self.inner.world);
            skill
                .target_type
                .resolve(&skill, self.inner.caster, candidate, intent, &*world)
        };
        let primary = match primary {
            Ok(primary) => primary,
            Err(cause) => {
                if let Some(message) = cause.message() {
                    self.inner.notifier.system_message(self.inner.caster, message);
                }
                return Err(cause.into());
            }
        };

        let locked = skill.affect_scope == AffectScope::Single;
        let mut affected = Vec::new();
        if locked {
            self.inner
                .registry
                .add_channelizer(primary, spec.effect_id, self.inner.caster);
            affected.push(primary);
        }

        debug!(
            caster = %self.inner.caster,
            skill = %skill.id,
            %primary,
            "channeling started"
        );

        let initial_delay = spec.initial_delay;
        let interval = spec.interval;
        *guard = Some(ActiveChannel {
            skill,
            spec,
            primary,
            locked,
            affected,
            handle: None,
        });

        let inner = Arc::clone(&self.inner);
        let handle =
            Scheduler::schedule_at_fixed_rate(initial_delay, interval, move || tick(&inner));
        if let Some(active) = guard.as_mut() {
            active.handle = Some(handle);
        }
        Ok(())
    }

    /// Cancels the periodic task and unwinds this caster's contribution to
    /// every target it touched. Stopping while Idle logs a warning.
    pub fn stop_channeling(&self) {
        let mut guard = lock_active(&self.inner);
        let Some(active) = guard.take() else {
            warn!(caster = %self.inner.caster, "not channeling");
            return;
        };
        debug!(caster = %self.inner.caster, skill = %active.skill.id, "channeling stopped");
        teardown(&self.inner, active);
    }
}

fn lock_active(inner: &ChannelizerInner) -> MutexGuard<'_, Option<ActiveChannel>> {
    inner.active.lock().unwrap_or_else(|e| e.into_inner())
}

fn read_world(world: &SharedWorld) -> std::sync::RwLockReadGuard<'_, World> {
    world.read().unwrap_or_else(|e| e.into_inner())
}

fn write_world(world: &SharedWorld) -> std::sync::RwLockWriteGuard<'_, World> {
    world.write().unwrap_or_else(|e| e.into_inner())
}

/// One periodic tick. Runs with the session mutex held, so an external stop
/// observes either the full tick or none of it.
fn tick(inner: &Arc<ChannelizerInner>) -> TaskControl {
    let mut guard = lock_active(inner);
    if guard.is_none() {
        // Stopped between scheduling and this tick.
        return TaskControl::Stop;
    }

    // Mana gate: all-or-nothing, no partial deduction on failure.
    let mp_per_tick = guard.as_ref().map_or(0, |active| active.spec.mp_per_tick);
    {
        let mut world = write_world(&inner.world);
        let caster_gone = match world.actor_mut(inner.caster) {
            Some(caster) if !caster.is_dead() => !caster.mp.try_spend(mp_per_tick),
            _ => true,
        };
        if caster_gone {
            drop(world);
            inner
                .notifier
                .system_message(inner.caster, SystemMessage::SkillRemovedDueLackMp);
            if let Some(active) = guard.take() {
                teardown(inner, active);
            }
            return TaskControl::Stop;
        }
    }

    // Snapshot the immutable parts so the abort paths below can take the
    // session without an outstanding borrow.
    let Some((skill, effect_id, locked, primary)) = guard
        .as_ref()
        .map(|active| (active.skill.clone(), active.spec.effect_id, active.locked, active.primary))
    else {
        return TaskControl::Stop;
    };

    let targets: Vec<ObjectId> = if locked {
        vec![primary]
    } else {
        let world = read_world(&inner.world);
        skill
            .affect_scope
            .expand(inner.caster, primary, &skill, &*world)
    };
    if targets.is_empty() {
        // Nothing in reach this tick; the channel itself keeps going.
        return TaskControl::Continue;
    }

    let max_level = inner.skills.max_level(effect_id);
    for target in targets {
        let reachable = {
            let world = read_world(&inner.world);
            let in_range = match (world.actor(inner.caster), world.actor(target)) {
                (Some(caster), Some(candidate)) => {
                    skill.effect_range == 0
                        || caster
                            .position
                            .is_within_range(candidate.position, skill.effect_range)
                }
                _ => false,
            };
            in_range && world.can_see(inner.caster, target)
        };
        if !reachable {
            if locked {
                // The locked target slipped out of reach; the whole session
                // dies with it.
                inner
                    .notifier
                    .system_message(inner.caster, SystemMessage::TargetTooFar);
                if let Some(active) = guard.take() {
                    teardown(inner, active);
                }
                return TaskControl::Stop;
            }
            continue;
        }

        let cardinality = inner
            .registry
            .add_channelizer(target, effect_id, inner.caster);
        let level = cardinality.min(usize::from(max_level)).max(1) as u8;
        let Some(effect_skill) = inner.skills.channeling_skill(effect_id, level) else {
            let err = RuntimeError::MissingSkillDefinition {
                id: effect_id,
                level,
            };
            error!(caster = %inner.caster, %err, "aborting channel");
            if let Some(active) = guard.take() {
                teardown(inner, active);
            }
            return TaskControl::Stop;
        };
        if let Some(active) = guard.as_mut()
            && !active.affected.contains(&target)
        {
            active.affected.push(target);
        }

        // Upgrade-only: a stacked level already at or above ours stays.
        let current = inner.effects.active_level(effect_id, target);
        if current.is_none_or(|level_now| level_now < level) {
            inner.effects.apply(effect_id, level, inner.caster, target);
        }

        discharge_shots(inner, &skill);
        inner
            .notifier
            .broadcast_cast(inner.caster, effect_skill.id, level, target);
    }
    TaskControl::Continue
}

/// Consumes the caster's charged shot for this tick and re-arms it when the
/// matching auto-shot toggle is on.
fn discharge_shots(inner: &ChannelizerInner, skill: &SkillDescriptor) {
    let wanted = if skill.uses_spiritshot {
        ShotCharges::BLESSED_SPIRITSHOT | ShotCharges::SPIRITSHOT
    } else {
        ShotCharges::SOULSHOT
    };
    let mut world = write_world(&inner.world);
    let Some(caster) = world.actor_mut(inner.caster) else {
        return;
    };
    let spent = caster.shots & wanted;
    if spent.is_empty() {
        return;
    }
    caster.shots -= spent;
    caster.shots |= spent & caster.auto_shots;
}

/// Shared unwind for external stops and tick-side aborts. Removes this
/// caster from every touched target, then drops or downgrades the stacked
/// effect.
fn teardown(inner: &ChannelizerInner, active: ActiveChannel) {
    if let Some(handle) = &active.handle {
        handle.cancel();
    }
    let effect_id = active.spec.effect_id;
    let max_level = inner.skills.max_level(effect_id);
    for target in active.affected {
        let remaining = inner
            .registry
            .remove_channelizer(target, effect_id, inner.caster);
        if remaining == 0 {
            inner.effects.remove(effect_id, target);
            continue;
        }
        let level = remaining.min(usize::from(max_level)).max(1) as u8;
        if inner
            .effects
            .active_level(effect_id, target)
            .is_some_and(|level_now| level_now > level)
        {
            inner.effects.apply(effect_id, level, inner.caster, target);
        }
    }
}
