//! Fixed-rate task scheduling on top of tokio.
//!
//! Tasks are synchronous closures invoked from a single spawned loop, so two
//! invocations of the same task never overlap and cancellation can only land
//! between ticks, never inside one.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// What a periodic task wants the scheduler to do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskControl {
    /// Keep ticking at the fixed rate.
    Continue,
    /// Tear the task loop down.
    Stop,
}

/// Handle to a running periodic task. Dropping the handle does not cancel
/// the task; call [`TaskHandle::cancel`].
#[derive(Debug)]
pub struct TaskHandle {
    live: Arc<AtomicBool>,
    join: JoinHandle<()>,
}

impl TaskHandle {
    /// Flips the liveness flag and aborts the loop.
    ///
    /// A tick that is already executing runs to completion (the closure is
    /// synchronous, so the abort lands at the next timer await); any tick
    /// that has not yet started observes the cleared flag and never runs.
    pub fn cancel(&self) {
        self.live.store(false, Ordering::SeqCst);
        self.join.abort();
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst) && !self.join.is_finished()
    }
}

/// Spawns fixed-rate loops. Stateless; the handle owns the task.
pub struct Scheduler;

impl Scheduler {
    /// Runs `task` every `interval`, first firing after `initial_delay`.
    ///
    /// Missed ticks are delayed rather than bursted, matching wall-clock
    /// pacing for game effects.
    pub fn schedule_at_fixed_rate<F>(
        initial_delay: Duration,
        interval: Duration,
        mut task: F,
    ) -> TaskHandle
    where
        F: FnMut() -> TaskControl + Send + 'static,
    {
        let live = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&live);
        let join = tokio::spawn(async move {
            let mut timer = interval_at(Instant::now() + initial_delay, interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                timer.tick().await;
                if !flag.load(Ordering::SeqCst) {
                    break;
                }
                if task() == TaskControl::Stop {
                    flag.store(false, Ordering::SeqCst);
                    break;
                }
            }
        });
        TaskHandle { live, join }
    }
}
