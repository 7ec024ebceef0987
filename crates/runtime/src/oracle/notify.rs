//! Caster-facing notifications.
use tokio::sync::broadcast;

use game_core::{ObjectId, SkillId, SystemMessage};

/// User-visible side effects of a channeling session.
pub trait Notifier: Send + Sync {
    /// A system message addressed to one actor.
    fn system_message(&self, to: ObjectId, message: SystemMessage);

    /// The visible cast indicator emitted on every applied tick.
    fn broadcast_cast(&self, caster: ObjectId, skill: SkillId, level: u8, target: ObjectId);
}

/// Events published by [`EventNotifier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuntimeEvent {
    SystemMessage {
        to: ObjectId,
        message: SystemMessage,
    },
    SkillLaunched {
        caster: ObjectId,
        skill: SkillId,
        level: u8,
        target: ObjectId,
    },
}

/// Fan-out notifier over a tokio broadcast channel. Subscribers that lag
/// behind lose the oldest events, never the sender.
#[derive(Debug)]
pub struct EventNotifier {
    sender: broadcast::Sender<RuntimeEvent>,
}

impl EventNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RuntimeEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventNotifier {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Notifier for EventNotifier {
    fn system_message(&self, to: ObjectId, message: SystemMessage) {
        // No subscribers is fine; nobody is listening yet.
        let _ = self.sender.send(RuntimeEvent::SystemMessage { to, message });
    }

    fn broadcast_cast(&self, caster: ObjectId, skill: SkillId, level: u8, target: ObjectId) {
        let _ = self.sender.send(RuntimeEvent::SkillLaunched {
            caster,
            skill,
            level,
            target,
        });
    }
}
