use bringup_core::bringup::LifecycleEvent;
use tokio::sync::broadcast;

pub const EVENT_BUS_CAPACITY: usize = 64;

/// Lifecycle event fan-out (process-start and state-transition notifications).
///
/// Publishing never blocks. A subscriber that falls more than the capacity
/// behind loses the oldest events and sees a lag on its next receive.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<LifecycleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish to every current subscriber; returns how many there were.
    pub fn publish(&self, event: LifecycleEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LifecycleEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bringup_core::bringup::ManagedNodeHandle;

    #[test]
    fn publish_without_subscribers_is_not_an_error() {
        let bus = EventBus::new();
        let target = ManagedNodeHandle::new("", "radar").unwrap();
        assert_eq!(bus.publish(LifecycleEvent::ProcessStarted { target }), 0);
    }

    #[test]
    fn subscribers_see_events_in_order() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();
        let a = ManagedNodeHandle::new("", "a").unwrap();
        let b = ManagedNodeHandle::new("", "b").unwrap();

        bus.publish(LifecycleEvent::ProcessStarted { target: a.clone() });
        bus.publish(LifecycleEvent::ProcessStarted { target: b.clone() });

        assert_eq!(rx.try_recv().unwrap().target(), &a);
        assert_eq!(rx.try_recv().unwrap().target(), &b);
    }
}
