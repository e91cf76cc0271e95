use crate::lifecycle::{State, Transition};

use super::ManagedNodeHandle;

/// Inbound notification from the process manager or the lifecycle runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The managed executable began running.
    ProcessStarted {
        target: ManagedNodeHandle,
    },

    /// The node's reported lifecycle state changed.
    StateTransitioned {
        target: ManagedNodeHandle,
        from: State,
        to: State,
    },
}

impl LifecycleEvent {
    pub fn target(&self) -> &ManagedNodeHandle {
        match self {
            LifecycleEvent::ProcessStarted { target } => target,
            LifecycleEvent::StateTransitioned { target, .. } => target,
        }
    }

    /// Build a transition event from runtime-reported labels.
    ///
    /// Returns `None` when either label is not a known lifecycle state; such an
    /// event cannot match any rule.
    pub fn from_labels(target: ManagedNodeHandle, from: &str, to: &str) -> Option<Self> {
        Some(LifecycleEvent::StateTransitioned {
            target,
            from: State::from_label(from)?,
            to: State::from_label(to)?,
        })
    }
}

/// Command for the lifecycle runtime. Built and dispatched immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    pub target: ManagedNodeHandle,
    pub transition: Transition,
}

impl std::fmt::Display for TransitionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let action = self.transition.label().to_uppercase();
        write!(f, "{action}({})", self.target)
    }
}
