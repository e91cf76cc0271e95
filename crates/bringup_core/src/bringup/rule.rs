use crate::lifecycle::{State, Transition};

use super::LifecycleEvent;

/// Event shape a rule reacts to. The target is bound at registration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EventPattern {
    ProcessStarted,
    /// Exact `from -> to` pair; any other pair is a non-match.
    StateTransitioned {
        from: State,
        to: State,
    },
}

impl EventPattern {
    pub fn matches(&self, event: &LifecycleEvent) -> bool {
        match (self, event) {
            (EventPattern::ProcessStarted, LifecycleEvent::ProcessStarted { .. }) => true,
            (
                EventPattern::StateTransitioned { from, to },
                LifecycleEvent::StateTransitioned {
                    from: seen_from,
                    to: seen_to,
                    ..
                },
            ) => from == seen_from && to == seen_to,
            _ => false,
        }
    }
}

/// `pattern` matched and `guard` true => request `action` for the bound node.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TriggerRule {
    pub name: &'static str,
    pub pattern: EventPattern,
    pub guard: bool,
    pub action: Transition,
}

impl TriggerRule {
    /// CONFIGURE as soon as the managed process starts.
    pub fn configure_on_start(guard: bool) -> Self {
        Self {
            name: "configure-on-start",
            pattern: EventPattern::ProcessStarted,
            guard,
            action: Transition::Configure,
        }
    }

    /// ACTIVATE once configuration finished (`configuring -> inactive`).
    pub fn activate_on_configured(guard: bool) -> Self {
        Self {
            name: "activate-on-configured",
            pattern: EventPattern::StateTransitioned {
                from: State::Configuring,
                to: State::Inactive,
            },
            guard,
            action: Transition::Activate,
        }
    }

    /// True when this rule would dispatch for `event` (target aside).
    pub fn fires_on(&self, event: &LifecycleEvent) -> bool {
        self.guard && self.pattern.matches(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bringup::ManagedNodeHandle;

    fn transitioned(from: State, to: State) -> LifecycleEvent {
        LifecycleEvent::StateTransitioned {
            target: ManagedNodeHandle::new("", "radar").unwrap(),
            from,
            to,
        }
    }

    #[test]
    fn activate_rule_matches_only_configuring_to_inactive() {
        let rule = TriggerRule::activate_on_configured(true);
        assert!(rule.fires_on(&transitioned(State::Configuring, State::Inactive)));

        let others = [
            (State::Active, State::Inactive),
            (State::Deactivating, State::Inactive),
            (State::CleaningUp, State::Inactive),
            (State::Unconfigured, State::Configuring),
            (State::Configuring, State::Unconfigured),
            (State::Configuring, State::ErrorProcessing),
        ];
        for (from, to) in others {
            assert!(!rule.fires_on(&transitioned(from, to)), "{from} -> {to}");
        }
    }

    #[test]
    fn activate_rule_fires_in_isolation_even_without_configure_rule() {
        // With auto_configure off the configure edge never happens in practice,
        // but the activate rule itself still reacts to an injected event.
        let rule = TriggerRule::activate_on_configured(true);
        assert!(rule.fires_on(&transitioned(State::Configuring, State::Inactive)));
    }

    #[test]
    fn false_guard_never_fires() {
        let rule = TriggerRule::configure_on_start(false);
        let started = LifecycleEvent::ProcessStarted {
            target: ManagedNodeHandle::new("", "radar").unwrap(),
        };
        assert!(rule.pattern.matches(&started));
        assert!(!rule.fires_on(&started));
    }
}
