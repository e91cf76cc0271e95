/// ROS2-style lifecycle primary + transition (intermediate) states.
///
/// Primary (stable) states:
/// - Unconfigured, Inactive, Active, Finalized
///
/// Transition (intermediate) states:
/// - Configuring, CleaningUp, ShuttingDown, Activating, Deactivating, ErrorProcessing
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum State {
    // Primary
    Unconfigured,
    Inactive,
    Active,
    Finalized,

    // Transition (intermediate)
    Configuring,
    CleaningUp,
    ShuttingDown,
    Activating,
    Deactivating,
    ErrorProcessing,
}

/// Mirrors `lifecycle_msgs/msg/State` numeric constants.
impl State {
    pub const fn id(self) -> u8 {
        match self {
            State::Unconfigured => 1,
            State::Inactive => 2,
            State::Active => 3,
            State::Finalized => 4,
            State::Configuring => 10,
            State::CleaningUp => 11,
            State::ShuttingDown => 12,
            State::Activating => 13,
            State::Deactivating => 14,
            State::ErrorProcessing => 15,
        }
    }

    /// Label as reported by the lifecycle runtime (`lifecycle_msgs/msg/State.label`).
    pub const fn label(self) -> &'static str {
        match self {
            State::Unconfigured => "unconfigured",
            State::Inactive => "inactive",
            State::Active => "active",
            State::Finalized => "finalized",
            State::Configuring => "configuring",
            State::CleaningUp => "cleaningup",
            State::ShuttingDown => "shuttingdown",
            State::Activating => "activating",
            State::Deactivating => "deactivating",
            State::ErrorProcessing => "errorprocessing",
        }
    }

    /// Parse a runtime-reported label. Unknown labels are `None`, never a guess.
    pub fn from_label(label: &str) -> Option<State> {
        let label = label.trim();
        ALL_STATES
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical list of all lifecycle states (primary + transition).
pub const ALL_STATES: [State; 10] = [
    State::Unconfigured,
    State::Inactive,
    State::Active,
    State::Finalized,
    State::Configuring,
    State::CleaningUp,
    State::ShuttingDown,
    State::Activating,
    State::Deactivating,
    State::ErrorProcessing,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for state in ALL_STATES {
            assert_eq!(State::from_label(state.label()), Some(state));
        }
    }

    #[test]
    fn ids_follow_lifecycle_msgs() {
        let ids: Vec<_> = ALL_STATES.iter().map(|s| s.id()).collect();
        assert_eq!(ids, [1, 2, 3, 4, 10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn label_parsing_is_case_insensitive_but_exact() {
        assert_eq!(State::from_label("Configuring"), Some(State::Configuring));
        assert_eq!(State::from_label(" inactive "), Some(State::Inactive));
        assert_eq!(State::from_label("configured"), None);
        assert_eq!(State::from_label(""), None);
    }
}
