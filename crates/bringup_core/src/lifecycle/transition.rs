/// ROS2-style lifecycle transitions (requests).
///
/// These are the **user-invoked** transitions. All "ON_*_SUCCESS/FAILURE/ERROR"
/// transitions are modeled via `finish(intermediate, via, CallbackResult)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Transition {
    Configure,
    Cleanup,
    Activate,
    Deactivate,
    Shutdown,
}

impl Transition {
    /// Compact id used in error payloads (shutdown collapsed).
    pub const fn id(self) -> u8 {
        match self {
            Transition::Configure => 1,
            Transition::Cleanup => 2,
            Transition::Activate => 3,
            Transition::Deactivate => 4,
            Transition::Shutdown => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Transition::Configure => "configure",
            Transition::Cleanup => "cleanup",
            Transition::Activate => "activate",
            Transition::Deactivate => "deactivate",
            Transition::Shutdown => "shutdown",
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_lowercase_label() {
        assert_eq!(Transition::Configure.to_string(), "configure");
        assert_eq!(Transition::Activate.to_string(), "activate");
    }
}
