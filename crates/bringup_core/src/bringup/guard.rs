use crate::error::{CoreError, Result};

use super::TriggerRule;

pub const AUTO_CONFIGURE: &str = "auto_configure";
pub const AUTO_ACTIVATE: &str = "auto_activate";

/// Resolve a launch-style boolean (`true`/`false`/`1`/`0`, any case).
///
/// Anything else is indeterminate and rejected rather than defaulted.
pub fn parse_guard(key: &'static str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(CoreError::invalid_config(key, raw.to_string())),
    }
}

/// Static switches for the two stock bring-up rules. Fixed at registration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BringupGuards {
    pub auto_configure: bool,
    pub auto_activate: bool,
}

impl Default for BringupGuards {
    fn default() -> Self {
        Self {
            auto_configure: true,
            auto_activate: true,
        }
    }
}

impl BringupGuards {
    /// Unset values take the default (`true`).
    pub fn from_raw(auto_configure: Option<&str>, auto_activate: Option<&str>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            auto_configure: auto_configure
                .map(|raw| parse_guard(AUTO_CONFIGURE, raw))
                .transpose()?
                .unwrap_or(defaults.auto_configure),
            auto_activate: auto_activate
                .map(|raw| parse_guard(AUTO_ACTIVATE, raw))
                .transpose()?
                .unwrap_or(defaults.auto_activate),
        })
    }

    /// configure-on-start, then activate-on-configured.
    pub fn rules(&self) -> Vec<TriggerRule> {
        vec![
            TriggerRule::configure_on_start(self.auto_configure),
            TriggerRule::activate_on_configured(self.auto_activate),
        ]
    }
}
