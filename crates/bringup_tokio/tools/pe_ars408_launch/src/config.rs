use std::env;

use bringup_core::bringup::{BringupGuards, AUTO_ACTIVATE, AUTO_CONFIGURE};
use bringup_core::error::Result as CoreResult;

pub const ENV_AUTO_CONFIGURE: &str = "PE_ARS408_AUTO_CONFIGURE";
pub const ENV_AUTO_ACTIVATE: &str = "PE_ARS408_AUTO_ACTIVATE";

/// Every launch argument with its default, in declaration order.
pub const LAUNCH_ARGUMENTS: [(&str, &str); 17] = [
    ("interface", "can0"),
    ("enable_can_fd", "false"),
    ("interval_sec", "0.01"),
    ("use_bus_time", "false"),
    ("filters", "0:0"),
    (AUTO_CONFIGURE, "true"),
    (AUTO_ACTIVATE, "true"),
    ("from_can_bus_topic", "from_can_bus"),
    ("input/frame", "/sensing/radar/can_tx"),
    ("output/objects", "objects_raw"),
    ("output/scan", "scan"),
    ("output_frame", "ars408"),
    ("publish_radar_track", "true"),
    ("publish_radar_scan", "false"),
    ("sequential_publish", "false"),
    ("size_x", "1.8"),
    ("size_y", "1.8"),
];

const FILTERS_HELP: &str = "\
comma separated CAN filters for the interface:
    <can_id>:<can_mask>   match when received_id & mask == can_id & mask
    <can_id>~<can_mask>   match when received_id & mask != can_id & mask
    #<error_mask>         error frame filter
    j|J                   join the given filters (logical AND)
  ids and masks are hex; 8-digit id and mask mean 29 bit EFF.
  '0:0' accepts all data frames.";

/// Launch arguments as given (`name:=value`), with defaults filled in.
///
/// Values stay opaque strings; only the guards are interpreted, by `guards()`.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    values: Vec<(&'static str, String)>,
    pub plan_only: bool,
    pub unknown: Vec<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            values: LAUNCH_ARGUMENTS
                .iter()
                .map(|(name, default)| (*name, default.to_string()))
                .collect(),
            plan_only: false,
            unknown: Vec::new(),
        }
    }
}

impl LaunchConfig {
    pub fn from_args() -> Self {
        Self::from_args_iter(env::args())
    }

    /// Parse an argv-style iterator; the first item is the program name.
    ///
    /// Environment guard overrides apply first, explicit arguments win.
    pub fn from_args_iter<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        if let Ok(value) = env::var(ENV_AUTO_CONFIGURE) {
            config.set(AUTO_CONFIGURE, value);
        }
        if let Ok(value) = env::var(ENV_AUTO_ACTIVATE) {
            config.set(AUTO_ACTIVATE, value);
        }

        let mut args = iter.into_iter();
        let _ = args.next();
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => {
                    print_usage();
                    std::process::exit(0);
                }
                "--plan-only" => config.plan_only = true,
                _ => {
                    let declared = arg
                        .split_once(":=")
                        .is_some_and(|(name, value)| config.set(name, value));
                    if !declared {
                        config.unknown.push(arg.to_string());
                    }
                }
            }
        }

        config
    }

    /// Value of a launch argument, `None` if no such argument is declared.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Override a declared argument. Returns false for undeclared names.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// All arguments with their effective values, in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Resolve the bring-up guards; an indeterminate value is a configuration error.
    pub fn guards(&self) -> CoreResult<BringupGuards> {
        BringupGuards::from_raw(self.get(AUTO_CONFIGURE), self.get(AUTO_ACTIVATE))
    }
}

fn print_usage() {
    println!("pe_ars408_launch [--plan-only] [name:=value ...]");
    println!();
    println!("launch arguments (default):");
    for (name, default) in LAUNCH_ARGUMENTS {
        println!("  {name:<22} {default}");
    }
    println!();
    println!("filters: {FILTERS_HELP}");
}
