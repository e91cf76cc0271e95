use std::fmt;

use bringup_core::bringup::{
    BringupGuards, ManagedNodeHandle, Orchestrator, TransitionSink, TriggerRule,
};
use bringup_core::error::Result as CoreResult;

use crate::config::LaunchConfig;

pub const PACKAGE: &str = "pe_ars408_ros";
pub const EXECUTABLE: &str = "pe_ars408_node";
pub const NODE_NAME: &str = "pe_ars408_node";
pub const NODE_NAMESPACE: &str = "";
pub const OUTPUT: &str = "screen";

/// Launch arguments forwarded verbatim as node parameters.
pub const NODE_PARAMETERS: [&str; 11] = [
    "interface",
    "enable_can_fd",
    "interval_sec",
    "filters",
    "use_bus_time",
    "publish_radar_track",
    "publish_radar_scan",
    "output_frame",
    "sequential_publish",
    "size_x",
    "size_y",
];

/// (node-side topic, launch argument holding the remapped topic).
pub const REMAPPINGS: [(&str, &str); 4] = [
    ("from_can_bus", "from_can_bus_topic"),
    ("~/input/frame", "input/frame"),
    ("~/output/objects", "output/objects"),
    ("~/output/scan", "output/scan"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remapping {
    pub from: &'static str,
    pub to: String,
}

/// What to run: the managed driver node with its parameters and remappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescription {
    pub package: &'static str,
    pub executable: &'static str,
    pub name: &'static str,
    pub namespace: &'static str,
    pub parameters: Vec<Parameter>,
    pub remappings: Vec<Remapping>,
    pub output: &'static str,
}

impl NodeDescription {
    pub fn handle(&self) -> CoreResult<ManagedNodeHandle> {
        ManagedNodeHandle::new(self.namespace, self.name)
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn remapped(&self, from: &str) -> Option<&str> {
        self.remappings
            .iter()
            .find(|r| r.from == from)
            .map(|r| r.to.as_str())
    }
}

/// Build the driver node description from launch arguments.
pub fn describe_node(config: &LaunchConfig) -> NodeDescription {
    let lookup = |name: &str| config.get(name).unwrap_or_default().to_string();

    NodeDescription {
        package: PACKAGE,
        executable: EXECUTABLE,
        name: NODE_NAME,
        namespace: NODE_NAMESPACE,
        parameters: NODE_PARAMETERS
            .iter()
            .map(|&name| Parameter {
                name,
                value: lookup(name),
            })
            .collect(),
        remappings: REMAPPINGS
            .iter()
            .map(|&(from, arg)| Remapping {
                from,
                to: lookup(arg),
            })
            .collect(),
        output: OUTPUT,
    }
}

/// Everything the launch needs: the node, its identity and its bring-up rules.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub node: NodeDescription,
    pub handle: ManagedNodeHandle,
    pub guards: BringupGuards,
    pub rules: Vec<TriggerRule>,
}

impl LaunchPlan {
    /// Fails on an invalid node identity or an indeterminate guard.
    pub fn compose(config: &LaunchConfig) -> CoreResult<Self> {
        let node = describe_node(config);
        let handle = node.handle()?;
        let guards = config.guards()?;

        Ok(Self {
            node,
            handle,
            rules: guards.rules(),
            guards,
        })
    }

    /// Register this plan's rules with an orchestrator.
    pub fn install<S>(&self, orchestrator: &mut Orchestrator<S>) -> CoreResult<()>
    where
        S: TransitionSink,
    {
        orchestrator.register(self.handle.clone(), self.rules.clone())
    }
}

impl fmt::Display for LaunchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "node {} ({}/{}, output={})",
            self.handle, self.node.package, self.node.executable, self.node.output
        )?;
        for p in &self.node.parameters {
            writeln!(f, "  param {}={}", p.name, p.value)?;
        }
        for r in &self.node.remappings {
            writeln!(f, "  remap {} -> {}", r.from, r.to)?;
        }
        for rule in &self.rules {
            let state = if rule.guard { "armed" } else { "disabled" };
            writeln!(f, "  rule {} -> {} ({state})", rule.name, rule.action)?;
        }
        Ok(())
    }
}
