//! bringup_core: runtime-agnostic lifecycle bring-up.
//!
//! - Lifecycle state model and transition engine (ROS 2 managed node semantics)
//! - Trigger-rule orchestrator that carries a managed node to `active`
//! - No async runtime, no transport

pub mod error;

/// Lifecycle states, transitions and the transition engine.
pub mod lifecycle;

/// Rule-driven bring-up orchestration.
pub mod bringup;
