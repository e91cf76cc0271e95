//! bringup_core::bringup
//!
//! Event-driven bring-up of managed nodes.
//!
//! A `TriggerRule` binds an event shape to a transition, behind a static guard.
//! The `Orchestrator` holds one rule table per `ManagedNodeHandle` and turns
//! matching `LifecycleEvent`s into `TransitionRequest`s on a `TransitionSink`.

mod event;
mod guard;
mod handle;
mod orchestrator;
mod rule;
mod sink;

pub use event::{LifecycleEvent, TransitionRequest};
pub use guard::{parse_guard, BringupGuards, AUTO_ACTIVATE, AUTO_CONFIGURE};
pub use handle::ManagedNodeHandle;
pub use orchestrator::Orchestrator;
pub use rule::{EventPattern, TriggerRule};
pub use sink::TransitionSink;
