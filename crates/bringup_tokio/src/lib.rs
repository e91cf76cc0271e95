//! bringup_tokio
//!
//! tokio adapter for `bringup_core`:
//! - `ChannelSink`: transition requests over an unbounded mpsc channel
//! - `EventBus`: lifecycle events over a broadcast channel
//! - `run_bringup`: the async session loop feeding events to an `Orchestrator`
//! - `LoopbackNode`: in-process lifecycle runtime for rehearsals and tests

pub mod error;

mod bus;
mod loopback;
mod session;
mod sink;

pub use bus::{EventBus, EVENT_BUS_CAPACITY};
pub use loopback::{run_loopback, AlwaysSucceed, LoopbackNode};
pub use session::run_bringup;
pub use sink::ChannelSink;

pub use bringup_core::bringup::{LifecycleEvent, ManagedNodeHandle, TransitionRequest};
pub use bringup_core::error::{CoreError, Result};
