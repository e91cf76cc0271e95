//! bringup_core::lifecycle
//!
//! Pure lifecycle semantics aligned to the ROS 2 managed node model.
//! No transport code lives here.
//!
//! - Closed enums for states and transitions, with lifecycle_msgs ids and labels
//! - Transition pipeline: `begin()` -> callback -> `finish()`
//! - `walk()` returns the edges a node passes through, which is what a
//!   lifecycle runtime reports as state-transition events

mod engine;
mod state;
mod transition;

pub use engine::{
    begin, finish, finish_with_error_handling, walk, CallbackResult, LifecycleCallbacks, StateEdge,
};
pub use state::{State, ALL_STATES};
pub use transition::Transition;
