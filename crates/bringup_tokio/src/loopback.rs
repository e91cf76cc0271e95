use bringup_core::bringup::{LifecycleEvent, ManagedNodeHandle, TransitionRequest};
use bringup_core::error::{CoreError, Domain, ErrorKind, Payload, Result};
use bringup_core::lifecycle::{walk, CallbackResult, LifecycleCallbacks, State};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::error::log_core_error;
use crate::EventBus;

/// In-process lifecycle runtime for a single managed node.
///
/// Executes transition requests with the core engine and reports every edge
/// walked on the event bus, the way a real runtime reports `transition_event`s.
pub struct LoopbackNode {
    handle: ManagedNodeHandle,
    state: State,
    callbacks: Box<dyn LifecycleCallbacks + Send>,
    bus: EventBus,
}

impl LoopbackNode {
    /// Starts in `Unconfigured`.
    pub fn new(
        handle: ManagedNodeHandle,
        callbacks: Box<dyn LifecycleCallbacks + Send>,
        bus: EventBus,
    ) -> Self {
        Self {
            handle,
            state: State::Unconfigured,
            callbacks,
            bus,
        }
    }

    pub fn handle(&self) -> &ManagedNodeHandle {
        &self.handle
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Announce that the node's process is running.
    pub fn start(&self) {
        info!("process started for {}", self.handle);
        self.bus.publish(LifecycleEvent::ProcessStarted {
            target: self.handle.clone(),
        });
    }

    /// Execute one request; returns the state the node settled in.
    ///
    /// Requests for other nodes and transitions not allowed from the current
    /// state are rejected and leave the node untouched.
    pub fn apply(&mut self, request: &TransitionRequest) -> Result<State> {
        if request.target != self.handle {
            return Err(CoreError::warn()
                .domain(Domain::Lifecycle)
                .kind(ErrorKind::NotRegistered)
                .msgf(format_args!("{request} is not addressed to {}", self.handle))
                .payload(Payload::Node(request.target.fqn().to_string().into()))
                .build());
        }

        let edges = walk(self.state, request.transition, self.callbacks.as_mut())?;
        for edge in edges {
            self.state = edge.to;
            self.bus.publish(LifecycleEvent::StateTransitioned {
                target: self.handle.clone(),
                from: edge.from,
                to: edge.to,
            });
        }

        Ok(self.state)
    }
}

/// Drain transition requests into `node` until every sender is gone.
///
/// Rejected transitions are logged and skipped; the node keeps serving.
pub async fn run_loopback(
    mut node: LoopbackNode,
    mut requests: mpsc::UnboundedReceiver<TransitionRequest>,
) -> State {
    while let Some(request) = requests.recv().await {
        match node.apply(&request) {
            Ok(state) => info!("{request} applied, {} is {state}", node.handle()),
            Err(err) => {
                warn!("{request} rejected by lifecycle runtime");
                log_core_error(&err);
            }
        }
    }
    node.state()
}

/// Callbacks for a driver whose every transition succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysSucceed;

impl LifecycleCallbacks for AlwaysSucceed {
    fn on_configure(&mut self) -> CallbackResult {
        CallbackResult::Success
    }
    fn on_activate(&mut self) -> CallbackResult {
        CallbackResult::Success
    }
    fn on_deactivate(&mut self) -> CallbackResult {
        CallbackResult::Success
    }
    fn on_cleanup(&mut self) -> CallbackResult {
        CallbackResult::Success
    }
    fn on_shutdown(&mut self) -> CallbackResult {
        CallbackResult::Success
    }
    fn on_error(&mut self) -> CallbackResult {
        CallbackResult::Success
    }
}
