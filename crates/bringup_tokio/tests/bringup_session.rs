use std::sync::Arc;
use std::time::Duration;

use bringup_core::bringup::{BringupGuards, LifecycleEvent, ManagedNodeHandle, Orchestrator};
use bringup_core::lifecycle::{CallbackResult, LifecycleCallbacks, State};
use bringup_tokio::{
    run_bringup, run_loopback, AlwaysSucceed, ChannelSink, EventBus, LoopbackNode,
};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

struct Session {
    watcher: broadcast::Receiver<LifecycleEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl Session {
    fn spawn(guards: BringupGuards, callbacks: Box<dyn LifecycleCallbacks + Send>) -> Self {
        let handle = ManagedNodeHandle::new("", "pe_ars408_node").unwrap();
        let bus = EventBus::new();
        let watcher = bus.subscribe();

        let (sink, requests) = ChannelSink::new();
        let mut orch = Orchestrator::new(sink);
        orch.register(handle.clone(), guards.rules()).unwrap();

        let session = tokio::spawn({
            let events = bus.subscribe();
            async move {
                let _ = run_bringup(Arc::new(orch), events).await;
            }
        });

        let node = LoopbackNode::new(handle, callbacks, bus);
        node.start();
        let runtime = tokio::spawn(async move {
            run_loopback(node, requests).await;
        });

        Self {
            watcher,
            tasks: vec![session, runtime],
        }
    }

    /// Collect observed edges until `quiet` passes with no new event.
    async fn settle(&mut self, quiet: Duration) -> Vec<(State, State)> {
        let mut edges = Vec::new();
        while let Ok(Ok(event)) = tokio::time::timeout(quiet, self.watcher.recv()).await {
            if let LifecycleEvent::StateTransitioned { from, to, .. } = event {
                edges.push((from, to));
            }
        }
        edges
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

const QUIET: Duration = Duration::from_millis(200);

#[tokio::test]
async fn default_guards_bring_node_to_active() {
    let mut session = Session::spawn(BringupGuards::default(), Box::new(AlwaysSucceed));

    assert_eq!(
        session.settle(QUIET).await,
        vec![
            (State::Unconfigured, State::Configuring),
            (State::Configuring, State::Inactive),
            (State::Inactive, State::Activating),
            (State::Activating, State::Active),
        ]
    );
}

#[tokio::test]
async fn auto_activate_off_stalls_at_inactive() {
    let guards = BringupGuards {
        auto_configure: true,
        auto_activate: false,
    };
    let mut session = Session::spawn(guards, Box::new(AlwaysSucceed));

    let edges = session.settle(QUIET).await;
    assert_eq!(edges.last(), Some(&(State::Configuring, State::Inactive)));
    assert_eq!(edges.len(), 2);
}

#[tokio::test]
async fn auto_configure_off_never_leaves_unconfigured() {
    let guards = BringupGuards {
        auto_configure: false,
        auto_activate: true,
    };
    let mut session = Session::spawn(guards, Box::new(AlwaysSucceed));

    assert!(session.settle(QUIET).await.is_empty());
}

/// Configure errors on the first attempt(s), then succeeds.
struct FlakyConfigure {
    failures_left: usize,
}

impl LifecycleCallbacks for FlakyConfigure {
    fn on_configure(&mut self) -> CallbackResult {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            CallbackResult::Error
        } else {
            CallbackResult::Success
        }
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

#[tokio::test]
async fn configure_error_does_not_trigger_activate() {
    let mut session = Session::spawn(
        BringupGuards::default(),
        Box::new(FlakyConfigure { failures_left: 1 }),
    );

    assert_eq!(
        session.settle(QUIET).await,
        vec![
            (State::Unconfigured, State::Configuring),
            (State::Configuring, State::ErrorProcessing),
            (State::ErrorProcessing, State::Unconfigured),
        ]
    );
}
