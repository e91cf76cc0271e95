use std::sync::Arc;

use bringup_core::bringup::{LifecycleEvent, Orchestrator, TransitionSink};
use bringup_core::error::{CoreError, Domain, ErrorKind, Payload, Result};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, trace};

use crate::error::log_core_error;

/// Feed lifecycle events to the orchestrator until the event bus closes.
///
/// A lagged receiver ends the session with a `Transport` error, because the
/// dropped events cannot be replayed. A sink failure ends it the same way.
pub async fn run_bringup<S>(
    orchestrator: Arc<Orchestrator<S>>,
    mut events: broadcast::Receiver<LifecycleEvent>,
) -> Result<()>
where
    S: TransitionSink,
{
    loop {
        let event = match events.recv().await {
            Ok(event) => event,
            Err(RecvError::Lagged(skipped)) => {
                let err = lagged(skipped);
                log_core_error(&err);
                return Err(err);
            }
            Err(RecvError::Closed) => {
                debug!("lifecycle event bus closed, bring-up session ends");
                return Ok(());
            }
        };

        match orchestrator.on_event(&event) {
            Ok(0) => trace!("no bring-up rule for {event:?}"),
            Ok(dispatched) => {
                info!(
                    node = %event.target(),
                    dispatched,
                    "bring-up rule fired on {}",
                    describe(&event)
                );
            }
            Err(err) => {
                log_core_error(&err);
                return Err(err);
            }
        }
    }
}

fn lagged(skipped: u64) -> CoreError {
    CoreError::error()
        .domain(Domain::Transport)
        .kind(ErrorKind::Transport)
        .msgf(format_args!("bring-up session missed {skipped} lifecycle events"))
        .payload(Payload::Context {
            key: "skipped",
            value: skipped.to_string().into(),
        })
        .build()
}

fn describe(event: &LifecycleEvent) -> String {
    match event {
        LifecycleEvent::ProcessStarted { .. } => "process start".to_string(),
        LifecycleEvent::StateTransitioned { from, to, .. } => format!("{from} -> {to}"),
    }
}
