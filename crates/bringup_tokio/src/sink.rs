use bringup_core::bringup::{TransitionRequest, TransitionSink};
use bringup_core::error::{CoreError, Domain, ErrorKind, Payload, Result};
use tokio::sync::mpsc::{self, error::SendError};
use tracing::debug;

/// Transition sink backed by an unbounded mpsc channel.
///
/// `dispatch` never waits; the receiving lifecycle runtime drains at its own pace.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<TransitionRequest>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TransitionRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl TransitionSink for ChannelSink {
    fn dispatch(&self, request: TransitionRequest) -> Result<()> {
        debug!("dispatch {request}");
        self.tx.send(request).map_err(|SendError(request)| {
            CoreError::error()
                .domain(Domain::Transport)
                .kind(ErrorKind::Transport)
                .msgf(format_args!("lifecycle runtime is gone, {request} not delivered"))
                .payload(Payload::Node(request.target.fqn().to_string().into()))
                .build()
        })
    }
}
