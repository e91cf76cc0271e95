use crate::error::Result;

use super::TransitionRequest;

/// Outbound channel to the lifecycle runtime.
///
/// `dispatch` must not block. Delivery is fire-and-forget: the outcome of the
/// transition itself comes back (if at all) as a later `LifecycleEvent`.
pub trait TransitionSink {
    fn dispatch(&self, request: TransitionRequest) -> Result<()>;
}

impl<F> TransitionSink for F
where
    F: Fn(TransitionRequest) -> Result<()>,
{
    fn dispatch(&self, request: TransitionRequest) -> Result<()> {
        self(request)
    }
}
