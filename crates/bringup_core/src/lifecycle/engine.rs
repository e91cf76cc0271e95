use crate::error::{CoreError, Result};

use super::{State, Transition};

/// Outcome of a node's transition callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CallbackResult {
    Success,
    Failure,
    Error,
}

/// Callbacks a managed node runs while a transition is in flight.
pub trait LifecycleCallbacks {
    fn on_configure(&mut self) -> CallbackResult;
    fn on_activate(&mut self) -> CallbackResult;
    fn on_deactivate(&mut self) -> CallbackResult;
    fn on_cleanup(&mut self) -> CallbackResult;
    fn on_shutdown(&mut self) -> CallbackResult;

    /// Called from `ErrorProcessing`: Success -> Unconfigured, otherwise Finalized.
    fn on_error(&mut self) -> CallbackResult;
}

/// A single observed edge of the lifecycle state machine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StateEdge {
    pub from: State,
    pub to: State,
}

/// Move from a stable state into the intermediate state for `via`.
pub fn begin(current: State, via: Transition) -> Result<State> {
    use State::*;
    use Transition::*;

    let next = match (current, via) {
        (Unconfigured, Configure) => Configuring,
        (Inactive, Activate) => Activating,
        (Active, Deactivate) => Deactivating,
        (Inactive, Cleanup) => CleaningUp,
        (Unconfigured | Inactive | Active, Shutdown) => ShuttingDown,
        _ => {
            return Err(CoreError::invalid_transition_lifecycle(
                current.id(),
                via.id(),
            ));
        }
    };

    Ok(next)
}

/// Leave an intermediate state based on the callback outcome.
pub fn finish(intermediate: State, via: Transition, result: CallbackResult) -> Result<State> {
    use CallbackResult::*;
    use State::*;
    use Transition::*;

    let next = match (intermediate, via, result) {
        (Configuring, Configure, Success) => Inactive,
        (Configuring, Configure, Failure) => Unconfigured,
        (Activating, Activate, Success) => Active,
        (Activating, Activate, Failure) => Inactive,
        (Deactivating, Deactivate, Success) => Inactive,
        (Deactivating, Deactivate, Failure) => Active,
        (CleaningUp, Cleanup, Success) => Unconfigured,
        (CleaningUp, Cleanup, Failure) => Inactive,
        // Shutdown is terminal regardless of the callback outcome.
        (ShuttingDown, Shutdown, _) => Finalized,
        (Configuring | Activating | Deactivating | CleaningUp, _, Error)
            if transition_into(intermediate) == Some(via) =>
        {
            ErrorProcessing
        }
        _ => {
            return Err(CoreError::invalid_transition_lifecycle(
                intermediate.id(),
                via.id(),
            ));
        }
    };

    Ok(next)
}

/// Transition that leads into a given intermediate state.
fn transition_into(intermediate: State) -> Option<Transition> {
    match intermediate {
        State::Configuring => Some(Transition::Configure),
        State::Activating => Some(Transition::Activate),
        State::Deactivating => Some(Transition::Deactivate),
        State::CleaningUp => Some(Transition::Cleanup),
        _ => None,
    }
}

/// Like `finish`, but resolves `ErrorProcessing` with the `on_error` outcome.
///
/// `on_error = None` leaves the node in `ErrorProcessing`.
pub fn finish_with_error_handling(
    intermediate: State,
    via: Transition,
    result: CallbackResult,
    on_error: Option<CallbackResult>,
) -> Result<State> {
    let next = finish(intermediate, via, result)?;
    if next != State::ErrorProcessing {
        return Ok(next);
    }

    Ok(match on_error {
        Some(CallbackResult::Success) => State::Unconfigured,
        Some(_) => State::Finalized,
        None => State::ErrorProcessing,
    })
}

/// Run a full transition and return every edge walked, in order.
///
/// A successful configure yields `unconfigured -> configuring`, `configuring -> inactive`.
/// An erroring callback adds the hop through `errorprocessing`.
pub fn walk(
    current: State,
    via: Transition,
    callbacks: &mut dyn LifecycleCallbacks,
) -> Result<Vec<StateEdge>> {
    let intermediate = begin(current, via)?;
    let mut edges = vec![StateEdge {
        from: current,
        to: intermediate,
    }];

    let result = match via {
        Transition::Configure => callbacks.on_configure(),
        Transition::Activate => callbacks.on_activate(),
        Transition::Deactivate => callbacks.on_deactivate(),
        Transition::Cleanup => callbacks.on_cleanup(),
        Transition::Shutdown => callbacks.on_shutdown(),
    };

    let next = finish(intermediate, via, result)?;
    if next == State::ErrorProcessing {
        edges.push(StateEdge {
            from: intermediate,
            to: State::ErrorProcessing,
        });
        let recovered =
            finish_with_error_handling(intermediate, via, result, Some(callbacks.on_error()))?;
        edges.push(StateEdge {
            from: State::ErrorProcessing,
            to: recovered,
        });
    } else {
        edges.push(StateEdge {
            from: intermediate,
            to: next,
        });
    }

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Domain, ErrorKind, Payload};

    #[derive(Clone, Copy)]
    struct Fixed {
        result: CallbackResult,
        on_error: CallbackResult,
    }

    impl LifecycleCallbacks for Fixed {
        fn on_configure(&mut self) -> CallbackResult {
            self.result
        }
        fn on_activate(&mut self) -> CallbackResult {
            self.result
        }
        fn on_deactivate(&mut self) -> CallbackResult {
            self.result
        }
        fn on_cleanup(&mut self) -> CallbackResult {
            self.result
        }
        fn on_shutdown(&mut self) -> CallbackResult {
            self.result
        }
        fn on_error(&mut self) -> CallbackResult {
            self.on_error
        }
    }

    #[test]
    fn invalid_transition_has_payload() {
        let e = begin(State::Active, Transition::Configure).unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidTransition);
        assert_eq!(e.domain, Domain::Lifecycle);

        match e.payload {
            Payload::LifecycleTransition {
                from_state,
                via_transition,
            } => {
                assert_eq!(from_state, State::Active.id());
                assert_eq!(via_transition, Transition::Configure.id());
            }
            _ => panic!("expected LifecycleTransition payload"),
        }
    }

    #[test]
    fn successful_configure_walks_through_configuring() {
        let mut cb = Fixed {
            result: CallbackResult::Success,
            on_error: CallbackResult::Success,
        };
        let edges = walk(State::Unconfigured, Transition::Configure, &mut cb).unwrap();
        assert_eq!(
            edges,
            vec![
                StateEdge {
                    from: State::Unconfigured,
                    to: State::Configuring
                },
                StateEdge {
                    from: State::Configuring,
                    to: State::Inactive
                },
            ]
        );
    }

    #[test]
    fn erroring_activate_walks_through_error_processing() {
        let mut cb = Fixed {
            result: CallbackResult::Error,
            on_error: CallbackResult::Success,
        };
        let edges = walk(State::Inactive, Transition::Activate, &mut cb).unwrap();
        let states: Vec<_> = edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(
            states,
            vec![
                (State::Inactive, State::Activating),
                (State::Activating, State::ErrorProcessing),
                (State::ErrorProcessing, State::Unconfigured),
            ]
        );
    }

    #[test]
    fn failed_error_recovery_finalizes() {
        let mut cb = Fixed {
            result: CallbackResult::Error,
            on_error: CallbackResult::Failure,
        };
        let edges = walk(State::Unconfigured, Transition::Configure, &mut cb).unwrap();
        assert_eq!(edges.last().map(|e| e.to), Some(State::Finalized));
    }

    #[test]
    fn failure_returns_to_origin_state() {
        let cases = [
            (
                State::Unconfigured,
                Transition::Configure,
                State::Unconfigured,
            ),
            (State::Inactive, Transition::Activate, State::Inactive),
            (State::Active, Transition::Deactivate, State::Active),
            (State::Inactive, Transition::Cleanup, State::Inactive),
            (State::Active, Transition::Shutdown, State::Finalized),
        ];

        for (start, transition, expected) in cases {
            let mid = begin(start, transition).unwrap();
            let end = finish(mid, transition, CallbackResult::Failure).unwrap();
            assert_eq!(end, expected, "{start:?} via {transition:?}");
        }
    }

    #[test]
    fn finish_rejects_mismatched_intermediate() {
        let error = CallbackResult::Error;
        assert!(finish(State::Configuring, Transition::Activate, error).is_err());

        let success = CallbackResult::Success;
        assert!(finish(State::Inactive, Transition::Configure, success).is_err());
    }

    #[test]
    fn unresolved_error_processing_stays_put() {
        let end = finish_with_error_handling(
            State::Configuring,
            Transition::Configure,
            CallbackResult::Error,
            None,
        )
        .unwrap();
        assert_eq!(end, State::ErrorProcessing);
    }
}
