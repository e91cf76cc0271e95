use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{CoreError, Result};

use super::{LifecycleEvent, ManagedNodeHandle, TransitionRequest, TransitionSink, TriggerRule};

/// Reacts to lifecycle events by dispatching transition requests.
///
/// Rule tables are written once per handle by `register` and only read by
/// `on_event`, so a registered orchestrator can be shared behind an `Arc`.
/// No bring-up progress is tracked: every matching event fires again.
pub struct Orchestrator<S> {
    sink: S,
    rules: HashMap<ManagedNodeHandle, Arc<[TriggerRule]>>,
}

impl<S: TransitionSink> Orchestrator<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            rules: HashMap::new(),
        }
    }

    /// Install the rule set for `handle`. A handle can be registered once.
    pub fn register(&mut self, handle: ManagedNodeHandle, rules: Vec<TriggerRule>) -> Result<()> {
        match self.rules.entry(handle) {
            Entry::Occupied(entry) => Err(CoreError::already_registered(entry.key().fqn())),
            Entry::Vacant(entry) => {
                entry.insert(rules.into());
                Ok(())
            }
        }
    }

    /// Dispatch one request per matching, enabled rule of the event's target.
    ///
    /// Returns how many requests were dispatched. Events for unknown handles and
    /// unmatched events dispatch nothing. A sink failure is returned as-is.
    pub fn on_event(&self, event: &LifecycleEvent) -> Result<usize> {
        let target = event.target();
        let Some(rules) = self.rules.get(target) else {
            return Ok(0);
        };

        let mut dispatched = 0;
        for rule in rules.iter().filter(|rule| rule.fires_on(event)) {
            self.sink.dispatch(TransitionRequest {
                target: target.clone(),
                transition: rule.action,
            })?;
            dispatched += 1;
        }

        Ok(dispatched)
    }

    pub fn is_registered(&self, handle: &ManagedNodeHandle) -> bool {
        self.rules.contains_key(handle)
    }

    pub fn rules(&self, handle: &ManagedNodeHandle) -> Option<&[TriggerRule]> {
        self.rules.get(handle).map(|rules| &rules[..])
    }

    pub fn handles(&self) -> impl Iterator<Item = &ManagedNodeHandle> {
        self.rules.keys()
    }
}
