//! Drives a [`SelectionMachine`] against a live [`PlaceDetailResolver`].
//!
//! Lookups run on spawned tasks, but only their results travel back: every
//! state transition happens on the task that owns the session, through
//! [`SelectionSession::apply`]. Superseded lookups are never cancelled; their
//! results arrive and are dropped as stale.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use schoolmap_core::LocationRecord;
use schoolmap_places::PlaceDetails;

use crate::resolver::{FailureReason, PlaceDetailResolver};
use crate::selection::{LookupTag, SelectionError, SelectionMachine, SelectionState};

/// A finished lookup, tagged with the selection that issued it.
#[derive(Debug)]
pub struct LookupOutcome {
    pub tag: LookupTag,
    pub result: Result<PlaceDetails, FailureReason>,
}

pub struct SelectionSession {
    machine: SelectionMachine,
    resolver: Arc<dyn PlaceDetailResolver>,
    lookup_timeout: Duration,
    outcome_tx: mpsc::UnboundedSender<LookupOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<LookupOutcome>,
}

impl SelectionSession {
    #[must_use]
    pub fn new(resolver: Arc<dyn PlaceDetailResolver>, lookup_timeout: Duration) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            machine: SelectionMachine::new(),
            resolver,
            lookup_timeout,
            outcome_tx,
            outcome_rx,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        self.machine.state()
    }

    /// Selects a catalog marker and starts its detail lookup.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::MissingPlaceId`] if the record has no place
    /// identifier; no lookup is started.
    pub fn select(&mut self, location: &LocationRecord) -> Result<LookupTag, SelectionError> {
        let tag = self.machine.select(location)?;
        self.spawn_lookup(tag.clone());
        Ok(tag)
    }

    /// Selects a place by identifier (e.g. from search) and starts its
    /// detail lookup.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::MissingPlaceId`] if `place_id` is blank.
    pub fn select_place(&mut self, place_id: &str) -> Result<LookupTag, SelectionError> {
        let tag = self.machine.select_place(place_id)?;
        self.spawn_lookup(tag.clone());
        Ok(tag)
    }

    pub fn deselect(&mut self) {
        self.machine.deselect();
    }

    /// Waits for the next finished lookup, stale or not.
    ///
    /// Cancel-safe: no outcome is lost if the returned future is dropped.
    pub async fn next_outcome(&mut self) -> Option<LookupOutcome> {
        self.outcome_rx.recv().await
    }

    /// Feeds a finished lookup into the state machine. Returns `true` if it
    /// changed the selection, `false` if it was stale.
    pub fn apply(&mut self, outcome: LookupOutcome) -> bool {
        let LookupOutcome { tag, result } = outcome;
        match result {
            Ok(details) => self
                .machine
                .on_detail_resolved(&tag, details, self.resolver.as_ref()),
            Err(reason) => self.machine.on_detail_failed(&tag, reason),
        }
    }

    /// Applies outcomes until the current selection is no longer pending.
    ///
    /// Returns immediately when nothing is pending. Always terminates because
    /// every lookup is bounded by the session's timeout.
    pub async fn settle(&mut self) -> &SelectionState {
        while self.machine.state().is_pending() {
            let Some(outcome) = self.next_outcome().await else {
                break;
            };
            self.apply(outcome);
        }
        self.machine.state()
    }

    fn spawn_lookup(&self, tag: LookupTag) {
        let resolver = Arc::clone(&self.resolver);
        let tx = self.outcome_tx.clone();
        let timeout = self.lookup_timeout;

        tokio::spawn(async move {
            let result =
                match tokio::time::timeout(timeout, resolver.resolve(tag.place_id())).await {
                    Ok(result) => result,
                    Err(_) => {
                        tracing::warn!(
                            tag = %tag,
                            timeout = ?timeout,
                            "place detail lookup timed out"
                        );
                        Err(FailureReason::LookupError(format!(
                            "timed out after {}ms",
                            timeout.as_millis()
                        )))
                    }
                };

            if tx.send(LookupOutcome { tag, result }).is_err() {
                tracing::debug!("selection session dropped before lookup finished");
            }
        });
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
