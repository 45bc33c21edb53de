//! Place selection and detail hydration state machine.
//!
//! ```text
//! Idle ──select──▶ PendingDetail ──resolved──▶ Ready
//!  ▲                  │    ▲        └─failed──▶ Failed
//!  └────deselect──────┘    └──────select (from any state)
//! ```
//!
//! Every `select` mints a fresh [`LookupTag`]. Completions are applied only
//! when their tag equals the tag of the current `PendingDetail` state, so a
//! slow lookup for an earlier selection can never overwrite a later one.

use schoolmap_core::LocationRecord;
use schoolmap_places::PlaceDetails;

use crate::resolver::{FailureReason, PlaceDetailResolver};
use crate::view_model::DetailViewModel;

/// Identifies one detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupTag {
    place_id: String,
    seq: u64,
}

impl LookupTag {
    #[must_use]
    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl std::fmt::Display for LookupTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.place_id, self.seq)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("location '{location_id}' has no place identifier")]
    MissingPlaceId { location_id: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    PendingDetail {
        tag: LookupTag,
        /// The clicked marker's record; `None` for search-driven selections.
        marker: Option<LocationRecord>,
    },
    Ready {
        tag: LookupTag,
        marker: Option<LocationRecord>,
        view: Box<DetailViewModel>,
    },
    Failed {
        tag: LookupTag,
        marker: Option<LocationRecord>,
        reason: FailureReason,
    },
}

impl SelectionState {
    #[must_use]
    pub fn tag(&self) -> Option<&LookupTag> {
        match self {
            SelectionState::Idle => None,
            SelectionState::PendingDetail { tag, .. }
            | SelectionState::Ready { tag, .. }
            | SelectionState::Failed { tag, .. } => Some(tag),
        }
    }

    #[must_use]
    pub fn place_id(&self) -> Option<&str> {
        self.tag().map(LookupTag::place_id)
    }

    #[must_use]
    pub fn marker(&self) -> Option<&LocationRecord> {
        match self {
            SelectionState::Idle => None,
            SelectionState::PendingDetail { marker, .. }
            | SelectionState::Ready { marker, .. }
            | SelectionState::Failed { marker, .. } => marker.as_ref(),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, SelectionState::PendingDetail { .. })
    }

    #[must_use]
    pub fn view(&self) -> Option<&DetailViewModel> {
        match self {
            SelectionState::Ready { view, .. } => Some(&**view),
            _ => None,
        }
    }
}

/// Owns the single active [`SelectionState`].
#[derive(Debug, Default)]
pub struct SelectionMachine {
    state: SelectionState,
    next_seq: u64,
}

impl SelectionMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Selects a catalog marker and returns the tag for the lookup the caller
    /// must issue.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::MissingPlaceId`] if the record has no place
    /// identifier; the current state is left untouched.
    pub fn select(&mut self, location: &LocationRecord) -> Result<LookupTag, SelectionError> {
        if !location.has_place_id() {
            return Err(SelectionError::MissingPlaceId {
                location_id: location.id.clone(),
            });
        }
        Ok(self.begin(location.place_id.trim(), Some(location.clone())))
    }

    /// Selects a place that did not come from a catalog marker, e.g. a search
    /// prediction.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::MissingPlaceId`] if `place_id` is blank.
    pub fn select_place(&mut self, place_id: &str) -> Result<LookupTag, SelectionError> {
        let place_id = place_id.trim();
        if place_id.is_empty() {
            return Err(SelectionError::MissingPlaceId {
                location_id: String::new(),
            });
        }
        Ok(self.begin(place_id, None))
    }

    fn begin(&mut self, place_id: &str, marker: Option<LocationRecord>) -> LookupTag {
        self.next_seq += 1;
        let tag = LookupTag {
            place_id: place_id.to_owned(),
            seq: self.next_seq,
        };
        if let Some(previous) = self.state.tag().filter(|_| self.state.is_pending()) {
            tracing::debug!(superseded = %previous, "dropping in-flight lookup");
        }
        tracing::debug!(tag = %tag, "selection pending");
        self.state = SelectionState::PendingDetail {
            tag: tag.clone(),
            marker,
        };
        tag
    }

    /// Applies a successful lookup. Returns `false` (and changes nothing) if
    /// `tag` is stale.
    pub fn on_detail_resolved<R>(
        &mut self,
        tag: &LookupTag,
        details: PlaceDetails,
        photos: &R,
    ) -> bool
    where
        R: PlaceDetailResolver + ?Sized,
    {
        let Some(marker) = self.take_pending(tag) else {
            return false;
        };
        let view = DetailViewModel::from_details(&tag.place_id, details, photos);
        tracing::debug!(tag = %tag, "selection ready");
        self.state = SelectionState::Ready {
            tag: tag.clone(),
            marker,
            view: Box::new(view),
        };
        true
    }

    /// Applies a failed lookup. Returns `false` (and changes nothing) if
    /// `tag` is stale.
    pub fn on_detail_failed(&mut self, tag: &LookupTag, reason: FailureReason) -> bool {
        let Some(marker) = self.take_pending(tag) else {
            return false;
        };
        tracing::debug!(tag = %tag, reason = %reason, "selection failed");
        self.state = SelectionState::Failed {
            tag: tag.clone(),
            marker,
            reason,
        };
        true
    }

    /// Clears the selection. Any in-flight lookup becomes stale.
    pub fn deselect(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// If `tag` matches the pending selection, leaves `Idle` behind and hands
    /// back the pending marker; otherwise leaves the state untouched.
    fn take_pending(&mut self, tag: &LookupTag) -> Option<Option<LocationRecord>> {
        match &self.state {
            SelectionState::PendingDetail { tag: current, .. } if current == tag => {}
            _ => {
                tracing::debug!(tag = %tag, "ignoring stale lookup result");
                return None;
            }
        }
        match std::mem::take(&mut self.state) {
            SelectionState::PendingDetail { marker, .. } => Some(marker),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
