//! Selection and detail-hydration state for the school map, plus the
//! plain-text panel rendered from it.
//!
//! The [`SelectionMachine`] is synchronous and owns the only copy of the
//! selection; [`SelectionSession`] wires it to an injected
//! [`PlaceDetailResolver`] on a tokio runtime.

pub mod catalog;
pub mod locality;
pub mod panel;
pub mod resolver;
pub mod selection;
pub mod session;
pub mod view_model;

pub use catalog::{CatalogState, Marker};
pub use locality::{derive_locality, Locality};
pub use panel::{render_catalog, render_panel, DetailTab};
pub use resolver::{FailureReason, PlaceDetailResolver, PlacesResolver};
pub use selection::{LookupTag, SelectionError, SelectionMachine, SelectionState};
pub use session::{LookupOutcome, SelectionSession};
pub use view_model::{DetailViewModel, ReviewView};
