//! Client for the places service: place details, photo URLs and
//! autocomplete search.

pub mod client;
pub mod error;
pub mod types;

pub use client::{PlacesClient, SearchArea, DETAIL_FIELDS};
pub use error::PlacesError;
pub use types::{
    AddressComponent, OpeningHours, PlaceDetails, PlacePhoto, PlacePrediction, PlaceReview,
};
