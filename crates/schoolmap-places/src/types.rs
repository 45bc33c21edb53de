//! Places API response types.
//!
//! Every endpoint wraps its payload in a `{"status": "OK", ...}` envelope;
//! [`ApiResponse`] captures that pattern generically. Fields the service may
//! omit are `Option` or defaulted collections.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level envelope for places responses.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub result: Option<PlaceDetails>,
}

/// Place metadata returned by the details endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub adr_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub plus_code: Option<PlusCode>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub reviews: Vec<PlaceReview>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: GeoPoint,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// One typed piece of a postal address, e.g. `{"long_name": "Keffi",
/// "types": ["locality", "political"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    #[must_use]
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

/// Opaque photo handle; turned into a URL by
/// [`PlacesClient::photo_url`](crate::PlacesClient::photo_url).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlacePhoto {
    pub photo_reference: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    /// Absent when the service only knows `open_now`.
    #[serde(default)]
    pub weekday_text: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlusCode {
    #[serde(default)]
    pub global_code: Option<String>,
    #[serde(default)]
    pub compound_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceReview {
    pub author_name: String,
    #[serde(default)]
    pub author_url: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub relative_time_description: Option<String>,
    #[serde(default)]
    pub text: String,
    /// Seconds since the Unix epoch.
    #[serde(default)]
    pub time: Option<i64>,
}

impl PlaceReview {
    #[must_use]
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        self.time.and_then(|t| DateTime::from_timestamp(t, 0))
    }
}

// ---------------------------------------------------------------------------
// autocomplete
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub predictions: Vec<PlacePrediction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlacePrediction {
    pub description: String,
    pub place_id: String,
    #[serde(default)]
    pub types: Vec<String>,
}
