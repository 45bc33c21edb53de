//! HTTP client for the places web service.
//!
//! Wraps `reqwest` with API key management and envelope checking. Every JSON
//! endpoint reports success in a `"status"` field; anything other than `OK`
//! is mapped to [`PlacesError::NotFound`] or [`PlacesError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use schoolmap_core::config::DEFAULT_PLACES_BASE_URL;
use schoolmap_core::Bounds;

use crate::error::PlacesError;
use crate::types::{
    ApiResponse, AutocompleteResponse, DetailsResponse, PlaceDetails, PlacePhoto, PlacePrediction,
};

/// Fields requested from the details endpoint.
pub const DETAIL_FIELDS: &[&str] = &[
    "name",
    "formatted_address",
    "geometry/location",
    "photos",
    "address_components",
    "adr_address",
    "business_status",
    "formatted_phone_number",
    "icon",
    "international_phone_number",
    "opening_hours",
    "plus_code",
    "rating",
    "reviews",
    "types",
    "user_ratings_total",
    "website",
];

/// Where autocomplete results may come from.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchArea {
    /// ISO 3166-1 alpha-2 code, lowercase.
    pub country: String,
    pub bounds: Bounds,
}

/// Client for the places web service.
///
/// Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_PLACES_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `Url::join` appends endpoint names
        // instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches structured metadata for a place.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::InvalidInput`] if `place_id` is blank.
    /// - [`PlacesError::NotFound`] on `ZERO_RESULTS` / `NOT_FOUND`, or an
    ///   `OK` envelope without a result.
    /// - [`PlacesError::Api`] for any other non-`OK` status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn get_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let place_id = place_id.trim();
        if place_id.is_empty() {
            return Err(PlacesError::InvalidInput(
                "place id must not be empty".to_string(),
            ));
        }

        let fields = DETAIL_FIELDS.join(",");
        let url = self.build_url(
            "details/json",
            &[("place_id", place_id), ("fields", &fields)],
        )?;

        let envelope: ApiResponse<DetailsResponse> = self
            .request_json(&url, &format!("details(place_id={place_id})"))
            .await?;
        Self::check_status(&envelope.status, envelope.error_message.as_deref(), place_id)?;

        envelope.data.result.ok_or_else(|| PlacesError::NotFound {
            place_id: place_id.to_owned(),
        })
    }

    /// Returns predictions for a partially typed place name, restricted to
    /// `area`.
    ///
    /// `ZERO_RESULTS` is an empty list, not an error.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::InvalidInput`] if `input` is blank.
    /// - [`PlacesError::Api`] for any status other than `OK`/`ZERO_RESULTS`.
    /// - [`PlacesError::Http`] / [`PlacesError::Deserialize`] as for
    ///   [`PlacesClient::get_details`].
    pub async fn autocomplete(
        &self,
        input: &str,
        area: &SearchArea,
    ) -> Result<Vec<PlacePrediction>, PlacesError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PlacesError::InvalidInput(
                "search text must not be empty".to_string(),
            ));
        }

        let components = format!("country:{}", area.country);
        let restriction = area.bounds.to_rectangle_param();
        let url = self.build_url(
            "autocomplete/json",
            &[
                ("input", input),
                ("components", &components),
                ("locationrestriction", &restriction),
            ],
        )?;

        let envelope: ApiResponse<AutocompleteResponse> = self
            .request_json(&url, &format!("autocomplete(input={input})"))
            .await?;

        if envelope.status == "ZERO_RESULTS" {
            return Ok(Vec::new());
        }
        Self::check_status(&envelope.status, envelope.error_message.as_deref(), input)?;

        tracing::debug!(
            input,
            count = envelope.data.predictions.len(),
            "autocomplete predictions"
        );
        Ok(envelope.data.predictions)
    }

    /// Builds the display URL for a photo, capped at `max_height` pixels.
    ///
    /// No request is made; the service redirects this URL to the image.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidBaseUrl`] if the endpoint cannot be
    /// joined onto the base URL.
    pub fn photo_url(&self, photo: &PlacePhoto, max_height: u32) -> Result<Url, PlacesError> {
        self.build_url(
            "photo",
            &[
                ("maxheight", &max_height.to_string()),
                ("photo_reference", &photo.photo_reference),
            ],
        )
    }

    /// Joins `endpoint` onto the base URL and appends `key` plus the given
    /// parameters, percent-encoded.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body.
    ///
    /// Transport errors are stripped of their URL, which carries the key.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, PlacesError> {
        let redact = |e: reqwest::Error| PlacesError::Http(e.without_url());
        let response = self.client.get(url.clone()).send().await.map_err(redact)?;
        let response = response.error_for_status().map_err(redact)?;
        let body = response.text().await.map_err(redact)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    fn check_status(status: &str, message: Option<&str>, subject: &str) -> Result<(), PlacesError> {
        match status {
            "OK" => Ok(()),
            "ZERO_RESULTS" | "NOT_FOUND" => Err(PlacesError::NotFound {
                place_id: subject.to_owned(),
            }),
            other => {
                let message = message.unwrap_or("no error message").to_string();
                tracing::warn!(status = other, error = %message, "places API error");
                Err(PlacesError::Api {
                    status: other.to_owned(),
                    message,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
