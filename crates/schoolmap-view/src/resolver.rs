//! The place-detail lookup capability the selection session depends on.

use async_trait::async_trait;

use schoolmap_places::{PlaceDetails, PlacePhoto, PlacesClient, PlacesError};

/// Why a detail lookup produced no view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureReason {
    #[error("no details found for this place")]
    NotFound,
    #[error("place lookup failed: {0}")]
    LookupError(String),
}

impl From<PlacesError> for FailureReason {
    fn from(err: PlacesError) -> Self {
        match err {
            PlacesError::NotFound { .. } => FailureReason::NotFound,
            other => FailureReason::LookupError(other.to_string()),
        }
    }
}

/// Resolves a place identifier to raw place metadata and turns photo
/// references into display URLs.
#[async_trait]
pub trait PlaceDetailResolver: Send + Sync {
    async fn resolve(&self, place_id: &str) -> Result<PlaceDetails, FailureReason>;

    /// Display URL for `photo`, or `None` if one cannot be produced.
    fn photo_url(&self, photo: &PlacePhoto) -> Option<String>;
}

/// [`PlaceDetailResolver`] backed by the places web service.
pub struct PlacesResolver {
    client: PlacesClient,
    photo_max_height: u32,
}

impl PlacesResolver {
    #[must_use]
    pub fn new(client: PlacesClient, photo_max_height: u32) -> Self {
        Self {
            client,
            photo_max_height,
        }
    }

    #[must_use]
    pub fn client(&self) -> &PlacesClient {
        &self.client
    }
}

#[async_trait]
impl PlaceDetailResolver for PlacesResolver {
    async fn resolve(&self, place_id: &str) -> Result<PlaceDetails, FailureReason> {
        self.client.get_details(place_id).await.map_err(|e| {
            tracing::warn!(place_id, error = %e, "place detail lookup failed");
            FailureReason::from(e)
        })
    }

    fn photo_url(&self, photo: &PlacePhoto) -> Option<String> {
        match self.client.photo_url(photo, self.photo_max_height) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "could not build photo URL");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_not_found() {
        let reason = FailureReason::from(PlacesError::NotFound {
            place_id: "P1".to_string(),
        });
        assert_eq!(reason, FailureReason::NotFound);
    }

    #[test]
    fn other_errors_map_to_lookup_error() {
        let reason = FailureReason::from(PlacesError::Api {
            status: "OVER_QUERY_LIMIT".to_string(),
            message: "quota".to_string(),
        });
        assert!(
            matches!(reason, FailureReason::LookupError(ref msg) if msg.contains("OVER_QUERY_LIMIT")),
            "got: {reason:?}"
        );
    }

    #[test]
    fn places_resolver_builds_photo_urls_with_height_hint() {
        let client =
            PlacesClient::with_base_url("k", 5, "schoolmap-test/0.1", "https://maps.example.com/")
                .unwrap();
        let resolver = PlacesResolver::new(client, 400);
        let photo = PlacePhoto {
            photo_reference: "ref-9".to_string(),
            width: None,
            height: None,
            html_attributions: vec![],
        };
        let url = resolver.photo_url(&photo).unwrap();
        assert!(url.contains("maxheight=400"), "{url}");
        assert!(url.contains("photo_reference=ref-9"), "{url}");
    }
}
