//! Display-ready projection of raw place details.

use chrono::{DateTime, Utc};

use schoolmap_core::LatLng;
use schoolmap_places::{PlaceDetails, PlaceReview};

use crate::locality::{derive_locality, Locality};
use crate::resolver::PlaceDetailResolver;

/// Everything the detail panel shows for one resolved place.
///
/// Built fresh from each successful lookup; never merged with a previous
/// selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewModel {
    pub place_id: String,
    pub name: String,
    pub formatted_address: String,
    pub locality: Locality,
    pub position: Option<LatLng>,
    pub photo_urls: Vec<String>,
    /// `None` when the service has no weekday text for this place.
    pub opening_hours: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub business_status: Option<String>,
    pub reviews: Vec<ReviewView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewView {
    pub author: String,
    pub rating: Option<f64>,
    pub text: String,
    pub avatar_url: Option<String>,
    pub relative_time: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
}

impl From<PlaceReview> for ReviewView {
    fn from(review: PlaceReview) -> Self {
        let posted_at = review.posted_at();
        Self {
            author: review.author_name,
            rating: review.rating,
            text: review.text,
            avatar_url: review.profile_photo_url,
            relative_time: review.relative_time_description,
            posted_at,
        }
    }
}

impl DetailViewModel {
    /// Normalizes `details` for `place_id`, using `photos` to turn photo
    /// references into URLs. Photos without a URL are dropped.
    #[must_use]
    pub fn from_details<R>(place_id: &str, details: PlaceDetails, photos: &R) -> Self
    where
        R: PlaceDetailResolver + ?Sized,
    {
        let locality = derive_locality(&details.address_components);
        let photo_urls = details
            .photos
            .iter()
            .filter_map(|photo| photos.photo_url(photo))
            .collect();
        let position = details
            .geometry
            .as_ref()
            .and_then(|g| LatLng::new(g.location.lat, g.location.lng));
        let opening_hours = details
            .opening_hours
            .and_then(|h| h.weekday_text)
            .filter(|lines| !lines.is_empty());
        let phone = details
            .international_phone_number
            .or(details.formatted_phone_number);

        Self {
            place_id: place_id.to_owned(),
            name: details.name.unwrap_or_default(),
            formatted_address: details.formatted_address.unwrap_or_default(),
            locality,
            position,
            photo_urls,
            opening_hours,
            rating: details.rating,
            user_ratings_total: details.user_ratings_total,
            phone,
            website: details.website,
            business_status: details.business_status,
            reviews: details.reviews.into_iter().map(ReviewView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use schoolmap_places::PlacePhoto;

    use super::*;
    use crate::resolver::FailureReason;

    struct FakePhotos;

    #[async_trait]
    impl PlaceDetailResolver for FakePhotos {
        async fn resolve(&self, _place_id: &str) -> Result<PlaceDetails, FailureReason> {
            Err(FailureReason::NotFound)
        }

        fn photo_url(&self, photo: &PlacePhoto) -> Option<String> {
            (!photo.photo_reference.is_empty())
                .then(|| format!("https://img.test/{}?h=400", photo.photo_reference))
        }
    }

    fn details(value: serde_json::Value) -> PlaceDetails {
        serde_json::from_value(value).expect("fixture should deserialize")
    }

    #[test]
    fn minimal_details_normalize_to_empty_collections() {
        let raw = details(serde_json::json!({
            "name": "Alpha School",
            "formatted_address": "1 Main St",
            "photos": []
        }));
        let view = DetailViewModel::from_details("P1", raw, &FakePhotos);
        assert_eq!(view.place_id, "P1");
        assert_eq!(view.name, "Alpha School");
        assert_eq!(view.formatted_address, "1 Main St");
        assert!(view.photo_urls.is_empty());
        assert!(view.opening_hours.is_none());
        assert!(view.reviews.is_empty());
        assert_eq!(view.locality, Locality::default());
    }

    #[test]
    fn photos_are_mapped_through_resolver_and_unresolvable_ones_dropped() {
        let raw = details(serde_json::json!({
            "photos": [
                { "photo_reference": "a" },
                { "photo_reference": "" },
                { "photo_reference": "b" }
            ]
        }));
        let view = DetailViewModel::from_details("P1", raw, &FakePhotos);
        assert_eq!(
            view.photo_urls,
            vec![
                "https://img.test/a?h=400".to_string(),
                "https://img.test/b?h=400".to_string()
            ]
        );
    }

    #[test]
    fn empty_weekday_text_counts_as_absent() {
        let raw = details(serde_json::json!({
            "opening_hours": { "open_now": true, "weekday_text": [] }
        }));
        assert!(DetailViewModel::from_details("P1", raw, &FakePhotos)
            .opening_hours
            .is_none());
    }

    #[test]
    fn phone_prefers_international_format() {
        let raw = details(serde_json::json!({
            "formatted_phone_number": "0800 000 0000",
            "international_phone_number": "+234 800 000 0000"
        }));
        let view = DetailViewModel::from_details("P1", raw, &FakePhotos);
        assert_eq!(view.phone.as_deref(), Some("+234 800 000 0000"));

        let raw = details(serde_json::json!({ "formatted_phone_number": "0800 000 0000" }));
        let view = DetailViewModel::from_details("P1", raw, &FakePhotos);
        assert_eq!(view.phone.as_deref(), Some("0800 000 0000"));
    }

    #[test]
    fn reviews_and_locality_are_carried_over() {
        let raw = details(serde_json::json!({
            "address_components": [
                { "long_name": "Keffi", "types": ["locality"] },
                { "long_name": "Nigeria", "types": ["country"] }
            ],
            "geometry": { "location": { "lat": 8.84, "lng": 7.87 } },
            "reviews": [
                {
                    "author_name": "Ada",
                    "profile_photo_url": "https://example.com/ada.png",
                    "rating": 4,
                    "text": "Good",
                    "time": 1_700_000_000
                }
            ]
        }));
        let view = DetailViewModel::from_details("P1", raw, &FakePhotos);
        assert_eq!(view.locality.city, "Keffi");
        assert_eq!(view.locality.country, "Nigeria");
        assert!(view.position.is_some());
        assert_eq!(view.reviews.len(), 1);
        assert_eq!(view.reviews[0].author, "Ada");
        assert_eq!(view.reviews[0].rating, Some(4.0));
        assert_eq!(
            view.reviews[0].avatar_url.as_deref(),
            Some("https://example.com/ada.png")
        );
        assert!(view.reviews[0].posted_at.is_some());
    }
}
