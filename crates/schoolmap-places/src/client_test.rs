use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, "schoolmap-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn photo(reference: &str) -> PlacePhoto {
    PlacePhoto {
        photo_reference: reference.to_string(),
        width: Some(1024),
        height: Some(768),
        html_attributions: vec![],
    }
}

#[test]
fn build_url_appends_endpoint_and_key_last() {
    let client = test_client("https://maps.example.com/maps/api/place");
    let url = client
        .build_url("details/json", &[("place_id", "P1")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.example.com/maps/api/place/details/json?place_id=P1&key=test-key"
    );
}

#[test]
fn build_url_tolerates_trailing_slashes() {
    let client = test_client("https://maps.example.com/maps/api/place//");
    let url = client.build_url("photo", &[]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.example.com/maps/api/place/photo?key=test-key"
    );
}

#[test]
fn photo_url_carries_height_hint_and_reference() {
    let client = test_client("https://maps.example.com/maps/api/place/");
    let url = client.photo_url(&photo("ref-1"), 400).unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.example.com/maps/api/place/photo?maxheight=400&photo_reference=ref-1&key=test-key"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://maps.example.com/maps/api/place/");
    let url = client
        .build_url("autocomplete/json", &[("input", "st mary's & co")])
        .unwrap();
    assert!(
        url.as_str().contains("st+mary%27s+%26+co"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn with_base_url_rejects_garbage() {
    let result = PlacesClient::with_base_url("k", 5, "ua", "::not a url::");
    assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
}

#[test]
fn check_status_maps_known_statuses() {
    assert!(PlacesClient::check_status("OK", None, "P1").is_ok());
    assert!(matches!(
        PlacesClient::check_status("NOT_FOUND", None, "P1"),
        Err(PlacesError::NotFound { ref place_id }) if place_id == "P1"
    ));
    assert!(matches!(
        PlacesClient::check_status("ZERO_RESULTS", None, "P1"),
        Err(PlacesError::NotFound { .. })
    ));
    assert!(matches!(
        PlacesClient::check_status("REQUEST_DENIED", Some("bad key"), "P1"),
        Err(PlacesError::Api { ref status, ref message }) if status == "REQUEST_DENIED" && message == "bad key"
    ));
}

#[test]
fn detail_fields_cover_the_panel() {
    for field in ["name", "photos", "opening_hours", "reviews", "address_components"] {
        assert!(DETAIL_FIELDS.contains(&field), "missing field {field}");
    }
}
