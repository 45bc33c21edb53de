use schoolmap_core::LocationRecord;

use super::*;
use crate::locality::Locality;
use crate::resolver::FailureReason;
use crate::selection::{SelectionMachine, SelectionState};

fn alpha_record() -> LocationRecord {
    LocationRecord {
        id: "1".to_string(),
        title: "Alpha School".to_string(),
        institution_type: "Secondary".to_string(),
        address: "1 Main St".to_string(),
        latitude: "8.84".to_string(),
        longitude: "7.87".to_string(),
        place_id: "P1".to_string(),
    }
}

fn view() -> DetailViewModel {
    DetailViewModel {
        place_id: "P1".to_string(),
        name: "Alpha School".to_string(),
        formatted_address: "1 Main St, Keffi".to_string(),
        locality: Locality {
            city: "Keffi".to_string(),
            state: "Nasarawa".to_string(),
            country: "Nigeria".to_string(),
        },
        position: None,
        photo_urls: vec![],
        opening_hours: None,
        rating: Some(4.4),
        user_ratings_total: Some(12),
        phone: None,
        website: None,
        business_status: Some("OPERATIONAL".to_string()),
        reviews: vec![],
    }
}

fn ready(view: DetailViewModel) -> SelectionState {
    let mut machine = SelectionMachine::new();
    let tag = machine.select(&alpha_record()).unwrap();
    SelectionState::Ready {
        tag,
        marker: Some(alpha_record()),
        view: Box::new(view),
    }
}

#[test]
fn tab_parsing_accepts_both_spellings() {
    assert_eq!("overview".parse::<DetailTab>().unwrap(), DetailTab::Overview);
    assert_eq!("Reviews".parse::<DetailTab>().unwrap(), DetailTab::Reviews);
    assert_eq!("review".parse::<DetailTab>().unwrap(), DetailTab::Reviews);
    assert!("photos".parse::<DetailTab>().is_err());
}

#[test]
fn stars_round_and_clamp() {
    assert_eq!(stars(4.4), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2606}");
    assert_eq!(stars(4.5), "\u{2605}".repeat(5));
    assert_eq!(stars(-1.0), "\u{2606}".repeat(5));
    assert_eq!(stars(9.0), "\u{2605}".repeat(5));
}

#[test]
fn idle_panel_prompts_for_selection() {
    assert_eq!(
        render_panel(&SelectionState::Idle, DetailTab::Overview),
        NOTHING_SELECTED
    );
}

#[test]
fn pending_panel_shows_marker_title_and_loading() {
    let mut machine = SelectionMachine::new();
    machine.select(&alpha_record()).unwrap();
    let out = render_panel(machine.state(), DetailTab::Overview);
    assert_eq!(out, format!("[Alpha School]\n{LOADING_DETAILS}"));
}

#[test]
fn failed_panel_shows_neutral_no_details() {
    let mut machine = SelectionMachine::new();
    let tag = machine.select(&alpha_record()).unwrap();
    machine.on_detail_failed(&tag, FailureReason::LookupError("boom".to_string()));
    let out = render_panel(machine.state(), DetailTab::Overview);
    assert!(out.contains(NO_DETAILS));
    assert!(!out.contains("boom"));
}

#[test]
fn overview_shows_no_data_placeholders() {
    let out = render_panel(&ready(view()), DetailTab::Overview);
    assert!(out.contains("[Overview]  Reviews"));
    assert!(out.contains("Alpha School"));
    assert!(out.contains("4.4"));
    assert!(out.contains(NO_PHOTOS));
    assert!(out.contains("Keffi, Nasarawa, Nigeria"));
    assert!(out.contains("1 Main St, Keffi"));
    assert!(out.contains("Opening Hours\n  No Data"));
    assert!(out.contains("Contact Number : No Data"));
    assert!(out.contains("Total User Ratings : 12"));
    assert!(!out.contains("Status :"), "operational status is not shown");
}

#[test]
fn overview_lists_hours_and_photos() {
    let mut v = view();
    v.opening_hours = Some(vec![
        "Monday: 8:00 AM - 4:00 PM".to_string(),
        "Tuesday: 8:00 AM - 4:00 PM".to_string(),
    ]);
    v.photo_urls = vec!["https://img.test/a".to_string()];
    v.phone = Some("+234 800 000 0000".to_string());
    let out = render_panel(&ready(v), DetailTab::Overview);
    assert!(out.contains("  Monday: 8:00 AM - 4:00 PM\n  Tuesday: 8:00 AM - 4:00 PM"));
    assert!(out.contains("  1. https://img.test/a"));
    assert!(out.contains("Contact Number : +234 800 000 0000"));
}

#[test]
fn reviews_tab_without_reviews() {
    let out = render_panel(&ready(view()), DetailTab::Reviews);
    assert!(out.contains(" Overview  [Reviews]"));
    assert!(out.ends_with(NO_REVIEWS));
}

#[test]
fn reviews_tab_lists_reviews() {
    let mut v = view();
    v.reviews = vec![ReviewView {
        author: "Ada".to_string(),
        rating: Some(5.0),
        text: "Lovely teachers".to_string(),
        avatar_url: None,
        relative_time: Some("a month ago".to_string()),
        posted_at: None,
    }];
    let out = render_panel(&ready(v), DetailTab::Reviews);
    assert!(out.contains(&format!("Ada  {}  a month ago", "\u{2605}".repeat(5))));
    assert!(out.contains("  Lovely teachers"));
}

#[test]
fn catalog_failure_is_visible() {
    let out = render_catalog(&CatalogState::Failed("HTTP error: 502".to_string()));
    assert_eq!(out, "Could not load schools: HTTP error: 502");
}

#[test]
fn catalog_table_lists_markers() {
    let out = render_catalog(&CatalogState::Loaded(vec![alpha_record()]));
    let mut lines = out.lines();
    assert!(lines.next().unwrap().starts_with("#"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("1   1 "));
    assert!(row.contains("8.840000,7.870000"));
    assert!(row.ends_with("Alpha School"));
}

#[test]
fn empty_catalog_says_so() {
    assert_eq!(
        render_catalog(&CatalogState::Loaded(vec![])),
        "No schools to show."
    );
}
