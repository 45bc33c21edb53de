//! Plain-text rendering of the marker list and the detail panel.
//!
//! Pure functions of state: nothing here decides what is selected.

use std::str::FromStr;

use crate::catalog::CatalogState;
use crate::selection::SelectionState;
use crate::view_model::{DetailViewModel, ReviewView};

pub const NO_DATA: &str = "No Data";
pub const NO_PHOTOS: &str = "No photos available for this place.";
pub const NO_REVIEWS: &str = "No Reviews";
pub const NO_DETAILS: &str = "No details available for this place.";
pub const LOADING_DETAILS: &str = "Loading place details...";
pub const NOTHING_SELECTED: &str = "Select a school to see its details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Reviews,
}

impl FromStr for DetailTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(DetailTab::Overview),
            "review" | "reviews" => Ok(DetailTab::Reviews),
            other => Err(format!(
                "unknown tab '{other}' (expected overview or reviews)"
            )),
        }
    }
}

impl std::fmt::Display for DetailTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailTab::Overview => write!(f, "Overview"),
            DetailTab::Reviews => write!(f, "Reviews"),
        }
    }
}

/// Five-star bar for a 0-5 rating, rounded to the nearest whole star.
#[must_use]
pub fn stars(rating: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = rating.clamp(0.0, 5.0).round() as usize;
    format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
}

/// Marker table, or a visible loading / error line.
#[must_use]
pub fn render_catalog(state: &CatalogState) -> String {
    match state {
        CatalogState::Loading => "Loading schools...".to_string(),
        CatalogState::Failed(reason) => format!("Could not load schools: {reason}"),
        CatalogState::Loaded(_) => {
            let markers = state.markers();
            if markers.is_empty() {
                return "No schools to show.".to_string();
            }
            let mut lines = vec![format!(
                "{:<4}{:<26}{:<14}{:<24}TITLE",
                "#", "ID", "TYPE", "POSITION"
            )];
            for (i, marker) in markers.iter().enumerate() {
                lines.push(format!(
                    "{:<4}{:<26}{:<14}{:<24}{}",
                    i + 1,
                    marker.id,
                    truncate(&marker.institution_type, 13),
                    marker.position.to_string(),
                    marker.title
                ));
            }
            lines.join("\n")
        }
    }
}

/// The side panel for the current selection.
#[must_use]
pub fn render_panel(state: &SelectionState, tab: DetailTab) -> String {
    let mut lines = Vec::new();
    if let Some(marker) = state.marker() {
        lines.push(format!("[{}]", marker.title));
    }

    match state {
        SelectionState::Idle => lines.push(NOTHING_SELECTED.to_string()),
        SelectionState::PendingDetail { .. } => lines.push(LOADING_DETAILS.to_string()),
        SelectionState::Failed { .. } => lines.push(NO_DETAILS.to_string()),
        SelectionState::Ready { view, .. } => render_detail(&mut lines, view, tab),
    }

    lines.join("\n")
}

fn render_detail(lines: &mut Vec<String>, view: &DetailViewModel, tab: DetailTab) {
    lines.push("Location".to_string());
    lines.push(if view.name.is_empty() {
        "Unknown place".to_string()
    } else {
        view.name.clone()
    });
    if let Some(rating) = view.rating.filter(|r| *r > 0.0) {
        lines.push(format!("{} {rating:.1}", stars(rating)));
    }
    lines.push(String::new());

    if view.photo_urls.is_empty() {
        lines.push(NO_PHOTOS.to_string());
    } else {
        lines.push("Photos".to_string());
        for (i, url) in view.photo_urls.iter().enumerate() {
            lines.push(format!("  {}. {url}", i + 1));
        }
    }
    lines.push(String::new());

    lines.push(match tab {
        DetailTab::Overview => "[Overview]  Reviews".to_string(),
        DetailTab::Reviews => " Overview  [Reviews]".to_string(),
    });
    lines.push(String::new());

    match tab {
        DetailTab::Overview => render_overview(lines, view),
        DetailTab::Reviews => render_reviews(lines, &view.reviews),
    }
}

fn render_overview(lines: &mut Vec<String>, view: &DetailViewModel) {
    lines.push("Address".to_string());
    let place_line = [&view.locality.city, &view.locality.state, &view.locality.country]
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if !place_line.is_empty() {
        lines.push(format!("  {place_line}"));
    }
    if view.formatted_address.is_empty() {
        lines.push(format!("  {NO_DATA}"));
    } else {
        lines.push(format!("  {}", view.formatted_address));
    }
    lines.push(String::new());

    lines.push("Opening Hours".to_string());
    match &view.opening_hours {
        Some(hours) => lines.extend(hours.iter().map(|h| format!("  {h}"))),
        None => lines.push(format!("  {NO_DATA}")),
    }
    lines.push(String::new());

    lines.push("Other Info".to_string());
    lines.push(format!(
        "  Contact Number : {}",
        view.phone.as_deref().unwrap_or(NO_DATA)
    ));
    lines.push(format!(
        "  Total User Ratings : {}",
        view.user_ratings_total
            .filter(|n| *n > 0)
            .map_or_else(|| NO_DATA.to_string(), |n| n.to_string())
    ));
    if let Some(website) = &view.website {
        lines.push(format!("  Website : {website}"));
    }
    if let Some(status) = view
        .business_status
        .as_deref()
        .filter(|s| *s != "OPERATIONAL")
    {
        lines.push(format!("  Status : {status}"));
    }
}

fn render_reviews(lines: &mut Vec<String>, reviews: &[ReviewView]) {
    if reviews.is_empty() {
        lines.push(NO_REVIEWS.to_string());
        return;
    }
    for (i, review) in reviews.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        let mut header = review.author.clone();
        if let Some(rating) = review.rating {
            header.push_str("  ");
            header.push_str(&stars(rating));
        }
        if let Some(when) = &review.relative_time {
            header.push_str("  ");
            header.push_str(when);
        } else if let Some(posted) = review.posted_at {
            header.push_str(&posted.format("  %Y-%m-%d").to_string());
        }
        lines.push(header);
        if !review.text.is_empty() {
            lines.push(format!("  {}", review.text));
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max.saturating_sub(3)).collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
#[path = "panel_test.rs"]
mod tests;
