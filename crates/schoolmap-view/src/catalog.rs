//! Catalog load state and the markers derived from it.

use schoolmap_core::{LatLng, LocationRecord};

/// Result of the one-off catalog fetch. A failed fetch is a state of its own
/// rather than a loading indicator that never clears.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(Vec<LocationRecord>),
    Failed(String),
}

/// A school plotted on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub title: String,
    pub institution_type: String,
    pub position: LatLng,
}

impl CatalogState {
    #[must_use]
    pub fn from_result<E: std::fmt::Display>(result: Result<Vec<LocationRecord>, E>) -> Self {
        match result {
            Ok(records) => CatalogState::Loaded(records),
            Err(e) => {
                tracing::error!(error = %e, "failed to load school catalog");
                CatalogState::Failed(e.to_string())
            }
        }
    }

    /// Loaded records; empty while loading or after a failure.
    #[must_use]
    pub fn records(&self) -> &[LocationRecord] {
        match self {
            CatalogState::Loaded(records) => records,
            CatalogState::Loading | CatalogState::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&LocationRecord> {
        self.records().iter().find(|r| r.id == id)
    }

    /// Markers for every record with usable coordinates, in catalog order.
    #[must_use]
    pub fn markers(&self) -> Vec<Marker> {
        self.records()
            .iter()
            .filter_map(|record| {
                let Some(position) = record.position() else {
                    tracing::warn!(
                        id = %record.id,
                        latitude = %record.latitude,
                        longitude = %record.longitude,
                        "skipping school with unusable coordinates"
                    );
                    return None;
                };
                Some(Marker {
                    id: record.id.clone(),
                    title: record.title.clone(),
                    institution_type: record.institution_type.clone(),
                    position,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, lat: &str, lng: &str) -> LocationRecord {
        LocationRecord {
            id: id.to_string(),
            title: format!("School {id}"),
            institution_type: "Primary".to_string(),
            address: String::new(),
            latitude: lat.to_string(),
            longitude: lng.to_string(),
            place_id: format!("P{id}"),
        }
    }

    #[test]
    fn markers_skip_unparseable_coordinates() {
        let state = CatalogState::Loaded(vec![
            record("1", "8.84", "7.87"),
            record("2", "", "7.87"),
            record("3", "8.85", "7.88"),
        ]);
        let markers = state.markers();
        let ids: Vec<_> = markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn failed_fetch_is_distinct_from_loading() {
        let state = CatalogState::from_result::<String>(Err("connection refused".to_string()));
        assert_eq!(state, CatalogState::Failed("connection refused".to_string()));
        assert_ne!(state, CatalogState::Loading);
        assert!(state.records().is_empty());
        assert!(state.markers().is_empty());
    }

    #[test]
    fn find_by_record_id() {
        let state = CatalogState::from_result::<String>(Ok(vec![record("7", "8.8", "7.8")]));
        assert_eq!(state.find("7").map(|r| r.place_id.as_str()), Some("P7"));
        assert!(state.find("8").is_none());
    }
}
