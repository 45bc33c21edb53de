//! Catalog records and the geographic value types shared across crates.

use serde::{Deserialize, Deserializer, Serialize};

/// A school as returned by the catalog's `findSchools` query.
///
/// Coordinates are kept as the backend's decimal strings; use
/// [`LocationRecord::position`] to get a parsed [`LatLng`].
///
/// Every field but `_id` may be missing or `null` and reads as empty, so one
/// incomplete school never fails the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(rename = "institutionType", default, deserialize_with = "null_as_empty")]
    pub institution_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub latitude: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub longitude: String,
    #[serde(rename = "placeId", default, deserialize_with = "null_as_empty")]
    pub place_id: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl LocationRecord {
    /// Parses the record's coordinates.
    ///
    /// Returns `None` if either value is not a finite decimal or lies outside
    /// the valid latitude/longitude range.
    #[must_use]
    pub fn position(&self) -> Option<LatLng> {
        LatLng::parse(&self.latitude, &self.longitude)
    }

    /// Whether the record carries a usable place identifier.
    #[must_use]
    pub fn has_place_id(&self) -> bool {
        !self.place_id.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        valid.then_some(Self { lat, lng })
    }

    #[must_use]
    pub fn parse(lat: &str, lng: &str) -> Option<Self> {
        let lat = lat.trim().parse::<f64>().ok()?;
        let lng = lng.trim().parse::<f64>().ok()?;
        Self::new(lat, lng)
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// A south-west / north-east rectangle used to restrict place search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Parses `"south,west,north,east"`.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason if the string does not contain four
    /// decimals or if south/west exceed north/east.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let parts = raw
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?;

        let &[south, west, north, east] = parts.as_slice() else {
            return Err(format!(
                "expected 4 comma-separated values (south,west,north,east), got {}",
                parts.len()
            ));
        };

        if south > north || west > east {
            return Err("south/west must not exceed north/east".to_string());
        }

        Ok(Self {
            south,
            west,
            north,
            east,
        })
    }

    /// Formats the rectangle the way the places autocomplete endpoint expects:
    /// `rectangle:south,west|north,east`.
    #[must_use]
    pub fn to_rectangle_param(&self) -> String {
        format!(
            "rectangle:{},{}|{},{}",
            self.south, self.west, self.north, self.east
        )
    }
}
