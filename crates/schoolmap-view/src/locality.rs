//! City / state / country extraction from typed address components.

use schoolmap_places::AddressComponent;

pub const CITY_TYPE: &str = "locality";
pub const STATE_TYPE: &str = "administrative_area_level_1";
pub const COUNTRY_TYPE: &str = "country";

/// The coarse locality of a place. Empty strings mean "no matching
/// component", which is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locality {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Scans `components` once, taking the long name of the first component
/// tagged `locality`, `administrative_area_level_1` and `country`
/// respectively.
#[must_use]
pub fn derive_locality(components: &[AddressComponent]) -> Locality {
    let mut city = None;
    let mut state = None;
    let mut country = None;

    for component in components {
        if city.is_none() && component.has_type(CITY_TYPE) {
            city = Some(&component.long_name);
        }
        if state.is_none() && component.has_type(STATE_TYPE) {
            state = Some(&component.long_name);
        }
        if country.is_none() && component.has_type(COUNTRY_TYPE) {
            country = Some(&component.long_name);
        }
        if city.is_some() && state.is_some() && country.is_some() {
            break;
        }
    }

    Locality {
        city: city.cloned().unwrap_or_default(),
        state: state.cloned().unwrap_or_default(),
        country: country.cloned().unwrap_or_default(),
    }
}
