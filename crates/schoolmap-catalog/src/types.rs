//! GraphQL request and response envelopes.

use serde::{Deserialize, Serialize};

use schoolmap_core::LocationRecord;

/// The catalog query. An empty filter object is always sent.
pub const FIND_SCHOOLS_QUERY: &str = "query { findSchools(query: {}) { _id title institutionType placeId address latitude longitude } }";

/// POST body for a GraphQL operation.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

/// Standard GraphQL response envelope: `{ "data": ..., "errors": [...] }`.
///
/// Both members are optional; a server may return partial data alongside
/// errors.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

impl std::fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            return f.write_str(&self.message);
        }
        let path = self
            .path
            .iter()
            .map(|p| match p {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{} (at {path})", self.message)
    }
}

/// `data` payload of [`FIND_SCHOOLS_QUERY`].
#[derive(Debug, Deserialize)]
pub struct FindSchoolsData {
    #[serde(rename = "findSchools")]
    pub find_schools: Option<Vec<LocationRecord>>,
}
