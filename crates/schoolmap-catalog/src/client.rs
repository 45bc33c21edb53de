//! HTTP client for the school catalog's GraphQL endpoint.
//!
//! Wraps `reqwest` with GraphQL envelope handling. A non-empty `errors` array
//! in the response is surfaced as [`CatalogError::GraphQl`] even when the
//! HTTP status is 200.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use schoolmap_core::LocationRecord;

use crate::error::CatalogError;
use crate::types::{FindSchoolsData, GraphQlRequest, GraphQlResponse, FIND_SCHOOLS_QUERY};

/// Client for the catalog GraphQL API.
pub struct CatalogClient {
    client: Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Creates a client for the given GraphQL endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CatalogError::InvalidUrl`] if `endpoint`
    /// does not parse.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| CatalogError::InvalidUrl {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches every school in the catalog.
    ///
    /// A `null` list is treated as an empty catalog.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::GraphQl`] if the server reports errors.
    /// - [`CatalogError::MissingData`] if `data` is absent without errors.
    /// - [`CatalogError::Http`] on network failure or non-2xx HTTP status.
    /// - [`CatalogError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn fetch_locations(&self) -> Result<Vec<LocationRecord>, CatalogError> {
        let data: FindSchoolsData = self.execute(FIND_SCHOOLS_QUERY, "findSchools").await?;
        let records = data.find_schools.unwrap_or_default();
        tracing::info!(count = records.len(), "fetched school catalog");
        Ok(records)
    }

    /// Sends one GraphQL operation and unwraps the response envelope.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        field: &'static str,
    ) -> Result<T, CatalogError> {
        let request = GraphQlRequest {
            query,
            variables: serde_json::json!({}),
        };

        tracing::debug!(endpoint = %self.endpoint, field, "sending GraphQL query");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let envelope: GraphQlResponse<T> =
            serde_json::from_str(&body).map_err(|e| CatalogError::Deserialize {
                context: format!("{field} response"),
                source: e,
            })?;

        if !envelope.errors.is_empty() {
            let msg = envelope
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(field, error = %msg, "GraphQL query returned errors");
            return Err(CatalogError::GraphQl(msg));
        }

        envelope.data.ok_or(CatalogError::MissingData { field })
    }
}
