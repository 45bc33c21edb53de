use thiserror::Error;

/// Errors returned by the catalog client.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network or TLS failure, or a non-2xx status from the endpoint.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-empty `errors` array.
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// The response carried neither `errors` nor the requested field.
    #[error("catalog response contained no data for {field}")]
    MissingData { field: &'static str },

    /// The endpoint URL could not be parsed.
    #[error("invalid catalog URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
