use thiserror::Error;

/// Errors returned by the places client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure, or a non-2xx status from the service.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// `ZERO_RESULTS` / `NOT_FOUND`: the place id resolves to nothing.
    #[error("no place found for id {place_id}")]
    NotFound { place_id: String },

    /// Any other non-`OK` status in the response envelope.
    #[error("places API returned {status}: {message}")]
    Api { status: String, message: String },

    /// Rejected locally before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
