//! GraphQL client for the school catalog.

pub mod client;
pub mod error;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use types::FIND_SCHOOLS_QUERY;
