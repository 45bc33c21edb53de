//! Builds clients and sessions from [`AppConfig`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use schoolmap_catalog::CatalogClient;
use schoolmap_core::AppConfig;
use schoolmap_places::{PlacesClient, SearchArea};
use schoolmap_view::{CatalogState, PlaceDetailResolver, PlacesResolver, SelectionSession};

/// Fetches the catalog once. Failures become [`CatalogState::Failed`]
/// instead of an error so callers can render them.
pub(crate) async fn load_catalog(config: &AppConfig) -> CatalogState {
    let result = match CatalogClient::new(
        &config.graphql_url,
        config.request_timeout_secs,
        &config.user_agent,
    ) {
        Ok(client) => client.fetch_locations().await,
        Err(e) => Err(e),
    };
    CatalogState::from_result(result)
}

/// # Errors
///
/// Fails if no places API key is configured or the HTTP client cannot be
/// built.
pub(crate) fn places_resolver(config: &AppConfig) -> anyhow::Result<Arc<PlacesResolver>> {
    let api_key = config.google_api_key.as_deref().context(
        "SCHOOLMAP_GOOGLE_API_KEY is not set; place details and search need a places API key",
    )?;
    let client = PlacesClient::with_base_url(
        api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.places_base_url,
    )?;
    Ok(Arc::new(PlacesResolver::new(client, config.photo_max_height)))
}

pub(crate) fn session(config: &AppConfig, resolver: &Arc<PlacesResolver>) -> SelectionSession {
    let resolver: Arc<dyn PlaceDetailResolver> = Arc::clone(resolver) as _;
    SelectionSession::new(resolver, Duration::from_secs(config.lookup_timeout_secs))
}

pub(crate) fn search_area(config: &AppConfig) -> SearchArea {
    SearchArea {
        country: config.search_country.clone(),
        bounds: config.search_bounds,
    }
}
