use schoolmap_core::AppConfig;
use schoolmap_view::{render_panel, CatalogState, DetailTab};

use crate::context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShowTarget {
    /// Catalog record id.
    Record(String),
    Place(String),
}

/// Selects one school, waits for its details, and prints the panel.
///
/// A failed lookup still prints the panel's "no details" text and succeeds.
///
/// # Errors
///
/// Returns an error if the catalog is unavailable, the record does not
/// exist or has no place identifier, or no places API key is configured.
pub(crate) async fn run_show(
    config: &AppConfig,
    target: ShowTarget,
    tab: DetailTab,
) -> anyhow::Result<()> {
    let resolver = context::places_resolver(config)?;
    let mut session = context::session(config, &resolver);

    match target {
        ShowTarget::Record(id) => {
            let catalog = context::load_catalog(config).await;
            if let CatalogState::Failed(reason) = &catalog {
                anyhow::bail!("could not load schools: {reason}");
            }
            let record = catalog.find(&id).ok_or_else(|| {
                anyhow::anyhow!("school '{id}' not found; run `schoolmap schools` to list ids")
            })?;
            session.select(record)?;
        }
        ShowTarget::Place(place_id) => {
            session.select_place(&place_id)?;
        }
    }

    let state = session.settle().await;
    println!("{}", render_panel(state, tab));
    Ok(())
}
