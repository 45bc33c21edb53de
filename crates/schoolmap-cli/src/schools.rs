use schoolmap_core::AppConfig;
use schoolmap_view::{render_catalog, CatalogState};

use crate::context;

/// Prints the marker table.
///
/// # Errors
///
/// Returns an error after printing the failure if the catalog could not be
/// loaded.
pub(crate) async fn run_schools(config: &AppConfig) -> anyhow::Result<()> {
    let catalog = context::load_catalog(config).await;
    println!("{}", render_catalog(&catalog));

    if let CatalogState::Failed(_) = catalog {
        anyhow::bail!("school catalog unavailable");
    }

    let skipped = catalog.records().len() - catalog.markers().len();
    if skipped > 0 {
        println!("({skipped} school(s) without usable coordinates not shown)");
    }
    Ok(())
}
