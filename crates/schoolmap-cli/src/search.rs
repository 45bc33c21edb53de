use schoolmap_core::AppConfig;
use schoolmap_places::PlacePrediction;
use schoolmap_view::{render_panel, DetailTab};

use crate::context;

/// Prints autocomplete predictions; with `pick`, also shows the chosen
/// place's panel.
///
/// # Errors
///
/// Returns an error if no places API key is configured, the search request
/// fails, or `pick` is out of range.
pub(crate) async fn run_search(
    config: &AppConfig,
    query: &str,
    pick: Option<usize>,
    tab: DetailTab,
) -> anyhow::Result<()> {
    let resolver = context::places_resolver(config)?;
    let predictions = resolver
        .client()
        .autocomplete(query, &context::search_area(config))
        .await?;

    println!("{}", render_predictions(query, &predictions));

    let Some(pick) = pick else {
        return Ok(());
    };
    let prediction = nth_prediction(&predictions, pick)?;

    let mut session = context::session(config, &resolver);
    session.select_place(&prediction.place_id)?;
    let state = session.settle().await;
    println!();
    println!("{}", render_panel(state, tab));
    Ok(())
}

pub(crate) fn render_predictions(query: &str, predictions: &[PlacePrediction]) -> String {
    if predictions.is_empty() {
        return format!("No places match '{query}'.");
    }
    predictions
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:>3}. {}", i + 1, p.description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 1-based lookup with a readable error.
pub(crate) fn nth_prediction(
    predictions: &[PlacePrediction],
    n: usize,
) -> anyhow::Result<&PlacePrediction> {
    n.checked_sub(1)
        .and_then(|i| predictions.get(i))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no prediction #{n}; choose between 1 and {}",
                predictions.len()
            )
        })
}
