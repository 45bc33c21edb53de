//! Interactive browser: a line-driven stand-in for the map page.
//!
//! Keyboard commands and finished detail lookups arrive on the same loop,
//! so the panel redraws as soon as a lookup lands even while the prompt is
//! waiting for input.

mod command;

use std::io::Write;
use std::sync::Arc;

use schoolmap_core::AppConfig;
use schoolmap_places::{PlacePrediction, SearchArea};
use schoolmap_view::{
    render_catalog, render_panel, CatalogState, DetailTab, PlacesResolver, SelectionSession,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::context;
use crate::search::{nth_prediction, render_predictions};

use command::{BrowseCommand, SelectTarget, HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Browser {
    catalog: CatalogState,
    resolver: Arc<PlacesResolver>,
    session: SelectionSession,
    area: SearchArea,
    tab: DetailTab,
    predictions: Vec<PlacePrediction>,
}

impl Browser {
    fn print_panel(&self) {
        println!("{}", render_panel(self.session.state(), self.tab));
    }

    async fn handle(&mut self, command: BrowseCommand) -> Flow {
        match command {
            BrowseCommand::Noop => {}
            BrowseCommand::List => println!("{}", render_catalog(&self.catalog)),
            BrowseCommand::Select(target) => self.select(&target),
            BrowseCommand::Search(query) => self.search(&query).await,
            BrowseCommand::Pick(n) => self.pick(n),
            BrowseCommand::Tab(tab) => {
                self.tab = tab;
                self.print_panel();
            }
            BrowseCommand::Close => {
                self.session.deselect();
                self.print_panel();
            }
            BrowseCommand::Help => println!("{HELP}"),
            BrowseCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn select(&mut self, target: &SelectTarget) {
        let id = match target {
            SelectTarget::Row(row) => {
                let markers = self.catalog.markers();
                match row.checked_sub(1).and_then(|i| markers.get(i)) {
                    Some(marker) => marker.id.clone(),
                    None => {
                        println!("No school in row {row}; type 'list' to see the table.");
                        return;
                    }
                }
            }
            SelectTarget::Id(id) => id.clone(),
        };

        let Some(record) = self.catalog.find(&id) else {
            println!("No school with id '{id}'.");
            return;
        };
        match self.session.select(record) {
            Ok(tag) => {
                tracing::debug!(%tag, "school selected");
                self.tab = DetailTab::Overview;
                self.print_panel();
            }
            Err(e) => println!("{e}"),
        }
    }

    async fn search(&mut self, query: &str) {
        match self.resolver.client().autocomplete(query, &self.area).await {
            Ok(predictions) => {
                println!("{}", render_predictions(query, &predictions));
                if !predictions.is_empty() {
                    println!("Type 'pick <n>' to open a result.");
                }
                self.predictions = predictions;
            }
            Err(e) => {
                tracing::warn!(error = %e, query, "place search failed");
                println!("Search failed: {e}");
            }
        }
    }

    fn pick(&mut self, n: usize) {
        let place_id = match nth_prediction(&self.predictions, n) {
            Ok(prediction) => prediction.place_id.clone(),
            Err(e) => {
                println!("{e}");
                return;
            }
        };
        match self.session.select_place(&place_id) {
            Ok(tag) => {
                tracing::debug!(%tag, "search result selected");
                self.tab = DetailTab::Overview;
                self.print_panel();
            }
            Err(e) => println!("{e}"),
        }
    }
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

/// Runs the browser until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if no places API key is configured or stdin/stdout
/// fail.
pub(crate) async fn run_browse(config: &AppConfig) -> anyhow::Result<()> {
    let resolver = context::places_resolver(config)?;
    let session = context::session(config, &resolver);

    println!("{}", render_catalog(&CatalogState::Loading));
    let catalog = context::load_catalog(config).await;
    println!("{}", render_catalog(&catalog));

    let mut browser = Browser {
        catalog,
        resolver,
        session,
        area: context::search_area(config),
        tab: DetailTab::Overview,
        predictions: Vec::new(),
    };

    if let Some(place_id) = &config.default_place_id {
        match browser.session.select_place(place_id) {
            Ok(tag) => tracing::info!(%tag, "opening default place"),
            Err(e) => tracing::warn!(error = %e, "default place not selectable"),
        }
    }
    browser.print_panel();
    println!("Type 'help' for commands.");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    println!();
                    break;
                };
                match BrowseCommand::parse(&line) {
                    Ok(command) => {
                        if browser.handle(command).await == Flow::Quit {
                            break;
                        }
                    }
                    Err(msg) => println!("{msg}"),
                }
                prompt()?;
            }
            Some(outcome) = browser.session.next_outcome() => {
                if browser.session.apply(outcome) {
                    println!();
                    browser.print_panel();
                    prompt()?;
                }
            }
        }
    }

    Ok(())
}
