use anyhow::Result;
use tourdesk_engine::{ListController, TypeFilter};
use tourdesk_runtime::{AgencyBackend, Config};

use crate::presentation::{console, presenters};
use crate::types::{OutputFormat, SortCriteria};

#[allow(clippy::too_many_arguments)]
pub fn handle(
    backend: &AgencyBackend,
    config: &Config,
    search: Option<&str>,
    tour_type: Option<&str>,
    sort: Option<SortCriteria>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let mut controller = ListController::new();
    controller.set_records(backend.list_tours()?);

    if let Some(query) = search {
        controller.set_query(query);
    }
    if let Some(filter) = tour_type {
        controller.set_filter(TypeFilter::parse(filter));
    }
    controller.apply_sort(sort.map(|s| s.key()));

    let total = controller.total_len();
    let mut visible = controller.visible();
    if let Some(limit) = limit {
        visible.truncate(limit);
    }

    match format {
        OutputFormat::Json => {
            let records: Vec<_> = visible.into_iter().cloned().collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Plain => {
            let cards = presenters::build_cards(&visible, &config.currency_suffix);
            console::print_tour_table(&cards, total);
        }
    }

    Ok(())
}
