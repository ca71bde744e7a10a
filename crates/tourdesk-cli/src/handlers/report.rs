use anyhow::Result;
use chrono::Local;
use tourdesk_engine::recent_tours;
use tourdesk_runtime::{AgencyBackend, Config};

use crate::presentation::{console, presenters};

/// Printable overview: stats, recently added tours, and the full table.
pub fn handle(backend: &AgencyBackend, config: &Config) -> Result<()> {
    let tours = backend.list_tours()?;
    let snapshot = backend.stats()?;

    let stats = presenters::build_stats(&snapshot, &config.currency_suffix);

    let recent = recent_tours(&tours, config.recent_tours);
    let recent_refs: Vec<_> = recent.iter().collect();
    let recent_cards = presenters::build_cards(&recent_refs, &config.currency_suffix);

    let all_refs: Vec<_> = tours.iter().collect();
    let all_cards = presenters::build_cards(&all_refs, &config.currency_suffix);

    let generated_on = Local::now().format("%d.%m.%Y %H:%M").to_string();
    console::print_report(&stats, &recent_cards, &all_cards, &generated_on);

    Ok(())
}
