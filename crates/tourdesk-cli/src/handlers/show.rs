use anyhow::Result;
use tourdesk_runtime::{AgencyBackend, Config};
use tourdesk_types::TourId;

use crate::presentation::{console, presenters};
use crate::types::OutputFormat;

pub fn handle(
    backend: &AgencyBackend,
    config: &Config,
    id: u32,
    format: OutputFormat,
) -> Result<()> {
    let record = backend.get_tour(TourId(id))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Plain => {
            let card = presenters::build_card(&record, &config.currency_suffix);
            console::print_tour_detail(&card);
        }
    }

    Ok(())
}
