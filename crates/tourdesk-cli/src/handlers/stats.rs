use anyhow::Result;
use tourdesk_runtime::{AgencyBackend, Config};

use crate::presentation::{console, presenters};
use crate::types::OutputFormat;

pub fn handle(backend: &AgencyBackend, config: &Config, format: OutputFormat) -> Result<()> {
    let snapshot = backend.stats()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Plain => {
            let stats = presenters::build_stats(&snapshot, &config.currency_suffix);
            console::print_stats(&stats);
        }
    }

    Ok(())
}
