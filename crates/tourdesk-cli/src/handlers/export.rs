//! Export the tour list as CSV or JSON, to stdout or a file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tourdesk_runtime::AgencyBackend;

use crate::types::ExportFormat;

pub fn handle(backend: &AgencyBackend, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let tours = backend.list_tours()?;

    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    match format {
        ExportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for tour in &tours {
                csv_writer.serialize(tour)?;
            }
            csv_writer.flush()?;
        }
        ExportFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, &tours)?;
            writeln!(writer)?;
        }
    }

    if let Some(path) = output {
        eprintln!("Exported {} tours to {}", tours.len(), path.display());
    }

    Ok(())
}
