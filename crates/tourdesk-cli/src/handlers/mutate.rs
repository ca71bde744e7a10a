//! Create, replace, and delete tours through the mock backend.
//!
//! Drafts built from flags go through the same validation the dashboard
//! form uses, so the two surfaces reject exactly the same input.

use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
use tourdesk_engine::validate_draft;
use tourdesk_runtime::{AgencyBackend, Config};
use tourdesk_types::{TourDraft, TourId};

use crate::presentation::formatters::format_price;
use crate::types::OutputFormat;

/// Raw field values from the command line; `None` means "not provided".
pub struct DraftFlags {
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub hotel: Option<String>,
    pub tour_type: Option<String>,
    pub duration: Option<String>,
    pub price: Option<String>,
    pub max_tourists: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

impl DraftFlags {
    fn into_draft(self) -> TourDraft {
        TourDraft {
            name: self.name.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            hotel: self.hotel.unwrap_or_default(),
            tour_type: self.tour_type.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            max_tourists: self.max_tourists.unwrap_or_default(),
            start_date: self.start_date.unwrap_or_default(),
            end_date: self.end_date.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        }
    }

    /// Overlay the provided flags on a draft taken from an existing record.
    fn over(self, mut base: TourDraft) -> TourDraft {
        if let Some(v) = self.name {
            base.name = v;
        }
        if let Some(v) = self.country {
            base.country = v;
        }
        if let Some(v) = self.city {
            base.city = v;
        }
        if let Some(v) = self.hotel {
            base.hotel = v;
        }
        if let Some(v) = self.tour_type {
            base.tour_type = v;
        }
        if let Some(v) = self.duration {
            base.duration = v;
        }
        if let Some(v) = self.price {
            base.price = v;
        }
        if let Some(v) = self.max_tourists {
            base.max_tourists = v;
        }
        if let Some(v) = self.start_date {
            base.start_date = v;
        }
        if let Some(v) = self.end_date {
            base.end_date = v;
        }
        if let Some(v) = self.description {
            base.description = v;
        }
        base
    }
}

pub fn handle_add(
    backend: &AgencyBackend,
    config: &Config,
    flags: DraftFlags,
    format: OutputFormat,
) -> Result<()> {
    let draft = flags.into_draft();
    let tour = validate_draft(&draft).map_err(report_validation_errors)?;

    let record = backend.create_tour(tour)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Plain => println!(
            "{} tour #{} {} ({})",
            "Added".green().bold(),
            record.id,
            record.name.bold(),
            format_price(record.price, &config.currency_suffix),
        ),
    }

    Ok(())
}

pub fn handle_update(
    backend: &AgencyBackend,
    config: &Config,
    id: u32,
    flags: DraftFlags,
    format: OutputFormat,
) -> Result<()> {
    let existing = backend.get_tour(TourId(id))?;
    let draft = flags.over(TourDraft::from_record(&existing));

    let tour = validate_draft(&draft).map_err(report_validation_errors)?;

    let record = backend.update_tour(TourId(id), tour)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Plain => println!(
            "{} tour #{} {} ({})",
            "Updated".green().bold(),
            record.id,
            record.name.bold(),
            format_price(record.price, &config.currency_suffix),
        ),
    }

    Ok(())
}

pub fn handle_delete(backend: &AgencyBackend, id: u32, yes: bool) -> Result<()> {
    let record = backend.get_tour(TourId(id))?;

    if !yes {
        if !std::io::stdin().is_terminal() {
            bail!("refusing to delete without --yes in a non-interactive session");
        }
        print!("Delete tour #{} \"{}\"? [y/N] ", record.id, record.name);
        std::io::stdout().flush()?;

        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let removed = backend.delete_tour(TourId(id))?;
    println!(
        "{} tour #{} {}",
        "Deleted".red().bold(),
        removed.id,
        removed.name.bold()
    );

    Ok(())
}

fn report_validation_errors(errors: Vec<tourdesk_engine::FieldError>) -> anyhow::Error {
    eprintln!("{}", "Please fill in all required fields correctly:".yellow());
    for error in &errors {
        eprintln!("  - {}", error);
    }
    anyhow::anyhow!("validation failed ({} field(s))", errors.len())
}
