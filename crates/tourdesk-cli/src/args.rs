use crate::types::{ExportFormat, OutputFormat, SortCriteria};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tourdesk")]
#[command(about = "Manage and monitor travel agency tours from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml (defaults to the XDG location)")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Tour {
        #[command(subcommand)]
        command: TourCommand,
    },

    /// Aggregate agency statistics
    Stats,

    /// Export the tour list
    Export {
        #[arg(long, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Printable overview report
    Report,

    /// Live dashboard (TUI)
    Dashboard,
}

#[derive(Subcommand)]
pub enum TourCommand {
    List {
        #[arg(long, help = "Case-insensitive search over card text")]
        search: Option<String>,

        #[arg(long = "tour-type", help = "Type filter; 'all' matches everything")]
        tour_type: Option<String>,

        #[arg(long)]
        sort: Option<SortCriteria>,

        #[arg(long)]
        limit: Option<usize>,
    },

    Show {
        id: u32,
    },

    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        hotel: Option<String>,

        #[arg(long = "tour-type")]
        tour_type: Option<String>,

        #[arg(long, help = "Duration in days (1-30)")]
        duration: Option<String>,

        #[arg(long, help = "Price in whole currency units")]
        price: Option<String>,

        #[arg(long = "max-tourists")]
        max_tourists: Option<String>,

        #[arg(long = "start-date", help = "YYYY-MM-DD")]
        start_date: Option<String>,

        #[arg(long = "end-date", help = "YYYY-MM-DD")]
        end_date: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    Update {
        id: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        hotel: Option<String>,

        #[arg(long = "tour-type")]
        tour_type: Option<String>,

        #[arg(long)]
        duration: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long = "max-tourists")]
        max_tourists: Option<String>,

        #[arg(long = "start-date")]
        start_date: Option<String>,

        #[arg(long = "end-date")]
        end_date: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    Delete {
        id: u32,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
