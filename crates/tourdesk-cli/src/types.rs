use clap::ValueEnum;
use std::fmt;
use tourdesk_engine::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Sort criteria as accepted on the command line; maps onto the engine's
/// [`SortKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SortCriteria {
    PriceAsc,
    PriceDesc,
    DurationAsc,
    NameAsc,
}

impl SortCriteria {
    pub fn key(self) -> SortKey {
        match self {
            SortCriteria::PriceAsc => SortKey::PriceAsc,
            SortCriteria::PriceDesc => SortKey::PriceDesc,
            SortCriteria::DurationAsc => SortKey::DurationAsc,
            SortCriteria::NameAsc => SortKey::NameAsc,
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key().as_str())
    }
}
