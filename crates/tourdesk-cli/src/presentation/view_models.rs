//! View models: display-ready data contracts between presenters and
//! renderers. Only primitives and pre-formatted strings - renderers map
//! these to widgets or table cells without further decisions.

use serde::Serialize;

/// One tour card, fully formatted.
#[derive(Debug, Clone, Serialize)]
pub struct CardViewModel {
    pub id: u32,
    pub title: String,
    /// "Country, City"
    pub location: String,
    /// "7 days"
    pub duration: String,
    pub tour_type: String,
    pub hotel: String,
    /// "01.06.2024 - 08.06.2024"
    pub dates: String,
    /// "max 25 tourists"
    pub capacity: String,
    /// "45 000 ₽"
    pub price: String,
    pub description: String,
}

/// One dashboard stat tile.
#[derive(Debug, Clone, Serialize)]
pub struct StatTileViewModel {
    pub label: String,
    /// Target value the counter animates toward.
    pub value: i64,
    /// Appended after the number ("₽" on revenue, empty elsewhere).
    pub suffix: String,
}

/// The four dashboard tiles in display order.
#[derive(Debug, Clone, Serialize)]
pub struct StatsViewModel {
    pub tiles: Vec<StatTileViewModel>,
}
