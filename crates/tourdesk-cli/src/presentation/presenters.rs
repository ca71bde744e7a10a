//! Pure functions from domain data to view models.

use tourdesk_types::{StatsSnapshot, TourRecord};

use super::formatters::{format_date_range, format_price};
use super::view_models::{CardViewModel, StatTileViewModel, StatsViewModel};

pub fn build_card(record: &TourRecord, currency_suffix: &str) -> CardViewModel {
    CardViewModel {
        id: record.id.0,
        title: record.name.clone(),
        location: format!("{}, {}", record.country, record.city),
        duration: format!("{} days", record.duration_days),
        tour_type: record.tour_type.label().to_string(),
        hotel: record.hotel.clone(),
        dates: format_date_range(record.start_date, record.end_date),
        capacity: format!("max {} tourists", record.max_tourists),
        price: format_price(record.price, currency_suffix),
        description: record.description.clone(),
    }
}

pub fn build_cards(records: &[&TourRecord], currency_suffix: &str) -> Vec<CardViewModel> {
    records
        .iter()
        .map(|record| build_card(record, currency_suffix))
        .collect()
}

/// Tiles in the order the dashboard shows them; only revenue carries the
/// currency suffix.
pub fn build_stats(snapshot: &StatsSnapshot, currency_suffix: &str) -> StatsViewModel {
    StatsViewModel {
        tiles: vec![
            StatTileViewModel {
                label: "Tours".to_string(),
                value: snapshot.total_tours as i64,
                suffix: String::new(),
            },
            StatTileViewModel {
                label: "Clients".to_string(),
                value: snapshot.total_clients as i64,
                suffix: String::new(),
            },
            StatTileViewModel {
                label: "Bookings".to_string(),
                value: snapshot.total_bookings as i64,
                suffix: String::new(),
            },
            StatTileViewModel {
                label: "Revenue".to_string(),
                value: snapshot.total_revenue,
                suffix: currency_suffix.to_string(),
            },
        ],
    }
}
