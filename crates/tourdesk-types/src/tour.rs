use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric tour identifier, assigned by the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TourId(pub u32);

impl fmt::Display for TourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of tour categories offered by the agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourType {
    Beach,
    Excursion,
}

impl TourType {
    /// Human-readable label used on cards and in filters.
    pub fn label(&self) -> &'static str {
        match self {
            TourType::Beach => "Beach holiday",
            TourType::Excursion => "Excursion tour",
        }
    }

    /// Case-insensitive parse accepting both the short name and the label.
    pub fn parse(s: &str) -> Option<TourType> {
        match s.trim().to_lowercase().as_str() {
            "beach" | "beach holiday" => Some(TourType::Beach),
            "excursion" | "excursion tour" => Some(TourType::Excursion),
            _ => None,
        }
    }
}

impl fmt::Display for TourType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One tour as stored by the (mock) agency backend.
///
/// The record list is the single source of truth for every view; nothing
/// downstream ever re-parses a formatted card back into data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourRecord {
    pub id: TourId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub duration_days: u32,
    /// Whole currency units; formatting (grouping, suffix) is a view concern.
    pub price: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub tour_type: TourType,
    pub hotel: String,
    pub max_tourists: u32,
    pub description: String,
}

/// Validated payload for creating or replacing a tour; the backend assigns
/// the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTour {
    pub name: String,
    pub country: String,
    pub city: String,
    pub duration_days: u32,
    pub price: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub tour_type: TourType,
    pub hotel: String,
    pub max_tourists: u32,
    pub description: String,
}

impl NewTour {
    pub fn into_record(self, id: TourId) -> TourRecord {
        TourRecord {
            id,
            name: self.name,
            country: self.country,
            city: self.city,
            duration_days: self.duration_days,
            price: self.price,
            start_date: self.start_date,
            end_date: self.end_date,
            tour_type: self.tour_type,
            hotel: self.hotel,
            max_tourists: self.max_tourists,
            description: self.description,
        }
    }
}

/// Unvalidated form payload, exactly as it arrives from a form or from CLI
/// flags. `tourdesk-engine::form` turns a draft into a [`NewTour`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourDraft {
    pub name: String,
    pub country: String,
    pub city: String,
    pub duration: String,
    pub price: String,
    pub start_date: String,
    pub end_date: String,
    pub tour_type: String,
    pub hotel: String,
    pub max_tourists: String,
    pub description: String,
}

impl TourDraft {
    /// Draft pre-filled from an existing record, for edit forms.
    pub fn from_record(record: &TourRecord) -> Self {
        TourDraft {
            name: record.name.clone(),
            country: record.country.clone(),
            city: record.city.clone(),
            duration: record.duration_days.to_string(),
            price: record.price.to_string(),
            start_date: record.start_date.format("%Y-%m-%d").to_string(),
            end_date: record.end_date.format("%Y-%m-%d").to_string(),
            tour_type: record.tour_type.label().to_string(),
            hotel: record.hotel.clone(),
            max_tourists: record.max_tourists.to_string(),
            description: record.description.clone(),
        }
    }
}

/// Aggregate counters shown on the dashboard; regenerated on every poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_tours: u64,
    pub total_clients: u64,
    pub total_bookings: u64,
    pub total_revenue: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_type_parse_accepts_label_and_short_name() {
        assert_eq!(TourType::parse("beach"), Some(TourType::Beach));
        assert_eq!(TourType::parse("Beach Holiday"), Some(TourType::Beach));
        assert_eq!(TourType::parse("EXCURSION"), Some(TourType::Excursion));
        assert_eq!(TourType::parse("excursion tour"), Some(TourType::Excursion));
        assert_eq!(TourType::parse("cruise"), None);
    }

    #[test]
    fn test_draft_round_trips_record_fields() {
        let record = TourRecord {
            id: TourId(7),
            name: "Moscow City Tour".to_string(),
            country: "Russia".to_string(),
            city: "Moscow".to_string(),
            duration_days: 3,
            price: 25000,
            start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            tour_type: TourType::Excursion,
            hotel: "Grand Hotel Moscow".to_string(),
            max_tourists: 15,
            description: "A guided walk through the capital".to_string(),
        };

        let draft = TourDraft::from_record(&record);
        assert_eq!(draft.name, "Moscow City Tour");
        assert_eq!(draft.duration, "3");
        assert_eq!(draft.start_date, "2024-07-01");
        assert_eq!(draft.tour_type, "Excursion tour");
    }
}
