//! Demo data the mock backend is seeded with.
//!
//! These are the agency's showcase tours plus the aggregate counters the
//! dashboard opens with. Aggregates other than the tour count are
//! booking-driven and stay fixed for the life of the process.

use chrono::NaiveDate;
use tourdesk_types::{TourId, TourRecord, TourType};

pub const SEED_CLIENTS: u64 = 156;
pub const SEED_BOOKINGS: u64 = 89;
pub const SEED_REVENUE: i64 = 2_845_000;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("sample dates are valid")
}

pub fn sample_tours() -> Vec<TourRecord> {
    vec![
        TourRecord {
            id: TourId(1),
            name: "Antalya Beach Escape".to_string(),
            country: "Turkey".to_string(),
            city: "Antalya".to_string(),
            duration_days: 7,
            price: 45000,
            start_date: date(2024, 6, 1),
            end_date: date(2024, 6, 8),
            tour_type: TourType::Beach,
            hotel: "Antalya Resort".to_string(),
            max_tourists: 25,
            description: "Unforgettable holiday on the Turkish coast".to_string(),
        },
        TourRecord {
            id: TourId(2),
            name: "Moscow City Tour".to_string(),
            country: "Russia".to_string(),
            city: "Moscow".to_string(),
            duration_days: 3,
            price: 25000,
            start_date: date(2024, 7, 1),
            end_date: date(2024, 7, 4),
            tour_type: TourType::Excursion,
            hotel: "Grand Hotel Moscow".to_string(),
            max_tourists: 15,
            description: "A guided walk through the capital".to_string(),
        },
        TourRecord {
            id: TourId(3),
            name: "Hurghada Sea Holiday".to_string(),
            country: "Egypt".to_string(),
            city: "Hurghada".to_string(),
            duration_days: 10,
            price: 65000,
            start_date: date(2024, 8, 1),
            end_date: date(2024, 8, 11),
            tour_type: TourType::Beach,
            hotel: "Hurghada Palace".to_string(),
            max_tourists: 20,
            description: "Red Sea holiday with excursions".to_string(),
        },
        TourRecord {
            id: TourId(4),
            name: "St. Petersburg Culture Week".to_string(),
            country: "Russia".to_string(),
            city: "St. Petersburg".to_string(),
            duration_days: 5,
            price: 35000,
            start_date: date(2024, 9, 1),
            end_date: date(2024, 9, 6),
            tour_type: TourType::Excursion,
            hotel: "Hotel Europe".to_string(),
            max_tourists: 18,
            description: "Deep dive into the northern capital".to_string(),
        },
    ]
}
