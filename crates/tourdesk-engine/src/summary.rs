//! Small pure helpers for the dashboard overview.

use tourdesk_types::TourRecord;

/// The `n` most recently added tours (highest ids first), for the
/// "recent tours" strip on the dashboard.
pub fn recent_tours(records: &[TourRecord], n: usize) -> Vec<TourRecord> {
    let mut sorted: Vec<TourRecord> = records.to_vec();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tourdesk_types::{TourId, TourType};

    fn tour(id: u32) -> TourRecord {
        TourRecord {
            id: TourId(id),
            name: format!("Tour {}", id),
            country: "Spain".to_string(),
            city: "Barcelona".to_string(),
            duration_days: 5,
            price: 30000,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            tour_type: TourType::Excursion,
            hotel: "Hotel".to_string(),
            max_tourists: 10,
            description: String::new(),
        }
    }

    #[test]
    fn test_recent_takes_highest_ids_first() {
        let records = vec![tour(1), tour(4), tour(2), tour(3)];
        let recent = recent_tours(&records, 3);
        let ids: Vec<u32> = recent.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![4, 3, 2]);
    }

    #[test]
    fn test_recent_handles_short_lists() {
        let records = vec![tour(1)];
        assert_eq!(recent_tours(&records, 3).len(), 1);
        assert!(recent_tours(&[], 3).is_empty());
    }
}
