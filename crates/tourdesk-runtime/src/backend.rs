//! The mock agency backend.
//!
//! A thread-safe in-memory store behind a small client API. Reads return
//! immediately; mutations sleep the configured latency first, standing in
//! for the booking system's round-trip time. Callers that must not block
//! (the TUI renderer) run these calls on a worker thread.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::samples;
use crate::{Error, Result};
use tourdesk_types::{NewTour, StatsSnapshot, TourId, TourRecord};

struct Store {
    tours: Vec<TourRecord>,
    next_id: u32,
    clients: u64,
    bookings: u64,
    revenue: i64,
}

impl Store {
    fn position(&self, id: TourId) -> Result<usize> {
        self.tours
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::Domain(tourdesk_types::Error::TourNotFound(id)))
    }
}

/// Client handle to the mock backend. Cheap to clone; all clones share the
/// same store.
#[derive(Clone)]
pub struct AgencyBackend {
    store: Arc<Mutex<Store>>,
    mutation_latency: Duration,
}

impl AgencyBackend {
    /// Backend seeded with the demo tours and aggregate counters.
    pub fn seeded(mutation_latency: Duration) -> Self {
        let tours = samples::sample_tours();
        let next_id = tours.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        AgencyBackend {
            store: Arc::new(Mutex::new(Store {
                tours,
                next_id,
                clients: samples::SEED_CLIENTS,
                bookings: samples::SEED_BOOKINGS,
                revenue: samples::SEED_REVENUE,
            })),
            mutation_latency,
        }
    }

    fn simulate_round_trip(&self) {
        if !self.mutation_latency.is_zero() {
            std::thread::sleep(self.mutation_latency);
        }
    }

    pub fn list_tours(&self) -> Result<Vec<TourRecord>> {
        let store = self.store.lock().unwrap();
        debug!(count = store.tours.len(), "listing tours");
        Ok(store.tours.clone())
    }

    pub fn get_tour(&self, id: TourId) -> Result<TourRecord> {
        let store = self.store.lock().unwrap();
        let index = store.position(id).inspect_err(|_| {
            warn!(%id, "tour lookup failed");
        })?;
        Ok(store.tours[index].clone())
    }

    pub fn create_tour(&self, tour: NewTour) -> Result<TourRecord> {
        self.simulate_round_trip();
        let mut store = self.store.lock().unwrap();
        let id = TourId(store.next_id);
        store.next_id += 1;
        let record = tour.into_record(id);
        store.tours.push(record.clone());
        info!(%id, name = %record.name, "tour created");
        Ok(record)
    }

    pub fn update_tour(&self, id: TourId, tour: NewTour) -> Result<TourRecord> {
        self.simulate_round_trip();
        let mut store = self.store.lock().unwrap();
        let index = store.position(id).inspect_err(|_| {
            warn!(%id, "update of missing tour");
        })?;
        let record = tour.into_record(id);
        store.tours[index] = record.clone();
        info!(%id, "tour updated");
        Ok(record)
    }

    /// Remove a tour, returning the removed record.
    pub fn delete_tour(&self, id: TourId) -> Result<TourRecord> {
        self.simulate_round_trip();
        let mut store = self.store.lock().unwrap();
        let index = store.position(id).inspect_err(|_| {
            warn!(%id, "delete of missing tour");
        })?;
        let record = store.tours.remove(index);
        info!(%id, "tour deleted");
        Ok(record)
    }

    /// Fresh aggregate snapshot. The tour count tracks the store; the
    /// booking-driven counters are whatever the seed provided.
    pub fn stats(&self) -> Result<StatsSnapshot> {
        let store = self.store.lock().unwrap();
        Ok(StatsSnapshot {
            total_tours: store.tours.len() as u64,
            total_clients: store.clients,
            total_bookings: store.bookings,
            total_revenue: store.revenue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tourdesk_types::TourType;

    fn backend() -> AgencyBackend {
        AgencyBackend::seeded(Duration::ZERO)
    }

    fn new_tour(name: &str) -> NewTour {
        NewTour {
            name: name.to_string(),
            country: "Spain".to_string(),
            city: "Barcelona".to_string(),
            duration_days: 4,
            price: 52000,
            start_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 10, 5).unwrap(),
            tour_type: TourType::Excursion,
            hotel: "Casa Mila Suites".to_string(),
            max_tourists: 12,
            description: String::new(),
        }
    }

    #[test]
    fn test_seeded_backend_has_sample_tours() {
        let backend = backend();
        let tours = backend.list_tours().unwrap();
        assert_eq!(tours.len(), 4);
        assert_eq!(backend.stats().unwrap().total_tours, 4);
        assert_eq!(backend.stats().unwrap().total_clients, 156);
    }

    #[test]
    fn test_create_assigns_fresh_ids() {
        let backend = backend();
        let a = backend.create_tour(new_tour("Gaudi Walk")).unwrap();
        let b = backend.create_tour(new_tour("Tapas Crawl")).unwrap();
        assert_eq!(a.id, TourId(5));
        assert_eq!(b.id, TourId(6));
        assert_eq!(backend.stats().unwrap().total_tours, 6);
    }

    #[test]
    fn test_update_replaces_fields_in_place() {
        let backend = backend();
        let mut tour = new_tour("Renamed");
        tour.price = 99000;
        let updated = backend.update_tour(TourId(2), tour).unwrap();
        assert_eq!(updated.id, TourId(2));
        assert_eq!(updated.price, 99000);

        let fetched = backend.get_tour(TourId(2)).unwrap();
        assert_eq!(fetched.name, "Renamed");
    }

    #[test]
    fn test_delete_shrinks_store_and_stats() {
        let backend = backend();
        let removed = backend.delete_tour(TourId(1)).unwrap();
        assert_eq!(removed.name, "Antalya Beach Escape");
        assert_eq!(backend.stats().unwrap().total_tours, 3);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let backend = backend();
        for result in [
            backend.get_tour(TourId(99)).err(),
            backend.update_tour(TourId(99), new_tour("x")).err(),
            backend.delete_tour(TourId(99)).err(),
        ] {
            match result {
                Some(Error::Domain(tourdesk_types::Error::TourNotFound(id))) => {
                    assert_eq!(id, TourId(99));
                }
                other => panic!("expected TourNotFound, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_clones_share_the_store() {
        let backend = backend();
        let clone = backend.clone();
        clone.create_tour(new_tour("Shared")).unwrap();
        assert_eq!(backend.list_tours().unwrap().len(), 5);
    }
}
