//! Static destination catalog: which cities belong to which country, and
//! which hotels the agency works with in each city.
//!
//! In the real product this data comes from the booking backend; the demo
//! ships it as a fixed table. Unknown keys resolve to an empty list.

/// Country → cities → hotels lookup used by the tour form cascade.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

const CITIES: &[(&str, &[&str])] = &[
    ("Russia", &["Moscow", "St. Petersburg", "Sochi", "Kazan"]),
    ("Turkey", &["Antalya", "Istanbul", "Izmir", "Bodrum"]),
    ("Egypt", &["Hurghada", "Sharm El Sheikh", "Cairo", "Luxor"]),
    ("Spain", &["Barcelona", "Madrid", "Valencia", "Seville"]),
    ("Italy", &["Rome", "Milan", "Venice", "Florence"]),
];

const HOTELS: &[(&str, &[&str])] = &[
    ("Moscow", &["Grand Hotel Moscow", "Metropol", "National"]),
    ("St. Petersburg", &["Hotel Europe", "Astoria", "Corinthia"]),
    (
        "Antalya",
        &["Antalya Resort", "Calista Luxury Resort", "Akra Hotel"],
    ),
    (
        "Hurghada",
        &[
            "Hurghada Palace",
            "Steigenberger Aqua Magic",
            "Alf Leila Wa Leila",
        ],
    ),
];

impl Catalog {
    pub fn new() -> Self {
        Catalog
    }

    /// All countries the agency sells tours to, in catalog order.
    pub fn countries(&self) -> Vec<&'static str> {
        CITIES.iter().map(|(country, _)| *country).collect()
    }

    /// Cities for a country; empty for a country the catalog does not know.
    pub fn cities(&self, country: &str) -> Vec<&'static str> {
        CITIES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(country.trim()))
            .map(|(_, cities)| cities.to_vec())
            .unwrap_or_default()
    }

    /// Hotels for a city; empty for a city without partner hotels.
    pub fn hotels(&self, city: &str) -> Vec<&'static str> {
        HOTELS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(city.trim()))
            .map(|(_, hotels)| hotels.to_vec())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_country_has_four_cities() {
        let catalog = Catalog::new();
        for country in catalog.countries() {
            assert_eq!(catalog.cities(country).len(), 4, "country {}", country);
        }
    }

    #[test]
    fn test_unknown_keys_resolve_to_empty() {
        let catalog = Catalog::new();
        assert!(catalog.cities("Atlantis").is_empty());
        assert!(catalog.hotels("El Dorado").is_empty());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = Catalog::new();
        assert_eq!(catalog.cities("russia").len(), 4);
        assert_eq!(catalog.hotels("moscow").len(), 3);
    }
}
