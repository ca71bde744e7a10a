//! List view controller: search, type filtering, and sorting over the typed
//! tour list.
//!
//! The controller owns the record order and a visibility projection.
//! Filtering hides cards without removing them, and sorting reorders every
//! card, hidden ones included. Comparisons run on the typed fields; no
//! rendered string is ever parsed back.

use serde::{Deserialize, Serialize};
use tourdesk_types::{TourRecord, TourType};

/// Sort criteria accepted by the list controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    DurationAsc,
    NameAsc,
}

impl SortKey {
    /// Parse a criterion string. Unknown criteria yield `None`, which the
    /// controller treats as "leave the order unchanged".
    pub fn parse(s: &str) -> Option<SortKey> {
        match s {
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "duration-asc" => Some(SortKey::DurationAsc),
            "name-asc" => Some(SortKey::NameAsc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::DurationAsc => "duration-asc",
            SortKey::NameAsc => "name-asc",
        }
    }

    /// Short label for toolbars.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price ↑",
            SortKey::PriceDesc => "price ↓",
            SortKey::DurationAsc => "duration ↑",
            SortKey::NameAsc => "name ↑",
        }
    }

    pub fn all() -> [SortKey; 4] {
        [
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::DurationAsc,
            SortKey::NameAsc,
        ]
    }
}

/// Type filter: `all` matches everything, anything else is a
/// case-insensitive substring match against the type label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Matching(String),
}

impl TypeFilter {
    pub fn parse(s: &str) -> TypeFilter {
        let needle = s.trim().to_lowercase();
        if needle.is_empty() || needle == "all" {
            TypeFilter::All
        } else {
            TypeFilter::Matching(needle)
        }
    }

    pub fn matches(&self, tour_type: TourType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Matching(needle) => tour_type.label().to_lowercase().contains(needle),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Matching(needle) => needle,
        }
    }
}

/// A record plus its computed visibility.
#[derive(Debug, Clone, Copy)]
pub struct ListEntry<'a> {
    pub record: &'a TourRecord,
    pub visible: bool,
}

/// Search, filter, and sort state over the current tour list.
#[derive(Debug, Clone, Default)]
pub struct ListController {
    records: Vec<TourRecord>,
    query: String,
    filter: TypeFilter,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record list (e.g. after a backend reload). Search and
    /// filter state survive the reload; the order is the backend order.
    pub fn set_records(&mut self, records: Vec<TourRecord>) {
        self.records = records;
    }

    pub fn records(&self) -> &[TourRecord] {
        &self.records
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_filter(&mut self, filter: TypeFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &TypeFilter {
        &self.filter
    }

    /// Reorder the list in place. `None` (an unrecognized criterion) leaves
    /// the current order untouched. Sorting is stable, so ties keep their
    /// relative order.
    pub fn apply_sort(&mut self, key: Option<SortKey>) {
        let Some(key) = key else { return };
        match key {
            SortKey::PriceAsc => self.records.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceDesc => self.records.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::DurationAsc => self
                .records
                .sort_by(|a, b| a.duration_days.cmp(&b.duration_days)),
            SortKey::NameAsc => self
                .records
                .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        }
    }

    /// Every record in current order, each with its visibility under the
    /// current query and type filter. Hidden cards stay in the list.
    pub fn entries(&self) -> Vec<ListEntry<'_>> {
        self.records
            .iter()
            .map(|record| ListEntry {
                record,
                visible: self.is_visible(record),
            })
            .collect()
    }

    /// Only the visible records, in current order.
    pub fn visible(&self) -> Vec<&TourRecord> {
        self.records
            .iter()
            .filter(|record| self.is_visible(record))
            .collect()
    }

    pub fn total_len(&self) -> usize {
        self.records.len()
    }

    pub fn visible_len(&self) -> usize {
        self.records.iter().filter(|r| self.is_visible(r)).count()
    }

    fn is_visible(&self, record: &TourRecord) -> bool {
        self.filter.matches(record.tour_type) && self.query_matches(record)
    }

    fn query_matches(&self, record: &TourRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        haystack(record).contains(&self.query)
    }
}

/// The searchable text of a card: title plus the detail lines, mirroring
/// what a user sees on the rendered card.
fn haystack(record: &TourRecord) -> String {
    format!(
        "{} {}, {} {} days {} {}",
        record.name, record.country, record.city, record.duration_days, record.tour_type, record.hotel
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tourdesk_types::TourId;

    fn tour(id: u32, name: &str, price: i64, days: u32, tour_type: TourType) -> TourRecord {
        TourRecord {
            id: TourId(id),
            name: name.to_string(),
            country: "Turkey".to_string(),
            city: "Antalya".to_string(),
            duration_days: days,
            price,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 8).unwrap(),
            tour_type,
            hotel: "Antalya Resort".to_string(),
            max_tourists: 20,
            description: String::new(),
        }
    }

    fn sample() -> Vec<TourRecord> {
        vec![
            tour(1, "Antalya Beach Escape", 45000, 7, TourType::Beach),
            tour(2, "Moscow City Tour", 25000, 3, TourType::Excursion),
            tour(3, "Hurghada Sea Holiday", 65000, 10, TourType::Beach),
        ]
    }

    fn controller() -> ListController {
        let mut controller = ListController::new();
        controller.set_records(sample());
        controller
    }

    #[test]
    fn test_sort_price_asc_orders_prices() {
        let mut controller = controller();
        controller.apply_sort(SortKey::parse("price-asc"));

        let prices: Vec<i64> = controller.records().iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![25000, 45000, 65000]);
    }

    #[test]
    fn test_sort_price_desc_reverses_asc_for_distinct_prices() {
        let mut asc = controller();
        asc.apply_sort(Some(SortKey::PriceAsc));
        let mut desc = controller();
        desc.apply_sort(Some(SortKey::PriceDesc));

        let asc_ids: Vec<_> = asc.records().iter().map(|t| t.id).collect();
        let mut desc_ids: Vec<_> = desc.records().iter().map(|t| t.id).collect();
        desc_ids.reverse();
        assert_eq!(asc_ids, desc_ids);
    }

    #[test]
    fn test_sort_duration_and_name() {
        let mut controller = controller();
        controller.apply_sort(Some(SortKey::DurationAsc));
        let days: Vec<u32> = controller.records().iter().map(|t| t.duration_days).collect();
        assert_eq!(days, vec![3, 7, 10]);

        controller.apply_sort(Some(SortKey::NameAsc));
        let names: Vec<&str> = controller
            .records()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Antalya Beach Escape", "Hurghada Sea Holiday", "Moscow City Tour"]
        );
    }

    #[test]
    fn test_unknown_sort_criterion_leaves_order_unchanged() {
        let mut controller = controller();
        controller.apply_sort(Some(SortKey::PriceDesc));
        let before: Vec<_> = controller.records().iter().map(|t| t.id).collect();

        assert_eq!(SortKey::parse("rating-desc"), None);
        controller.apply_sort(SortKey::parse("rating-desc"));

        let after: Vec<_> = controller.records().iter().map(|t| t.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_empty_query_shows_all_cards() {
        let mut controller = controller();
        controller.set_query("");
        assert_eq!(controller.visible_len(), 3);
    }

    #[test]
    fn test_missing_term_hides_all_cards() {
        let mut controller = controller();
        controller.set_query("zanzibar");
        assert_eq!(controller.visible_len(), 0);
        // Hidden, not removed.
        assert_eq!(controller.total_len(), 3);
    }

    #[test]
    fn test_search_matches_title_and_details_case_insensitively() {
        let mut controller = controller();
        controller.set_query("HURGHADA");
        assert_eq!(controller.visible_len(), 1);

        // "Antalya" appears in a title and in another card's city detail.
        controller.set_query("antalya");
        assert!(controller.visible_len() >= 1);

        controller.set_query("7 days");
        assert_eq!(controller.visible_len(), 1);
    }

    #[test]
    fn test_search_is_idempotent() {
        let mut controller = controller();
        controller.set_query("beach");
        let first = controller.visible_len();
        controller.set_query("beach");
        assert_eq!(controller.visible_len(), first);
    }

    #[test]
    fn test_filter_all_restores_full_visibility() {
        let mut controller = controller();
        controller.set_filter(TypeFilter::parse("excursion"));
        assert_eq!(controller.visible_len(), 1);

        controller.set_filter(TypeFilter::parse("all"));
        assert_eq!(controller.visible_len(), 3);
    }

    #[test]
    fn test_filter_matches_type_label_substring() {
        let mut controller = controller();
        controller.set_filter(TypeFilter::parse("Beach"));
        assert_eq!(controller.visible_len(), 2);
    }

    #[test]
    fn test_filter_and_query_compose() {
        let mut controller = controller();
        controller.set_filter(TypeFilter::parse("beach"));
        controller.set_query("hurghada");
        assert_eq!(controller.visible_len(), 1);
        assert_eq!(controller.visible()[0].id, TourId(3));
    }

    #[test]
    fn test_sort_reorders_hidden_cards_too() {
        let mut controller = controller();
        controller.set_query("nothing-matches");
        controller.apply_sort(Some(SortKey::PriceAsc));

        let entries = controller.entries();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| !e.visible));
        assert_eq!(entries[0].record.price, 25000);
    }
}
