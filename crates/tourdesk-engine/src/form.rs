//! Tour form state machine: validation and the country→city→hotel cascade.
//!
//! The form holds an unvalidated [`TourDraft`] plus the option lists the
//! cascade derives from the catalog. Submission follows
//! `idle → validating → (invalid: idle) | (valid: submitting → idle)`;
//! the submitting leg is driven by whoever owns the backend call.
//!
//! Edit pre-fill runs the cascade synchronously in order (country → city
//! options → city → hotel options → hotel), so there is no timing window in
//! which a dependent field points at stale options.

use tourdesk_types::{Catalog, NewTour, TourDraft, TourId, TourRecord, TourType};

use chrono::NaiveDate;

/// Whether the form creates a new tour or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(TourId),
}

/// Submission phase. `Validating` is instantaneous and never observable
/// from outside `validate`, so the stored phase is one of these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Country,
    City,
    Hotel,
    TourType,
    Duration,
    Price,
    MaxTourists,
    StartDate,
    EndDate,
    Description,
}

impl Field {
    /// All fields in display order.
    pub fn all() -> [Field; 11] {
        [
            Field::Name,
            Field::Country,
            Field::City,
            Field::Hotel,
            Field::TourType,
            Field::Duration,
            Field::Price,
            Field::MaxTourists,
            Field::StartDate,
            Field::EndDate,
            Field::Description,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Country => "Country",
            Field::City => "City",
            Field::Hotel => "Hotel",
            Field::TourType => "Type",
            Field::Duration => "Duration (days)",
            Field::Price => "Price",
            Field::MaxTourists => "Max tourists",
            Field::StartDate => "Start date",
            Field::EndDate => "End date",
            Field::Description => "Description",
        }
    }
}

/// One validation failure, attributed to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

/// Validate a draft into a [`NewTour`].
///
/// Rules: required fields must be non-empty after trimming, price must be a
/// non-negative number, duration must be a whole number of days in
/// `[1, 30]`, dates must be `YYYY-MM-DD`. All failures are collected, not
/// just the first.
pub fn validate_draft(draft: &TourDraft) -> Result<NewTour, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = required(&draft.name, Field::Name, &mut errors);
    let country = required(&draft.country, Field::Country, &mut errors);
    let city = required(&draft.city, Field::City, &mut errors);
    let hotel = required(&draft.hotel, Field::Hotel, &mut errors);
    let description = draft.description.trim().to_string();

    let tour_type = match required(&draft.tour_type, Field::TourType, &mut errors) {
        Some(raw) => match TourType::parse(&raw) {
            Some(t) => Some(t),
            None => {
                errors.push(FieldError::new(Field::TourType, "unknown tour type"));
                None
            }
        },
        None => None,
    };

    let duration = parse_number::<u32>(&draft.duration, Field::Duration, &mut errors);
    if let Some(days) = duration {
        if !(1..=30).contains(&days) {
            errors.push(FieldError::new(
                Field::Duration,
                "must be between 1 and 30 days",
            ));
        }
    }

    let price = parse_number::<i64>(&draft.price, Field::Price, &mut errors);
    if let Some(amount) = price {
        if amount < 0 {
            errors.push(FieldError::new(Field::Price, "cannot be negative"));
        }
    }

    let max_tourists = parse_number::<u32>(&draft.max_tourists, Field::MaxTourists, &mut errors);
    if let Some(capacity) = max_tourists {
        if capacity == 0 {
            errors.push(FieldError::new(Field::MaxTourists, "must be at least 1"));
        }
    }

    let start_date = parse_date(&draft.start_date, Field::StartDate, &mut errors);
    let end_date = parse_date(&draft.end_date, Field::EndDate, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    // All Nones produced an error above, so the unwraps cannot fire.
    Ok(NewTour {
        name: name.unwrap(),
        country: country.unwrap(),
        city: city.unwrap(),
        duration_days: duration.unwrap(),
        price: price.unwrap(),
        start_date: start_date.unwrap(),
        end_date: end_date.unwrap(),
        tour_type: tour_type.unwrap(),
        hotel: hotel.unwrap(),
        max_tourists: max_tourists.unwrap(),
        description,
    })
}

fn required(value: &str, field: Field, errors: &mut Vec<FieldError>) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "required"));
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    field: Field,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let trimmed = required(value, field, errors)?;
    match trimmed.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.push(FieldError::new(field, "must be a number"));
            None
        }
    }
}

fn parse_date(value: &str, field: Field, errors: &mut Vec<FieldError>) -> Option<NaiveDate> {
    let trimmed = required(value, field, errors)?;
    match NaiveDate::parse_from_str(&trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, "expected YYYY-MM-DD"));
            None
        }
    }
}

/// Interactive form state: draft values, cascade options, phase, and the
/// errors from the last validation pass.
#[derive(Debug, Clone)]
pub struct TourForm {
    mode: FormMode,
    draft: TourDraft,
    city_options: Vec<String>,
    hotel_options: Vec<String>,
    errors: Vec<FieldError>,
    phase: FormPhase,
}

impl TourForm {
    /// Blank add form. City and hotel options stay empty until a country
    /// (then a city) is selected.
    pub fn add() -> Self {
        TourForm {
            mode: FormMode::Add,
            draft: TourDraft::default(),
            city_options: Vec::new(),
            hotel_options: Vec::new(),
            errors: Vec::new(),
            phase: FormPhase::Idle,
        }
    }

    /// Edit form pre-filled from a record. The cascade is resolved
    /// step-by-step so the pre-selected city and hotel are valid options.
    pub fn edit(catalog: &Catalog, record: &TourRecord) -> Self {
        let draft = TourDraft::from_record(record);
        let city_options: Vec<String> = catalog
            .cities(&draft.country)
            .into_iter()
            .map(str::to_string)
            .collect();
        let hotel_options: Vec<String> = catalog
            .hotels(&draft.city)
            .into_iter()
            .map(str::to_string)
            .collect();

        TourForm {
            mode: FormMode::Edit(record.id),
            draft,
            city_options,
            hotel_options,
            errors: Vec::new(),
            phase: FormPhase::Idle,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &TourDraft {
        &self.draft
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Current raw value of a field, for rendering and text editing.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.draft.name,
            Field::Country => &self.draft.country,
            Field::City => &self.draft.city,
            Field::Hotel => &self.draft.hotel,
            Field::TourType => &self.draft.tour_type,
            Field::Duration => &self.draft.duration,
            Field::Price => &self.draft.price,
            Field::MaxTourists => &self.draft.max_tourists,
            Field::StartDate => &self.draft.start_date,
            Field::EndDate => &self.draft.end_date,
            Field::Description => &self.draft.description,
        }
    }

    pub fn city_options(&self) -> &[String] {
        &self.city_options
    }

    pub fn hotel_options(&self) -> &[String] {
        &self.hotel_options
    }

    /// Selecting a country repopulates the city options and clears the
    /// dependent city and hotel selections.
    pub fn select_country(&mut self, catalog: &Catalog, country: &str) {
        self.draft.country = country.to_string();
        self.city_options = catalog
            .cities(country)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.draft.city.clear();
        self.draft.hotel.clear();
        self.hotel_options.clear();
    }

    /// Selecting a city repopulates the hotel options and clears the hotel.
    pub fn select_city(&mut self, catalog: &Catalog, city: &str) {
        self.draft.city = city.to_string();
        self.hotel_options = catalog
            .hotels(city)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.draft.hotel.clear();
    }

    pub fn select_hotel(&mut self, hotel: &str) {
        self.draft.hotel = hotel.to_string();
    }

    /// Set a free-text field. Country/city/hotel go through the select_*
    /// methods so the cascade stays consistent.
    pub fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.draft.name = value,
            Field::TourType => self.draft.tour_type = value,
            Field::Duration => self.draft.duration = value,
            Field::Price => self.draft.price = value,
            Field::MaxTourists => self.draft.max_tourists = value,
            Field::StartDate => self.draft.start_date = value,
            Field::EndDate => self.draft.end_date = value,
            Field::Description => self.draft.description = value,
            Field::Country | Field::City | Field::Hotel => {}
        }
    }

    /// Run validation. On success the form is ready to submit and the
    /// payload is returned; on failure the errors are retained for display
    /// and the form drops back to idle.
    pub fn validate(&mut self) -> Option<NewTour> {
        match validate_draft(&self.draft) {
            Ok(tour) => {
                self.errors.clear();
                Some(tour)
            }
            Err(errors) => {
                self.errors = errors;
                self.phase = FormPhase::Idle;
                None
            }
        }
    }

    pub fn begin_submit(&mut self) {
        self.phase = FormPhase::Submitting;
    }

    pub fn finish_submit(&mut self) {
        self.phase = FormPhase::Idle;
    }
}
