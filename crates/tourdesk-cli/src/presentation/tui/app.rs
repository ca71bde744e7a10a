//! Renderer-side state: the list controller, animated stat counters,
//! modals, toasts, and key handling.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::TableState;

use tourdesk_engine::{
    CounterTween, Field, FormPhase, ListController, SortKey, TourForm, TypeFilter,
};
use tourdesk_types::{Catalog, StatsSnapshot, TourRecord};

use super::tui_event::{AppSignal, UiEvent};
use crate::presentation::presenters;

const TOAST_TTL: Duration = Duration::from_secs(4);
const MAX_TOASTS: usize = 3;

/// Type filter cycle for the `f` key.
const FILTERS: [&str; 3] = ["all", "beach", "excursion"];

/// Sort cycle for the `s` key; `None` is "backend order".
const SORTS: [Option<SortKey>; 5] = [
    None,
    Some(SortKey::PriceAsc),
    Some(SortKey::PriceDesc),
    Some(SortKey::DurationAsc),
    Some(SortKey::NameAsc),
];

/// Display settings the renderer needs from the config.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub currency_suffix: String,
    pub animation_window: Duration,
}

/// One stat counter mid-flight.
pub(crate) struct AnimatedCounter {
    tween: CounterTween,
    started: Instant,
    displayed: i64,
}

impl AnimatedCounter {
    fn settled(value: i64) -> Self {
        AnimatedCounter {
            tween: CounterTween::settled(value),
            started: Instant::now(),
            displayed: value,
        }
    }

    /// Animate from whatever is currently displayed toward `target`.
    fn retarget(&mut self, target: i64, window: Duration) {
        self.tween = CounterTween::new(self.displayed, target, window);
        self.started = Instant::now();
    }

    fn on_tick(&mut self) {
        self.displayed = self.tween.sample(self.started.elapsed());
    }

    pub(crate) fn displayed(&self) -> i64 {
        self.displayed
    }
}

pub(crate) struct StatTile {
    pub label: String,
    pub suffix: String,
    pub counter: AnimatedCounter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastLevel {
    Success,
    Warning,
    Error,
}

pub(crate) struct Toast {
    pub message: String,
    pub level: ToastLevel,
    born: Instant,
}

/// Form modal state: the engine form plus which field has focus.
pub(crate) struct FormEditor {
    pub form: TourForm,
    pub focus: usize,
}

enum FormOutcome {
    Stay,
    Close,
    Submit(tourdesk_types::NewTour),
    Warn(String),
}

impl FormEditor {
    fn field(&self) -> Field {
        Field::all()[self.focus]
    }

    fn is_select(field: Field) -> bool {
        matches!(
            field,
            Field::Country | Field::City | Field::Hotel | Field::TourType
        )
    }

    fn handle_key(&mut self, catalog: &Catalog, key: KeyEvent) -> FormOutcome {
        if self.form.phase() == FormPhase::Submitting {
            // The backend round-trip owns the form until it reports back.
            return FormOutcome::Stay;
        }

        let field_count = Field::all().len();
        match key.code {
            KeyCode::Esc => return FormOutcome::Close,
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % field_count,
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + field_count - 1) % field_count;
            }
            KeyCode::Enter => {
                if let Some(tour) = self.form.validate() {
                    self.form.begin_submit();
                    return FormOutcome::Submit(tour);
                }
                return FormOutcome::Warn(
                    "Please fill in all required fields correctly".to_string(),
                );
            }
            KeyCode::Left => self.cycle_select(catalog, false),
            KeyCode::Right => self.cycle_select(catalog, true),
            KeyCode::Backspace => {
                let field = self.field();
                if !Self::is_select(field) {
                    let mut value = self.form.value(field).to_string();
                    value.pop();
                    self.form.set_text(field, value);
                }
            }
            KeyCode::Char(c) => {
                let field = self.field();
                if !Self::is_select(field) {
                    let mut value = self.form.value(field).to_string();
                    value.push(c);
                    self.form.set_text(field, value);
                }
            }
            _ => {}
        }
        FormOutcome::Stay
    }

    /// Step a select field through its options; dependent fields follow the
    /// cascade rules in the engine.
    fn cycle_select(&mut self, catalog: &Catalog, forward: bool) {
        let field = self.field();
        let options: Vec<String> = match field {
            Field::Country => catalog.countries().iter().map(|s| s.to_string()).collect(),
            Field::City => self.form.city_options().to_vec(),
            Field::Hotel => self.form.hotel_options().to_vec(),
            Field::TourType => vec!["Beach holiday".to_string(), "Excursion tour".to_string()],
            _ => return,
        };
        if options.is_empty() {
            return;
        }

        let current = self.form.value(field);
        let position = options.iter().position(|option| option == current);
        let next = match (position, forward) {
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
            (None, _) => 0,
        };
        let choice = options[next].clone();

        match field {
            Field::Country => self.form.select_country(catalog, &choice),
            Field::City => self.form.select_city(catalog, &choice),
            Field::Hotel => self.form.select_hotel(&choice),
            Field::TourType => self.form.set_text(Field::TourType, choice),
            _ => {}
        }
    }
}

pub(crate) enum Modal {
    None,
    Detail(TourRecord),
    ConfirmDelete(TourRecord),
    Form(Box<FormEditor>),
}

pub(crate) struct AppState {
    pub view: ViewConfig,
    pub catalog: Catalog,
    pub controller: ListController,
    pub tiles: Vec<StatTile>,
    pub selected: usize,
    pub table_state: TableState,
    pub search_active: bool,
    pub search_buffer: String,
    pub filter_idx: usize,
    pub sort_idx: usize,
    pub modal: Modal,
    pub toasts: VecDeque<Toast>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(view: ViewConfig) -> Self {
        AppState {
            view,
            catalog: Catalog::new(),
            controller: ListController::new(),
            tiles: Vec::new(),
            selected: 0,
            table_state: TableState::default(),
            search_active: false,
            search_buffer: String::new(),
            filter_idx: 0,
            sort_idx: 0,
            modal: Modal::None,
            toasts: VecDeque::new(),
            should_quit: false,
        }
    }

    pub fn on_tick(&mut self) {
        for tile in &mut self.tiles {
            tile.counter.on_tick();
        }
        while let Some(toast) = self.toasts.front() {
            if toast.born.elapsed() >= TOAST_TTL {
                self.toasts.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Tours(records) => {
                self.controller.set_records(records);
                self.clamp_selection();
            }
            UiEvent::Stats(snapshot) => self.apply_stats(snapshot),
            UiEvent::SubmitFinished(Ok(message)) => {
                if matches!(self.modal, Modal::Form(_)) {
                    self.modal = Modal::None;
                }
                self.toast(message, ToastLevel::Success);
            }
            UiEvent::SubmitFinished(Err(message)) => {
                if let Modal::Form(editor) = &mut self.modal {
                    editor.form.finish_submit();
                }
                self.toast(message, ToastLevel::Error);
            }
            UiEvent::DeleteFinished(Ok(message)) => self.toast(message, ToastLevel::Success),
            UiEvent::DeleteFinished(Err(message)) => self.toast(message, ToastLevel::Error),
            UiEvent::LoadFailed(message) => self.toast(message, ToastLevel::Error),
        }
    }

    /// Retarget every counter from its currently displayed value; on the
    /// first snapshot the counters run 0 → value.
    fn apply_stats(&mut self, snapshot: StatsSnapshot) {
        let stats = presenters::build_stats(&snapshot, &self.view.currency_suffix);
        if self.tiles.is_empty() {
            self.tiles = stats
                .tiles
                .iter()
                .map(|tile| StatTile {
                    label: tile.label.clone(),
                    suffix: tile.suffix.clone(),
                    counter: AnimatedCounter::settled(0),
                })
                .collect();
        }
        let window = self.view.animation_window;
        for (tile, target) in self.tiles.iter_mut().zip(stats.tiles.iter()) {
            tile.counter.retarget(target.value, window);
        }
    }

    pub fn toast(&mut self, message: String, level: ToastLevel) {
        self.toasts.push_back(Toast {
            message,
            level,
            born: Instant::now(),
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    pub fn latest_toast(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn filter_label(&self) -> &'static str {
        FILTERS[self.filter_idx]
    }

    pub fn sort_label(&self) -> &'static str {
        match SORTS[self.sort_idx] {
            None => "default",
            Some(key) => key.label(),
        }
    }

    pub fn visible_records(&self) -> Vec<TourRecord> {
        self.controller.visible().into_iter().cloned().collect()
    }

    fn selected_record(&self) -> Option<TourRecord> {
        self.controller
            .visible()
            .get(self.selected)
            .map(|record| (*record).clone())
    }

    fn clamp_selection(&mut self) {
        let len = self.controller.visible_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppSignal> {
        match std::mem::replace(&mut self.modal, Modal::None) {
            Modal::None => self.handle_key_main(key),
            Modal::Detail(record) => {
                if !matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('v')
                ) {
                    self.modal = Modal::Detail(record);
                }
                None
            }
            Modal::ConfirmDelete(record) => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => Some(AppSignal::Delete(record.id)),
                KeyCode::Char('n') | KeyCode::Esc => None,
                _ => {
                    self.modal = Modal::ConfirmDelete(record);
                    None
                }
            },
            Modal::Form(mut editor) => {
                let outcome = editor.handle_key(&self.catalog, key);
                match outcome {
                    FormOutcome::Close => None,
                    FormOutcome::Stay => {
                        self.modal = Modal::Form(editor);
                        None
                    }
                    FormOutcome::Warn(message) => {
                        self.toast(message, ToastLevel::Warning);
                        self.modal = Modal::Form(editor);
                        None
                    }
                    FormOutcome::Submit(tour) => {
                        let mode = editor.form.mode();
                        self.modal = Modal::Form(editor);
                        Some(AppSignal::Submit { mode, tour })
                    }
                }
            }
        }
    }

    fn handle_key_main(&mut self, key: KeyEvent) -> Option<AppSignal> {
        if self.search_active {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.search_active = false,
                KeyCode::Backspace => {
                    self.search_buffer.pop();
                    let query = self.search_buffer.clone();
                    self.controller.set_query(&query);
                    self.clamp_selection();
                }
                KeyCode::Char(c) => {
                    self.search_buffer.push(c);
                    let query = self.search_buffer.clone();
                    self.controller.set_query(&query);
                    self.clamp_selection();
                }
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('/') => self.search_active = true,
            KeyCode::Char('f') => {
                self.filter_idx = (self.filter_idx + 1) % FILTERS.len();
                self.controller
                    .set_filter(TypeFilter::parse(FILTERS[self.filter_idx]));
                self.clamp_selection();
            }
            KeyCode::Char('s') => {
                self.sort_idx = (self.sort_idx + 1) % SORTS.len();
                self.controller.apply_sort(SORTS[self.sort_idx]);
            }
            KeyCode::Char('r') => return Some(AppSignal::Refresh),
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.controller.visible_len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('a') => {
                self.modal = Modal::Form(Box::new(FormEditor {
                    form: TourForm::add(),
                    focus: 0,
                }));
            }
            KeyCode::Char('e') => {
                if let Some(record) = self.selected_record() {
                    self.modal = Modal::Form(Box::new(FormEditor {
                        form: TourForm::edit(&self.catalog, &record),
                        focus: 0,
                    }));
                }
            }
            KeyCode::Char('d') => {
                if let Some(record) = self.selected_record() {
                    self.modal = Modal::ConfirmDelete(record);
                }
            }
            KeyCode::Enter | KeyCode::Char('v') => {
                if let Some(record) = self.selected_record() {
                    self.modal = Modal::Detail(record);
                }
            }
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tourdesk_types::{StatsSnapshot, TourId};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_samples() -> AppState {
        let mut state = AppState::new(ViewConfig {
            currency_suffix: "₽".to_string(),
            animation_window: Duration::ZERO,
        });
        state.apply(UiEvent::Tours(sample_tours()));
        state
    }

    fn sample_tours() -> Vec<TourRecord> {
        use chrono::NaiveDate;
        use tourdesk_types::TourType;
        let date = |d: u32| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
        vec![
            TourRecord {
                id: TourId(1),
                name: "Antalya Beach Escape".to_string(),
                country: "Turkey".to_string(),
                city: "Antalya".to_string(),
                duration_days: 7,
                price: 45000,
                start_date: date(1),
                end_date: date(8),
                tour_type: TourType::Beach,
                hotel: "Antalya Resort".to_string(),
                max_tourists: 25,
                description: String::new(),
            },
            TourRecord {
                id: TourId(2),
                name: "Moscow City Tour".to_string(),
                country: "Russia".to_string(),
                city: "Moscow".to_string(),
                duration_days: 3,
                price: 25000,
                start_date: date(1),
                end_date: date(4),
                tour_type: TourType::Excursion,
                hotel: "Grand Hotel Moscow".to_string(),
                max_tourists: 15,
                description: String::new(),
            },
        ]
    }

    #[test]
    fn test_search_typing_updates_visibility() {
        let mut state = state_with_samples();
        state.handle_key(key(KeyCode::Char('/')));
        assert!(state.search_active);

        for c in "moscow".chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(state.controller.visible_len(), 1);

        state.handle_key(key(KeyCode::Esc));
        assert!(!state.search_active);
        // Leaving search mode keeps the query applied.
        assert_eq!(state.controller.visible_len(), 1);
    }

    #[test]
    fn test_filter_cycle_wraps_back_to_all() {
        let mut state = state_with_samples();
        state.handle_key(key(KeyCode::Char('f')));
        assert_eq!(state.filter_label(), "beach");
        assert_eq!(state.controller.visible_len(), 1);

        state.handle_key(key(KeyCode::Char('f')));
        state.handle_key(key(KeyCode::Char('f')));
        assert_eq!(state.filter_label(), "all");
        assert_eq!(state.controller.visible_len(), 2);
    }

    #[test]
    fn test_sort_cycle_applies_price_ascending() {
        let mut state = state_with_samples();
        state.handle_key(key(KeyCode::Char('s')));
        assert_eq!(state.sort_label(), "price ↑");
        assert_eq!(state.controller.records()[0].price, 25000);
    }

    #[test]
    fn test_first_stats_animate_from_zero() {
        let mut state = state_with_samples();
        state.apply(UiEvent::Stats(StatsSnapshot {
            total_tours: 24,
            total_clients: 156,
            total_bookings: 89,
            total_revenue: 2_845_000,
        }));
        state.on_tick();
        // Zero animation window in tests: counters land immediately.
        assert_eq!(state.tiles[0].counter.displayed(), 24);
        assert_eq!(state.tiles[3].counter.displayed(), 2_845_000);
    }

    #[test]
    fn test_delete_confirmation_emits_signal_on_yes() {
        let mut state = state_with_samples();
        state.handle_key(key(KeyCode::Char('d')));
        assert!(matches!(state.modal, Modal::ConfirmDelete(_)));

        let signal = state.handle_key(key(KeyCode::Char('y')));
        assert!(matches!(signal, Some(AppSignal::Delete(TourId(1)))));
        assert!(matches!(state.modal, Modal::None));
    }

    #[test]
    fn test_successful_submit_closes_form_and_toasts() {
        let mut state = state_with_samples();
        state.handle_key(key(KeyCode::Char('a')));
        assert!(matches!(state.modal, Modal::Form(_)));

        state.apply(UiEvent::SubmitFinished(Ok("Tour added".to_string())));
        assert!(matches!(state.modal, Modal::None));
        assert_eq!(state.latest_toast().unwrap().level, ToastLevel::Success);
    }

    #[test]
    fn test_failed_submit_keeps_form_open() {
        let mut state = state_with_samples();
        state.handle_key(key(KeyCode::Char('a')));
        state.apply(UiEvent::SubmitFinished(Err("backend down".to_string())));
        assert!(matches!(state.modal, Modal::Form(_)));
        assert_eq!(state.latest_toast().unwrap().level, ToastLevel::Error);
    }

    #[test]
    fn test_invalid_form_submit_warns_and_stays() {
        let mut state = state_with_samples();
        state.handle_key(key(KeyCode::Char('a')));
        let signal = state.handle_key(key(KeyCode::Enter));
        assert!(signal.is_none());
        assert!(matches!(state.modal, Modal::Form(_)));
        assert_eq!(state.latest_toast().unwrap().level, ToastLevel::Warning);
    }
}
