//! Channel contracts between the dashboard handler thread and the TUI
//! renderer thread.

use tourdesk_engine::FormMode;
use tourdesk_types::{NewTour, StatsSnapshot, TourId, TourRecord};

/// Handler → renderer: fresh data and operation outcomes. Outcome messages
/// are pre-formatted so the renderer never touches error types.
pub enum UiEvent {
    Tours(Vec<TourRecord>),
    Stats(StatsSnapshot),
    /// `Ok` closes the form modal; `Err` keeps it open for another try.
    SubmitFinished(Result<String, String>),
    DeleteFinished(Result<String, String>),
    LoadFailed(String),
}

/// Renderer → handler: user intent that needs the backend.
pub enum AppSignal {
    Refresh,
    Submit { mode: FormMode, tour: NewTour },
    Delete(TourId),
    Quit,
}
