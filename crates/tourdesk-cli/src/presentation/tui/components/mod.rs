use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod cards;
pub(crate) mod footer;
pub(crate) mod modal;
pub(crate) mod stats;

pub(crate) use cards::CardsComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use modal::{render_confirm_modal, render_detail_modal, render_form_modal};
pub(crate) use stats::StatTilesComponent;
