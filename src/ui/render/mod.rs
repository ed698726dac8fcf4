mod footer;
mod form;
mod home;
mod log;

use self::log::log;
use super::*;
use crate::session::SessionView;
use crate::state::{State, View};
use footer::footer;
use form::form;
use home::home;
use ratatui::layout::{Constraint, Direction, Layout};

/// Specify the number of rows given to the log pane.
///
const LOG_HEIGHT: u16 = 8;

/// Render the view for the session with the log pane and footer beneath it.
///
pub fn render(frame: &mut Frame, state: &State, session: &SessionView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(LOG_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let view = state.current_view(session);
    match view {
        View::Home => home(frame, rows[0], state, session),
        View::Login => form(frame, rows[0], state, state.login(), session),
        View::Register => form(frame, rows[0], state, state.register(), session),
    }
    log(frame, rows[1]);
    footer(frame, rows[2], view, session);
}
