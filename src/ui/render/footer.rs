use super::Frame;
use crate::session::SessionView;
use crate::state::View;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode indicator and key hints for the view.
///
fn controls(view: View) -> (&'static str, &'static str) {
    match view {
        View::Home => ("HOME:", " r: refresh, l: sign out, q: quit"),
        View::Login => (
            "SIGN IN:",
            " Tab/↑↓: navigate fields, Enter: submit, F2: create account, Esc: quit",
        ),
        View::Register => (
            "REGISTER:",
            " Tab/↑↓: navigate fields, Enter: submit, F2: sign in, Esc: quit",
        ),
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, view: View, session: &SessionView) {
    let (mode, hints) = controls(view);
    let controls_content = Line::from(vec![
        Span::styled(mode, styling::footer_mode_style(view == View::Home)),
        Span::styled(hints, styling::normal_text_style()),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let (status, status_style) = match session.reportable_error() {
        Some(failure) => (
            format!("{}: {} ", session.label(), failure),
            styling::field_error_style(),
        ),
        None => (format!("{} ", session.label()), styling::muted_text_style()),
    };
    let right_content = Line::from(vec![
        Span::styled(status, status_style),
        Span::styled(
            format!(" {}", env!("CARGO_PKG_VERSION")),
            styling::normal_text_style(),
        ),
    ]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
