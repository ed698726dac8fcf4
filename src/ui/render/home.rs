use super::Frame;
use crate::session::SessionView;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Render the signed-in user's account details. While the user is being
/// reloaded the details loaded so far stay up above a status line.
///
pub fn home(frame: &mut Frame, size: Rect, state: &State, session: &SessionView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Home", styling::active_block_title_style()))
        .border_style(styling::active_block_border_style());
    frame.render_widget(block, size);

    let user = match session.user.as_ref().or(state.refreshing_user()) {
        Some(user) => user,
        None => return,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .margin(2)
        .split(size);

    let greeting = Line::from(Span::styled(
        format!("Welcome, {}!", user.full_name()),
        styling::active_field_style(),
    ));
    frame.render_widget(Paragraph::new(greeting), rows[0]);

    let activated = if user.activated { "yes" } else { "no" };
    let details = [
        ("Email", user.email.clone()),
        ("Account ID", user.id.to_string()),
        ("Activated", activated.to_string()),
        ("Member since", user.created_at.format(DATE_FORMAT).to_string()),
    ];
    let lines: Vec<Line> = details
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<14}", label), styling::muted_text_style()),
                Span::styled(value, styling::normal_text_style()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(Text::from(lines)), rows[1]);

    if session.loading {
        let status = Line::from(vec![
            Span::styled(spinner::frame(state), styling::active_field_style()),
            Span::styled(" Refreshing...", styling::muted_text_style()),
        ]);
        frame.render_widget(Paragraph::new(status), rows[2]);
    }
}
