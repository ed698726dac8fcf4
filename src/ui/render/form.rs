use super::Frame;
use crate::pages::{Page, PageField};
use crate::session::SessionView;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const FIELD_HEIGHT: u16 = 3;
const FORM_WIDTH: u16 = 60;
const PLACEHOLDER: &str = "Enter value...";
const SECRET_MASK: &str = "•";

/// Render a form page: a banner row, each field with its validation message
/// beneath it, and a status row.
///
pub fn form<F: PageField>(
    frame: &mut Frame,
    size: Rect,
    state: &State,
    page: &Page<F>,
    session: &SessionView,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style())
        .title(Span::styled(
            page.title(),
            styling::active_block_title_style(),
        ));
    let inner = centered_column(FORM_WIDTH, block.inner(size));
    frame.render_widget(block, size);

    let mut constraints = vec![Constraint::Length(1)];
    for _ in F::ALL {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    if let Some(banner) = page.banner() {
        let banner = Line::from(Span::styled(
            format!(" {} ", banner),
            styling::banner_error_style(),
        ));
        frame.render_widget(Paragraph::new(banner), rows[0]);
    }

    for (index, field) in F::ALL.iter().enumerate() {
        let row = 1 + index * 2;
        render_field(frame, rows[row], page, *field);
        if let Some(message) = page.form().error(*field) {
            let message = Line::from(Span::styled(
                message.to_string(),
                styling::field_error_style(),
            ));
            frame.render_widget(Paragraph::new(message), rows[row + 1]);
        }
    }

    let status_row = rows[1 + F::ALL.len() * 2];
    let status = if page.is_submitting() {
        Some("Submitting...")
    } else if session.loading {
        Some("Checking session...")
    } else {
        None
    };
    if let Some(label) = status {
        let line = Line::from(vec![
            Span::styled(spinner::frame(state), styling::active_field_style()),
            Span::styled(format!(" {}", label), styling::muted_text_style()),
        ]);
        frame.render_widget(Paragraph::new(line), status_row);
    }
}

fn render_field<F: PageField>(frame: &mut Frame, size: Rect, page: &Page<F>, field: F) {
    let is_selected = page.focus() == field;
    let border_style = if page.form().error(field).is_some() {
        styling::field_error_style()
    } else if is_selected {
        styling::active_block_border_style()
    } else {
        styling::normal_block_border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(field.label())
        .border_style(border_style);

    let value = page.value(field);
    let display_value = if field.is_secret() {
        SECRET_MASK.repeat(value.chars().count())
    } else {
        value
    };

    let mut spans = if display_value.is_empty() && !is_selected {
        vec![Span::styled(PLACEHOLDER, styling::muted_text_style())]
    } else if is_selected {
        vec![Span::styled(display_value, styling::active_field_style())]
    } else {
        vec![Span::styled(display_value, styling::normal_text_style())]
    };
    if is_selected {
        // Cursor
        spans.push(Span::styled("█", styling::active_block_border_style()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), size);
}

fn centered_column(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    Rect {
        x: r.x + (r.width - width) / 2,
        width,
        ..r
    }
}
