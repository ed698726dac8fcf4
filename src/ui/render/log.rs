use super::Frame;
use crate::logger;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::{Block, Borders}};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Render the most recent log entries that fit.
///
pub fn log(frame: &mut Frame, size: Rect) {
    logger::collect();
    let block = Block::default()
        .title("Log")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style());

    let widget = TuiLoggerWidget::default()
        .block(block)
        .output_separator(' ')
        .output_timestamp(Some(TIMESTAMP_FORMAT.to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style_error(styling::field_error_style())
        .style_warn(styling::warning_text_style())
        .style_info(styling::normal_text_style())
        .style_debug(styling::muted_text_style())
        .style_trace(styling::muted_text_style());
    frame.render_widget(widget, size);
}
