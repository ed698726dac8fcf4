use ratatui::style::{Color, Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for the field being edited.
///
pub fn active_field_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Return the style for placeholders and secondary text.
///
pub fn muted_text_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Return the style for field validation messages.
///
pub fn field_error_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Return the style for warnings in the log pane.
///
pub fn warning_text_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Return the style for failure banners.
///
pub fn banner_error_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the footer mode indicator.
///
pub fn footer_mode_style(active: bool) -> Style {
    let background = if active { Color::Green } else { Color::Blue };
    Style::default()
        .fg(Color::Black)
        .bg(background)
        .add_modifier(Modifier::BOLD)
}
