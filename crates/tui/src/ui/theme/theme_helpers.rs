use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(
            t,
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Primary button style (filled accent background, dark label).
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, enabled: bool) -> Style {
    let ThemeRoles {
        accent_primary,
        background,
        surface_muted,
        text_muted,
        ..
    } = *theme.roles();
    if enabled {
        Style::default()
            .bg(accent_primary)
            .fg(background)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(surface_muted).fg(text_muted)
    }
}

/// Renders a filled, centered button label occupying the whole `area`.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, is_enabled: bool, theme: &T) {
    let style = button_primary_style(theme, is_enabled);
    let block = Block::default().borders(Borders::NONE).style(style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Vertically center the single-line label.
    let label_area = Rect {
        y: inner.y + inner.height.saturating_sub(1) / 2,
        height: inner.height.min(1),
        ..inner
    };
    let paragraph = Paragraph::new(Span::styled(label.to_string(), style)).alignment(Alignment::Center);
    frame.render_widget(paragraph, label_area);
}
