//! Single-line strip of key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::component::Component;

const HINTS: &[(&str, &str)] = &[
    ("a", "artwork"),
    ("p", "palette"),
    ("space", "both"),
    ("1-6", "swatch"),
    ("←/→", "select"),
    ("r", "reroll"),
    ("c", "copy hex"),
    ("x", "reset"),
    ("q", "quit"),
];

#[derive(Debug, Default)]
pub struct HintBarComponent;

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let mut spans = Vec::with_capacity(HINTS.len() * 3);
        for (key, action) in HINTS {
            spans.push(Span::styled(*key, theme.accent_emphasis_style()));
            spans.push(Span::styled(format!(" {action}"), theme.text_muted_style()));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}
