//! Artwork and palette history panels, most recent first.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use artpal_util::truncate_to_width;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::swatch_color;

#[derive(Debug, Default)]
pub struct HistoryComponent;

impl HistoryComponent {
    fn render_artworks(frame: &mut Frame, rect: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let history = app.gallery.artwork_history();
        let title = format!(" Artwork History ({}) ", history.len());
        let block = th::block(theme, Some(&title), false);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        if history.is_empty() {
            frame.render_widget(Paragraph::new(Span::styled("Nothing yet", theme.text_muted_style())), inner);
            return;
        }

        let width = inner.width as usize;
        let lines = history
            .iter()
            .take(inner.height as usize)
            .map(|artwork| {
                let title = truncate_to_width(&artwork.title, width);
                let remaining = width.saturating_sub(title.width() + 3);
                let mut spans = vec![Span::styled(title, theme.text_primary_style())];
                if remaining > 0 {
                    spans.push(Span::styled(" · ", theme.text_muted_style()));
                    spans.push(Span::styled(
                        truncate_to_width(artwork.artist_or_unknown(), remaining),
                        theme.text_secondary_style(),
                    ));
                }
                Line::from(spans)
            })
            .collect::<Vec<Line>>();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_palettes(frame: &mut Frame, rect: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let history = app.gallery.palette_history();
        let title = format!(" Palette History ({}) ", history.len());
        let block = th::block(theme, Some(&title), false);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        if history.is_empty() {
            frame.render_widget(Paragraph::new(Span::styled("Nothing yet", theme.text_muted_style())), inner);
            return;
        }

        let lines = history
            .iter()
            .take(inner.height as usize)
            .map(|palette| {
                Line::from(
                    palette
                        .iter()
                        .map(|color| Span::styled("███ ", Style::default().fg(swatch_color(*color))))
                        .collect::<Vec<Span>>(),
                )
            })
            .collect::<Vec<Line>>();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for HistoryComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let [artworks, palettes] = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(rect);
        Self::render_artworks(frame, artworks, app);
        Self::render_palettes(frame, palettes, app);
    }
}
