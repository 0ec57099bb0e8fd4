//! Palette panel.
//!
//! Shows the six swatches of the current palette side by side with their
//! hex and HSL values. Clicking a swatch (or pressing its number) replaces
//! just that swatch; the arrow keys move the selection used by `r`/`Enter`
//! and `c`.

use artpal_types::{Effect, Msg, PALETTE_SIZE};
use artpal_util::{hsl_hex, truncate_to_width};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::{contrast_text_color, hit, split_even, swatch_color};

#[derive(Debug, Default)]
pub struct PaletteComponent {
    swatch_areas: Vec<Rect>,
}

impl PaletteComponent {
    /// Swatch index under the given cell, based on the last render.
    pub fn swatch_at(&self, column: u16, row: u16) -> Option<usize> {
        self.swatch_areas.iter().position(|area| hit(*area, column, row))
    }
}

impl Component for PaletteComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Vec::new();
        }
        let msg = match key.code {
            KeyCode::Left => Msg::SelectSwatch(-1),
            KeyCode::Right => Msg::SelectSwatch(1),
            KeyCode::Enter | KeyCode::Char('r') => Msg::ShuffleSelectedSwatch,
            KeyCode::Char('c') => Msg::CopySelectedSwatch,
            KeyCode::Char(digit @ '1'..='6') => Msg::ShuffleSwatch(digit as usize - '1' as usize),
            _ => return Vec::new(),
        };
        app.update(&msg)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match self.swatch_at(mouse.column, mouse.row) {
            Some(index) => app.update(&Msg::ShuffleSwatch(index)),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some(" Palette "), false);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let Some(palette) = app.gallery.palette() else {
            self.swatch_areas.clear();
            let empty = Paragraph::new(Span::styled("No palette yet. Press p", theme.text_muted_style()));
            frame.render_widget(empty, inner);
            return;
        };

        self.swatch_areas = split_even(inner, PALETTE_SIZE);
        for (index, (color, area)) in palette.iter().zip(self.swatch_areas.iter()).enumerate() {
            let text_color = contrast_text_color(*color);
            let base = Style::default().bg(swatch_color(*color)).fg(text_color);
            let selected = index == app.selected_swatch;
            let label_style = if selected {
                base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                base
            };
            let width = area.width.saturating_sub(1) as usize;
            let marker = if selected { "▸ " } else { "" };

            let mut lines = vec![Line::default(); (area.height.saturating_sub(3) / 2) as usize];
            lines.push(Line::from(Span::styled(format!("{marker}{}", index + 1), label_style)));
            lines.push(Line::from(Span::styled(truncate_to_width(&hsl_hex(*color), width), base)));
            lines.push(Line::from(Span::styled(truncate_to_width(&color.to_string(), width), base)));

            let cell = Paragraph::new(lines).style(base).alignment(Alignment::Center);
            frame.render_widget(cell, *area);
        }
    }
}
