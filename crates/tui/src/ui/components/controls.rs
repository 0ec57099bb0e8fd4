//! Row of clickable shuffle/reset buttons.

use artpal_types::{Effect, Msg};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Frame, layout::Rect};

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::{hit, split_even};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    ShuffleArtwork,
    ShufflePalette,
    ShuffleBoth,
    ResetHistory,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::ShuffleArtwork,
        Control::ShufflePalette,
        Control::ShuffleBoth,
        Control::ResetHistory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Control::ShuffleArtwork => "Shuffle Artwork (a)",
            Control::ShufflePalette => "Shuffle Palette (p)",
            Control::ShuffleBoth => "Shuffle Both (space)",
            Control::ResetHistory => "Reset History (x)",
        }
    }

    pub fn msg(self) -> Msg {
        match self {
            Control::ShuffleArtwork => Msg::ShuffleArtwork,
            Control::ShufflePalette => Msg::ShufflePalette,
            Control::ShuffleBoth => Msg::ShuffleBoth,
            Control::ResetHistory => Msg::ResetHistory,
        }
    }
}

#[derive(Debug, Default)]
pub struct ControlsComponent {
    button_areas: Vec<(Control, Rect)>,
}

impl ControlsComponent {
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        self.button_areas
            .iter()
            .find(|(_, area)| hit(*area, column, row))
            .map(|(control, _)| *control)
    }
}

impl Component for ControlsComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match self.control_at(mouse.column, mouse.row) {
            Some(control) => app.update(&control.msg()),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        self.button_areas.clear();
        for (control, cell) in Control::ALL.into_iter().zip(split_even(rect, Control::ALL.len())) {
            // one column of gutter between buttons
            let area = Rect {
                width: cell.width.saturating_sub(1),
                ..cell
            };
            let enabled = match control {
                Control::ResetHistory => {
                    !app.gallery.artwork_history().is_empty() || !app.gallery.palette_history().is_empty()
                }
                _ => true,
            };
            th::render_button(frame, area, control.label(), enabled, theme);
            self.button_areas.push((control, area));
        }
    }
}
