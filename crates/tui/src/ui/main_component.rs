use artpal_types::{ArtworkStatus, Effect, Msg};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::components::{
    ArtworkComponent, Component, ControlsComponent, HintBarComponent, HistoryComponent, LogsComponent, PaletteComponent,
};
use crate::app::App;

/// Regions of the screen, top to bottom.
#[derive(Debug, Clone, Copy, Default)]
struct MainLayout {
    header: Rect,
    artwork: Rect,
    palette: Rect,
    controls: Rect,
    history: Rect,
    logs: Rect,
    hints: Rect,
}

impl MainLayout {
    fn new(area: Rect) -> Self {
        let [header, showcase, controls, history, logs, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(9),
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .areas(area);
        let [artwork, palette] = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(showcase);
        let controls = Rect {
            y: controls.y + 1,
            height: controls.height.min(1),
            ..controls
        };
        Self {
            header,
            artwork,
            palette,
            controls,
            history,
            logs,
            hints,
        }
    }
}

/// Root view that lays out and routes input to every panel.
#[derive(Debug, Default)]
pub struct MainView {
    artwork_view: ArtworkComponent,
    palette_view: PaletteComponent,
    controls_view: ControlsComponent,
    history_view: HistoryComponent,
    logs_view: LogsComponent,
    hint_bar_view: HintBarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_header(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let status = match app.gallery.status() {
            ArtworkStatus::Idle => Span::styled("idle", theme.text_muted_style()),
            ArtworkStatus::Loading => Span::styled(format!("{} loading", app.throbber_frame()), theme.status_info()),
            ArtworkStatus::Ready => Span::styled("ready", theme.status_success()),
            ArtworkStatus::Failed(_) => Span::styled("failed", theme.status_error()),
        };
        let line = Line::from(vec![
            Span::styled(" artpal ", theme.accent_emphasis_style().add_modifier(Modifier::BOLD)),
            Span::styled("artwork & palette shuffler  ", theme.text_secondary_style()),
            status,
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        app.update(msg)
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Vec::new();
        }
        let msg = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Msg::Quit,
            KeyCode::Char('a') => Msg::ShuffleArtwork,
            KeyCode::Char('p') => Msg::ShufflePalette,
            KeyCode::Char(' ') | KeyCode::Char('b') => Msg::ShuffleBoth,
            KeyCode::Char('x') => Msg::ResetHistory,
            _ => return self.palette_view.handle_key_events(app, key),
        };
        app.update(&msg)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = self.controls_view.handle_mouse_events(app, mouse);
        effects.extend(self.palette_view.handle_mouse_events(app, mouse));
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let background = Block::default().style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(background, area);

        let layout = MainLayout::new(area);
        Self::render_header(frame, layout.header, app);
        self.artwork_view.render(frame, layout.artwork, app);
        self.palette_view.render(frame, layout.palette, app);
        self.controls_view.render(frame, layout.controls, app);
        self.history_view.render(frame, layout.history, app);
        self.logs_view.render(frame, layout.logs, app);
        self.hint_bar_view.render(frame, layout.hints, app);
    }
}
