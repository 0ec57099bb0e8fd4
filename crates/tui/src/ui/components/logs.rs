//! Status log panel.
//!
//! Keeps a bounded list of user-facing status lines (fetch results,
//! warnings, clipboard confirmations) and renders the most recent ones.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::theme_helpers as th;

/// Oldest entries are dropped past this many lines.
pub const MAX_LOG_ENTRIES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct LogsState {
    entries: VecDeque<LogEntry>,
}

impl LogsState {
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        if self.entries.len() == MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            at: Local::now(),
            level,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }
}

#[derive(Debug, Default)]
pub struct LogsComponent;

impl Component for LogsComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some(" Log "), false);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let visible = inner.height as usize;
        let entries = app.logs.entries();
        let lines = entries
            .iter()
            .skip(entries.len().saturating_sub(visible))
            .map(|entry| {
                let style = match entry.level {
                    LogLevel::Info => theme.text_primary_style(),
                    LogLevel::Warn => theme.status_warning(),
                    LogLevel::Error => theme.status_error(),
                };
                Line::from(vec![
                    Span::styled(format!("{} ", entry.at.format("%H:%M:%S")), theme.text_muted_style()),
                    Span::styled(entry.message.clone(), style),
                ])
            })
            .collect::<Vec<Line>>();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
