//! Theme styling module for the TUI UI layer.
//!
//! A Nord palette for truecolor terminals, an ANSI 256-color fallback,
//! semantic theme roles, and helper builders for Ratatui widgets. Prefer
//! these helpers over hard-coding colors.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use nord::NordTheme;
pub use roles::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from `TUI_THEME` or the terminal's color capability.
pub fn load() -> Box<dyn Theme> {
    if let Ok(theme_name) = env::var("TUI_THEME")
        && let Some(theme) = resolve(theme_name.trim())
    {
        return theme;
    }

    match detect_color_capability() {
        ColorCapability::Truecolor => Box::new(NordTheme::new()),
        ColorCapability::Ansi256 => {
            debug!("ANSI-only terminal detected; using the 256-color fallback theme.");
            Box::new(Ansi256Theme::new())
        }
    }
}

fn resolve(name: &str) -> Option<Box<dyn Theme>> {
    match name.to_ascii_lowercase().as_str() {
        "nord" => Some(Box::new(NordTheme::new())),
        "ansi" | "ansi256" => Some(Box::new(Ansi256Theme::new())),
        _ => None,
    }
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}
