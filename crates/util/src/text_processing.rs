//! Text helpers for rendering into fixed-width terminal cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Trim `text` and cut it so its display width fits in `max_width` columns,
/// ending with an ellipsis when anything was removed.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let trimmed = text.trim();
    if trimmed.width() <= max_width {
        return trimmed.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Reserve one column for the trailing ellipsis.
    let budget = max_width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for ch in trimmed.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}
