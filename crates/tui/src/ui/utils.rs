//! UI helpers shared across components.

use artpal_types::Hsl;
use artpal_util::hsl_to_rgb;
use ratatui::{
    layout::{Position, Rect},
    style::Color,
};

/// Terminal color for a swatch.
pub fn swatch_color(color: Hsl) -> Color {
    let (r, g, b) = hsl_to_rgb(color);
    Color::Rgb(r, g, b)
}

/// Black or white, whichever reads better on top of `color`.
pub fn contrast_text_color(color: Hsl) -> Color {
    let (r, g, b) = hsl_to_rgb(color);
    // Rec. 601 luma
    let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    if luma >= 128_000 { Color::Black } else { Color::White }
}

/// Whether the terminal cell at (`column`, `row`) falls inside `area`.
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position { x: column, y: row })
}

/// Split `area` horizontally into `count` cells of near-equal width.
///
/// Remainder columns go to the leftmost cells so the row is filled exactly.
pub fn split_even(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let count_u16 = count as u16;
    let base = area.width / count_u16;
    let remainder = area.width % count_u16;
    let mut x = area.x;
    (0..count_u16)
        .map(|index| {
            let width = base + u16::from(index < remainder);
            let cell = Rect { x, width, ..area };
            x += width;
            cell
        })
        .collect()
}
