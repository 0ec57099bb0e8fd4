//! Pure helpers shared by the artpal CLI and TUI.
//!
//! - [`color`]: parse HSL notation and convert it to RGB and hex codes
//! - [`palette`]: generate related palettes and single random swatches
//! - [`text_processing`]: width-aware truncation for terminal rendering

pub mod color;
pub mod palette;
pub mod text_processing;

pub use color::{ColorError, hsl_hex, hsl_to_hex, hsl_to_rgb, parse_hsl};
pub use palette::{generate_palette, generate_single_color, palette_from_base_hue};
pub use text_processing::truncate_to_width;
