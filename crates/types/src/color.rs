//! HSL colours and fixed-size palettes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of swatches in every palette: four hues, one tint and one shade.
pub const PALETTE_SIZE: usize = 6;

/// A colour expressed as hue (degrees) plus saturation and lightness percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `0..=359`
    pub hue: u16,
    /// Saturation percentage, `0..=100`
    pub saturation: u8,
    /// Lightness percentage, `0..=100`
    pub lightness: u8,
}

impl Hsl {
    /// Build a colour, wrapping the hue into `0..360` and capping percentages at 100.
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        let saturation = if saturation > 100 { 100 } else { saturation };
        let lightness = if lightness > 100 { 100 } else { lightness };
        Self {
            hue: hue % 360,
            saturation,
            lightness,
        }
    }

    /// Same saturation and lightness, hue rotated by `degrees`.
    pub const fn rotated(self, degrees: u16) -> Self {
        let hue = (self.hue as u32 + degrees as u32) % 360;
        Self::new(hue as u16, self.saturation, self.lightness)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Ordered set of exactly [`PALETTE_SIZE`] swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette([Hsl; PALETTE_SIZE]);

impl Palette {
    pub const fn new(swatches: [Hsl; PALETTE_SIZE]) -> Self {
        Self(swatches)
    }

    pub fn swatches(&self) -> &[Hsl; PALETTE_SIZE] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<Hsl> {
        self.0.get(index).copied()
    }

    /// Replace the swatch at `index`, returning the colour it held.
    ///
    /// Returns `None` and leaves the palette untouched when `index` is out of range.
    pub fn replace(&mut self, index: usize, color: Hsl) -> Option<Hsl> {
        let slot = self.0.get_mut(index)?;
        Some(std::mem::replace(slot, color))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hsl> {
        self.0.iter()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, color) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
