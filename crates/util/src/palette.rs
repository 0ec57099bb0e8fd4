//! Random palette generation.
//!
//! A palette is derived from a single base hue: four swatches rotated around
//! the colour wheel plus a light tint and a dark shade of the base. Single
//! swatches are drawn independently of any palette.

use artpal_types::{Hsl, PALETTE_SIZE, Palette};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Hue offsets (degrees) of the four main swatches.
pub const HUE_OFFSETS: [u16; 4] = [0, 30, 60, 180];
const MAIN_SATURATION: u8 = 60;
const MAIN_LIGHTNESS: u8 = 50;
const LIGHT_SATURATION: u8 = 80;
const LIGHT_LIGHTNESS: u8 = 85;
const DARK_SATURATION: u8 = 50;
const DARK_LIGHTNESS: u8 = 20;

const SINGLE_SATURATIONS: [u8; 3] = [MAIN_SATURATION, LIGHT_SATURATION, DARK_SATURATION];
const SINGLE_LIGHTNESSES: [u8; 3] = [MAIN_LIGHTNESS, LIGHT_LIGHTNESS, DARK_LIGHTNESS];

/// Generate a related palette from one uniformly drawn base hue.
pub fn generate_palette<R: Rng + ?Sized>(rng: &mut R) -> Palette {
    palette_from_base_hue(rng.random_range(0..360))
}

/// Build the palette for a given base hue.
pub fn palette_from_base_hue(base_hue: u16) -> Palette {
    let base = Hsl::new(base_hue, MAIN_SATURATION, MAIN_LIGHTNESS);
    let mut swatches = [base; PALETTE_SIZE];
    for (slot, offset) in swatches.iter_mut().zip(HUE_OFFSETS) {
        *slot = base.rotated(offset);
    }
    swatches[4] = Hsl::new(base.hue, LIGHT_SATURATION, LIGHT_LIGHTNESS);
    swatches[5] = Hsl::new(base.hue, DARK_SATURATION, DARK_LIGHTNESS);
    Palette::new(swatches)
}

/// Draw one colour with a random hue and one of the palette's saturation and
/// lightness levels, chosen independently.
pub fn generate_single_color<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
    let hue = rng.random_range(0..360);
    let saturation = *SINGLE_SATURATIONS.choose(rng).unwrap_or(&MAIN_SATURATION);
    let lightness = *SINGLE_LIGHTNESSES.choose(rng).unwrap_or(&MAIN_LIGHTNESS);
    Hsl::new(hue, saturation, lightness)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn palette_shape_follows_base_hue() {
        let palette = palette_from_base_hue(200);
        let swatches = palette.swatches();
        assert_eq!(swatches.len(), PALETTE_SIZE);
        assert_eq!(swatches[0], Hsl::new(200, 60, 50));
        assert_eq!(swatches[1], Hsl::new(230, 60, 50));
        assert_eq!(swatches[2], Hsl::new(260, 60, 50));
        assert_eq!(swatches[3], Hsl::new(20, 60, 50));
        assert_eq!(swatches[4], Hsl::new(200, 80, 85));
        assert_eq!(swatches[5], Hsl::new(200, 50, 20));
    }

    #[test]
    fn generated_palettes_keep_their_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let palette = generate_palette(&mut rng);
            let swatches = palette.swatches();
            let base = swatches[0].hue;
            for (swatch, offset) in swatches.iter().zip(HUE_OFFSETS) {
                assert_eq!((swatch.saturation, swatch.lightness), (60, 50));
                assert_eq!(swatch.hue, (base + offset) % 360);
            }
            assert_eq!(swatches[4].lightness, 85);
            assert_eq!(swatches[5].lightness, 20);
            assert_eq!(swatches[4].hue, base);
            assert_eq!(swatches[5].hue, base);
        }
    }

    #[test]
    fn single_colors_draw_from_the_discrete_levels() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut saturations = HashSet::new();
        let mut lightnesses = HashSet::new();
        for _ in 0..300 {
            let color = generate_single_color(&mut rng);
            assert!(color.hue < 360);
            saturations.insert(color.saturation);
            lightnesses.insert(color.lightness);
        }
        assert_eq!(saturations, HashSet::from([60, 80, 50]));
        assert_eq!(lightnesses, HashSet::from([50, 85, 20]));
    }

    #[test]
    fn same_seed_same_palette() {
        let first = generate_palette(&mut StdRng::seed_from_u64(3));
        let second = generate_palette(&mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }
}
