//! HSL parsing and conversion to RGB / hex.
//!
//! The conversion uses the closed form
//! `c = l - a * max(min(k - 3, 9 - k, 1), -1)` with `a = s * min(l, 1 - l)`
//! and `k = (n + h / 30) mod 12`, evaluated at `n = 0, 8, 4` for the red,
//! green and blue channels.

use artpal_types::Hsl;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static HSL_COMPONENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid HSL component pattern"));

/// Error surfaced when an HSL string cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input did not contain exactly hue, saturation and lightness.
    #[error("expected 3 numeric components in '{input}', found {found}")]
    ComponentCount { input: String, found: usize },
    /// A component did not fit in an integer.
    #[error("component '{value}' in '{input}' is not a valid number")]
    InvalidNumber { input: String, value: String },
    /// Saturation or lightness above 100%.
    #[error("{component} must be between 0 and 100, got {value}")]
    OutOfRange { component: &'static str, value: u32 },
}

/// Parse an HSL string such as `hsl(200, 60%, 50%)`.
///
/// Exactly three runs of digits must be present. The hue is reduced modulo
/// 360; saturation and lightness must not exceed 100.
pub fn parse_hsl(input: &str) -> Result<Hsl, ColorError> {
    let components = HSL_COMPONENTS.find_iter(input).map(|m| m.as_str()).collect::<Vec<&str>>();
    let [hue, saturation, lightness] = components.as_slice() else {
        return Err(ColorError::ComponentCount {
            input: input.to_string(),
            found: components.len(),
        });
    };

    let parse = |value: &str| {
        value.parse::<u32>().map_err(|_| ColorError::InvalidNumber {
            input: input.to_string(),
            value: value.to_string(),
        })
    };
    let hue = parse(*hue)? % 360;
    let saturation = percentage("saturation", parse(*saturation)?)?;
    let lightness = percentage("lightness", parse(*lightness)?)?;

    Ok(Hsl::new(hue as u16, saturation, lightness))
}

fn percentage(component: &'static str, value: u32) -> Result<u8, ColorError> {
    u8::try_from(value)
        .ok()
        .filter(|percent| *percent <= 100)
        .ok_or(ColorError::OutOfRange { component, value })
}

/// Convert a colour to its 8-bit RGB channels.
pub fn hsl_to_rgb(color: Hsl) -> (u8, u8, u8) {
    let hue = f64::from(color.hue % 360);
    let lightness = f64::from(color.lightness.min(100)) / 100.0;
    let amplitude = f64::from(color.saturation.min(100)) / 100.0 * lightness.min(1.0 - lightness);

    let channel = |n: f64| -> u8 {
        let k = (n + hue / 30.0).rem_euclid(12.0);
        let value = lightness - amplitude * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * value).round().clamp(0.0, 255.0) as u8
    };

    (channel(0.0), channel(8.0), channel(4.0))
}

/// Hex code (`#rrggbb`, lowercase) for a colour.
pub fn hsl_hex(color: Hsl) -> String {
    let (red, green, blue) = hsl_to_rgb(color);
    format!("#{red:02x}{green:02x}{blue:02x}")
}

/// Parse an HSL string and return its hex code.
///
/// # Example
/// ```rust
/// use artpal_util::hsl_to_hex;
///
/// assert_eq!(hsl_to_hex("hsl(0, 0%, 100%)").unwrap(), "#ffffff");
/// ```
pub fn hsl_to_hex(input: &str) -> Result<String, ColorError> {
    parse_hsl(input).map(hsl_hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white() {
        assert_eq!(hsl_to_hex("hsl(0,0%,0%)").unwrap(), "#000000");
        assert_eq!(hsl_to_hex("hsl(0,0%,100%)").unwrap(), "#ffffff");
    }

    #[test]
    fn primaries_and_a_mixed_hue() {
        assert_eq!(hsl_to_hex("hsl(0, 100%, 50%)").unwrap(), "#ff0000");
        assert_eq!(hsl_to_hex("hsl(120, 100%, 50%)").unwrap(), "#00ff00");
        assert_eq!(hsl_to_hex("hsl(240, 100%, 50%)").unwrap(), "#0000ff");
        assert_eq!(hsl_to_hex("hsl(200, 60%, 50%)").unwrap(), "#3399cc");
    }

    #[test]
    fn every_valid_triple_yields_six_lowercase_hex_digits() {
        for hue in (0..360).step_by(7) {
            for saturation in (0..=100).step_by(10) {
                for lightness in (0..=100).step_by(5) {
                    let hex = hsl_hex(Hsl::new(hue, saturation, lightness));
                    assert_eq!(hex.len(), 7, "{hex}");
                    assert!(hex.starts_with('#'));
                    assert!(
                        hex[1..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                        "unexpected digits in {hex}"
                    );
                }
            }
        }
    }

    #[test]
    fn hue_wraps_modulo_360() {
        assert_eq!(parse_hsl("hsl(400, 60%, 50%)").unwrap(), Hsl::new(40, 60, 50));
    }

    #[test]
    fn malformed_input_fails_loudly() {
        assert!(matches!(
            parse_hsl("hsl(10, 20%)"),
            Err(ColorError::ComponentCount { found: 2, .. })
        ));
        assert!(matches!(
            parse_hsl("hsl(10.5, 20%, 30%)"),
            Err(ColorError::ComponentCount { found: 4, .. })
        ));
        assert_eq!(
            parse_hsl("hsl(10, 120%, 30%)"),
            Err(ColorError::OutOfRange {
                component: "saturation",
                value: 120
            })
        );
        assert!(matches!(
            parse_hsl("hsl(99999999999, 20%, 30%)"),
            Err(ColorError::InvalidNumber { .. })
        ));
    }
}
