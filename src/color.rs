//! Color specifier parsing.
//!
//! Accepts hexadecimal specifiers (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`),
//! CSS functional notation such as `rgb(100, 200, 10)` or `hsl(0, 100%, 50%)`,
//! and CSS color names (`white`, `yellow`, `transparent`, ...).

use image::Rgba;
use lightningcss::traits::Parse;
use lightningcss::values::color::{CssColor, FloatColor};
use thiserror::Error;

/// Reasons a color specifier can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color specifier")]
    Empty,
    #[error("hex color must have 3, 4, 6 or 8 digits, got {0}")]
    HexLength(usize),
    #[error("invalid hex digit {0:?}")]
    HexDigit(char),
    #[error("{0}")]
    Css(String),
}

/// Parse a color specifier into an RGBA value.
///
/// Specifiers without an alpha component are fully opaque. An eight digit hex
/// specifier carries alpha in its last pair, so `#ff000000` is transparent red.
///
/// ```
/// use hexsticker::color::parse_color;
///
/// assert_eq!(parse_color("#ff0010").unwrap(), image::Rgba([255, 0, 16, 255]));
/// assert_eq!(parse_color("rgb(100, 200, 10)").unwrap(), image::Rgba([100, 200, 10, 255]));
/// assert_eq!(parse_color("white").unwrap(), image::Rgba([255, 255, 255, 255]));
/// ```
pub fn parse_color(spec: &str) -> Result<Rgba<u8>, ColorError> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(ColorError::Empty);
    }

    match spec.strip_prefix('#') {
        Some(digits) => parse_hex(digits),
        None => parse_css(spec),
    }
}

fn parse_hex(digits: &str) -> Result<Rgba<u8>, ColorError> {
    let nibbles = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ColorError::HexDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    match *nibbles.as_slice() {
        [r, g, b] => Ok(Rgba([r * 17, g * 17, b * 17, 255])),
        [r, g, b, a] => Ok(Rgba([r * 17, g * 17, b * 17, a * 17])),
        [r1, r0, g1, g0, b1, b0] => Ok(Rgba([
            (r1 << 4) | r0,
            (g1 << 4) | g0,
            (b1 << 4) | b0,
            255,
        ])),
        [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Rgba([
            (r1 << 4) | r0,
            (g1 << 4) | g0,
            (b1 << 4) | b0,
            (a1 << 4) | a0,
        ])),
        _ => Err(ColorError::HexLength(nibbles.len())),
    }
}

fn parse_css(spec: &str) -> Result<Rgba<u8>, ColorError> {
    let color = CssColor::parse_string(spec).map_err(|e| ColorError::Css(e.to_string()))?;
    let rgb = color
        .to_rgb()
        .map_err(|_| ColorError::Css(format!("{spec:?} has no sRGB representation")))?;

    match rgb {
        CssColor::RGBA(c) => Ok(Rgba([c.red, c.green, c.blue, c.alpha])),
        CssColor::Float(float) => match float.as_ref() {
            FloatColor::RGB(c) => Ok(Rgba([
                unit_to_u8(c.r),
                unit_to_u8(c.g),
                unit_to_u8(c.b),
                unit_to_u8(c.alpha),
            ])),
            _ => Err(ColorError::Css(format!("{spec:?} did not resolve to sRGB"))),
        },
        _ => Err(ColorError::Css(format!("{spec:?} did not resolve to sRGB"))),
    }
}

fn unit_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
