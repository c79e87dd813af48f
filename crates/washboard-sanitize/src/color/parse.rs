//! Internal color string parsing.
//!
//! Handles the low-level conversion of hex, rgb, and hsl notations into
//! [`Color`] values. Not part of the public API.

use regex::Regex;
use std::sync::LazyLock;

use washboard_common::Color;

/// Regex for hex color: #RGB, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Regex for rgb()/rgba() with an optional float-or-int alpha.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

/// Regex for hsl()/hsla(): hue in degrees, percent saturation and
/// lightness, optional alpha.
pub(crate) static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla?\(\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)%\s*,\s*([0-9]*\.?[0-9]+)%\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

/// Parse a hex color string (#RGB, #RRGGBB, or #RRGGBBAA).
pub(super) fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            // Expand #RGB to #RRGGBB
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color::from_rgba(r * 17, g * 17, b * 17, 255))
        }
        6 | 8 => Color::from_hex(s),
        _ => None,
    }
}

/// Parse an `rgb(r,g,b)` or `rgba(r,g,b,a)` color string.
pub(super) fn parse_rgb(s: &str) -> Option<Color> {
    let caps = RGB_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    let a = match caps.get(4) {
        Some(alpha) => parse_alpha(alpha.as_str())?,
        None => 255,
    };
    Some(Color::from_rgba(r, g, b, a))
}

/// Parse an `hsl(h,s%,l%)` or `hsla(h,s%,l%,a)` color string.
pub(super) fn parse_hsl(s: &str) -> Option<Color> {
    let caps = HSL_RE.captures(s)?;
    let h: f64 = caps[1].parse().ok()?;
    let sat: f64 = caps[2].parse().ok()?;
    let light: f64 = caps[3].parse().ok()?;
    if sat > 100.0 || light > 100.0 {
        return None;
    }
    let a = match caps.get(4) {
        Some(alpha) => parse_alpha(alpha.as_str())?,
        None => 255,
    };
    Some(Color::from_hsla(h, sat, light, a as f64 / 255.0))
}

/// Alpha is either a 0-1 float (CSS convention) or a 0-255 integer; the
/// integer `1` is read as the CSS opaque case.
fn parse_alpha(text: &str) -> Option<u8> {
    if text.contains('.') {
        let alpha: f64 = text.parse().ok()?;
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
        Some((alpha * 255.0).round() as u8)
    } else {
        let alpha: u32 = text.parse().ok()?;
        match alpha {
            1 => Some(255),
            0..=255 => Some(alpha as u8),
            _ => None,
        }
    }
}
