//! Color sanitization callbacks and the color-parsing capability.
//!
//! The callbacks delegate parsing to a [`ColorParser`] collaborator so a
//! host can substitute its own color engine. [`CssColorParser`] is the
//! bundled default and covers the hex, `rgb()`/`rgba()`, and
//! `hsl()`/`hsla()` notations customizer controls emit.

mod parse;


use serde::{Deserialize, Serialize};

use washboard_common::{Color, Result, SanitizeError};

use parse::{parse_hex, parse_hsl, parse_rgb, HEX_RE, HSL_RE, RGB_RE};

/// Notation a color value was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

/// A parsed color plus the notation it arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedColor {
    pub color: Color,
    pub mode: ColorMode,
}

impl ParsedColor {
    /// Render as `rgba(r,g,b,a)` regardless of the source notation.
    pub fn to_rgba_string(&self) -> String {
        self.color.to_rgba_string()
    }

    /// Render in the notation the value was parsed from.
    pub fn to_native_string(&self) -> String {
        match self.mode {
            ColorMode::Hex => self.color.to_hex(),
            ColorMode::Rgb => {
                format!("rgb({},{},{})", self.color.r, self.color.g, self.color.b)
            }
            ColorMode::Rgba => self.color.to_rgba_string(),
            ColorMode::Hsl => {
                let (h, s, l) = self.color.to_hsl();
                format!("hsl({},{}%,{}%)", h.round(), s.round(), l.round())
            }
            ColorMode::Hsla => {
                let (h, s, l) = self.color.to_hsl();
                format!(
                    "hsla({},{}%,{}%,{})",
                    h.round(),
                    s.round(),
                    l.round(),
                    self.color.alpha_css()
                )
            }
        }
    }
}

/// Parses color text into a normalized color value.
pub trait ColorParser {
    fn parse(&self, input: &str) -> Result<ParsedColor>;
}

/// Default parser for CSS color notations.
#[derive(Debug, Default, Clone, Copy)]
pub struct CssColorParser;

impl ColorParser for CssColorParser {
    fn parse(&self, input: &str) -> Result<ParsedColor> {
        let input = input.trim();

        if input.starts_with('#') {
            return parse_hex(input)
                .map(|color| ParsedColor {
                    color,
                    mode: ColorMode::Hex,
                })
                .ok_or_else(|| SanitizeError::ColorParse(format!("invalid hex color: {input}")));
        }

        if input.starts_with("rgba(") || input.starts_with("rgb(") {
            let mode = if input.starts_with("rgba(") {
                ColorMode::Rgba
            } else {
                ColorMode::Rgb
            };
            return parse_rgb(input)
                .map(|color| ParsedColor { color, mode })
                .ok_or_else(|| SanitizeError::ColorParse(format!("invalid rgba color: {input}")));
        }

        if input.starts_with("hsla(") || input.starts_with("hsl(") {
            let mode = if input.starts_with("hsla(") {
                ColorMode::Hsla
            } else {
                ColorMode::Hsl
            };
            return parse_hsl(input)
                .map(|color| ParsedColor { color, mode })
                .ok_or_else(|| SanitizeError::ColorParse(format!("invalid hsl color: {input}")));
        }

        Err(SanitizeError::ColorParse(format!(
            "unrecognized color format: {input}"
        )))
    }
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGB_RE.is_match(s);
    }
    if s.starts_with("hsla(") || s.starts_with("hsl(") {
        return HSL_RE.is_match(s);
    }
    false
}

/// Normalize any recognized color to `rgba()` notation.
pub fn sanitize_rgba(value: &str, parser: &dyn ColorParser) -> Result<String> {
    parser.parse(value).map(|parsed| parsed.to_rgba_string())
}

/// Normalize a color in its own notation.
///
/// Empty input stays empty and the exact `transparent` keyword passes
/// through; everything else re-renders in the notation it was written in.
pub fn sanitize_color(value: &str, parser: &dyn ColorParser) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if trimmed == "transparent" {
        return Ok("transparent".to_string());
    }
    parser.parse(trimmed).map(|parsed| parsed.to_native_string())
}
