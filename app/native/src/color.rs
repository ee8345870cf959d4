//! Color parsing for fill colors and solid color wallpapers.
//!
//! Accepted formats:
//! - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (the `#` is optional)
//! - Functional: `rgb(r, g, b)` and `rgba(r, g, b, a)` with 0-255 channels and 0-1 alpha
//! - Named: `black`, `white`, `red`, `green`, `blue`, `yellow`, `cyan`, `magenta`,
//!   `gray`/`grey`, `transparent`

use std::str::FromStr;

/// An sRGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Alpha component.
    pub a: f64,
}

impl Rgba {
    /// Creates a color, clamping each component to `0.0..=1.0`.
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Creates an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self { Self::from_rgba8(r, g, b, u8::MAX) }

    /// Creates a color from 8-bit channels.
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let max = f64::from(u8::MAX);
        Self::new(f64::from(r) / max, f64::from(g) / max, f64::from(b) / max, f64::from(a) / max)
    }

    /// Formats the color as `#RRGGBBAA`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_hex(&self) -> String {
        let channel = |value: f64| (value * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a)
        )
    }
}

impl FromStr for Rgba {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parse_color(s) }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.to_hex()) }
}

/// Parses a color in any supported format.
///
/// # Errors
///
/// Returns a description of the problem if the value is not a valid color.
pub fn parse_color(value: &str) -> Result<Rgba, String> {
    let value = value.trim();
    let lower = value.to_lowercase();

    if let Some(color) = parse_named_color(&lower) {
        return Ok(color);
    }

    if lower.starts_with("rgb") {
        return parse_rgba_color(&lower);
    }

    parse_hex_color(value)
}

/// Parses a hex color (`#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`).
///
/// # Errors
///
/// Returns an error if the value has the wrong length or contains non-hex digits.
pub fn parse_hex_color(value: &str) -> Result<Rgba, String> {
    let hex = value.trim().trim_start_matches('#');

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color '{value}': contains non-hex characters"));
    }

    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        len => {
            return Err(format!(
                "Invalid hex color '{value}': expected 3, 4, 6 or 8 digits, got {len}"
            ));
        }
    };

    let channel = |index: usize| {
        u8::from_str_radix(&expanded[index * 2..index * 2 + 2], 16)
            .map_err(|e| format!("Invalid hex color '{value}': {e}"))
    };

    let alpha = if expanded.len() == 8 { channel(3)? } else { u8::MAX };
    Ok(Rgba::from_rgba8(channel(0)?, channel(1)?, channel(2)?, alpha))
}

/// Parses `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// # Errors
///
/// Returns an error if the value is malformed or a channel is out of range.
pub fn parse_rgba_color(value: &str) -> Result<Rgba, String> {
    let lower = value.trim().to_lowercase();

    let (inner, expects_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
        (rest, true)
    } else if let Some(rest) = lower.strip_prefix("rgb(") {
        (rest, false)
    } else {
        return Err(format!("Invalid color '{value}': expected rgb(...) or rgba(...)"));
    };

    let Some(inner) = inner.strip_suffix(')') else {
        return Err(format!("Invalid color '{value}': missing closing parenthesis"));
    };

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let expected = if expects_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(format!(
            "Invalid color '{value}': expected {expected} components, got {}",
            parts.len()
        ));
    }

    let channel = |part: &str| {
        part.parse::<u8>()
            .map_err(|_| format!("Invalid color '{value}': '{part}' is not in 0-255"))
    };

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;

    let alpha = if expects_alpha {
        let alpha = parts[3]
            .parse::<f64>()
            .map_err(|_| format!("Invalid color '{value}': '{}' is not a number", parts[3]))?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(format!("Invalid color '{value}': alpha must be between 0 and 1"));
        }
        alpha
    } else {
        1.0
    };

    let rgb = Rgba::from_rgb8(r, g, b);
    Ok(Rgba::new(rgb.r, rgb.g, rgb.b, alpha))
}

fn parse_named_color(name: &str) -> Option<Rgba> {
    let color = match name {
        "black" => Rgba::from_rgb8(0, 0, 0),
        "white" => Rgba::from_rgb8(255, 255, 255),
        "red" => Rgba::from_rgb8(255, 0, 0),
        "green" => Rgba::from_rgb8(0, 255, 0),
        "blue" => Rgba::from_rgb8(0, 0, 255),
        "yellow" => Rgba::from_rgb8(255, 255, 0),
        "cyan" => Rgba::from_rgb8(0, 255, 255),
        "magenta" => Rgba::from_rgb8(255, 0, 255),
        "gray" | "grey" => Rgba::from_rgb8(128, 128, 128),
        "transparent" => Rgba::from_rgba8(0, 0, 0, 0),
        _ => return None,
    };
    Some(color)
}
