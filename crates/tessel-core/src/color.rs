use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::capability::{Cloneable, Equatable, Interpolatable, ValueType};
use crate::lerp::lerp;
use crate::value::{Value, ValueKind};

/// Luminance score below which a color counts as dark.
const DARK_THRESHOLD: f64 = 0.5;

/// RGBA color with f64 channels nominally in the [0.0, 1.0] range.
///
/// Channels are not validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl Color {
    /// Create a new RGBA color.
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque RGB color (alpha = 1.0).
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        )
    }

    /// Create a color from a packed `0xRRGGBBAA` value, the inverse of [`Color::to_hex`].
    pub fn from_packed(packed: u32) -> Self {
        Self::from_rgba8(packed.to_be_bytes())
    }

    /// Parse a hex color string.
    ///
    /// An optional `#` or `0x` prefix is stripped. The format follows the
    /// number of digits, not the numeric value, so `"0000FF"` is blue:
    ///
    /// - 1–2 digits: one intensity for red, green and blue, opaque.
    /// - 3–6 digits: `RRGGBB`, opaque.
    /// - 7–8 digits: `RRGGBBAA`.
    ///
    /// Digits are read as a single number, so `"FFF"` is `0x000FFF`, not CSS shorthand.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let trimmed = hex.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(ColorError::Empty);
        }
        if digits.len() > 8 {
            return Err(ColorError::TooLong {
                input: hex.to_string(),
                digits: digits.len(),
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))?;

        let rgba = match digits.len() {
            1..=2 => {
                let v = (value & 0xFF) as u8;
                [v, v, v, 0xFF]
            }
            3..=6 => {
                let [_, r, g, b] = value.to_be_bytes();
                [r, g, b, 0xFF]
            }
            _ => value.to_be_bytes(),
        };
        Ok(Self::from_rgba8(rgba))
    }

    /// Pack into `0xRRGGBBAA`.
    ///
    /// Each channel is scaled by 255, rounded and masked to one byte, so
    /// out-of-range channels wrap rather than saturate.
    pub fn to_hex(&self) -> u32 {
        (channel_byte(self.red) << 24)
            | (channel_byte(self.green) << 16)
            | (channel_byte(self.blue) << 8)
            | channel_byte(self.alpha)
    }

    /// Convert to RGBA u8 channels, saturating out-of-range values.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.red * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.green * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.blue * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.alpha * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Perceptual luminance score (ITU-R BT.601 weights).
    pub fn luminance(&self) -> f64 {
        self.red * 0.299 + self.green * 0.587 + self.blue * 0.114
    }

    /// Whether the color reads as dark (luminance below 0.5).
    pub fn is_dark(&self) -> bool {
        self.luminance() < DARK_THRESHOLD
    }

    /// Copy with alpha replaced. The new alpha is not range-checked.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self { alpha, ..*self }
    }

    pub fn with_red(&self, red: f64) -> Self {
        Self { red, ..*self }
    }

    pub fn with_green(&self, green: f64) -> Self {
        Self { green, ..*self }
    }

    pub fn with_blue(&self, blue: f64) -> Self {
        Self { blue, ..*self }
    }

    // --- Presets ---
    //
    // Associated consts are copied at every use site, so callers never share
    // a preset instance.

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const PURPLE: Color = Color::rgb(1.0, 0.0, 1.0);
}

fn channel_byte(channel: f64) -> u32 {
    ((channel * 255.0).round() as i64 & 0xFF) as u32
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl Equatable for Color {
    fn equals(&self, other: &Self) -> bool {
        self.red == other.red
            && self.green == other.green
            && self.blue == other.blue
            && self.alpha == other.alpha
    }
}

impl Cloneable for Color {
    fn duplicate(&self) -> Self {
        Self::new(self.red, self.green, self.blue, self.alpha)
    }
}

impl Interpolatable for Color {
    fn interpolate(&self, to: &Self, time: f64) -> Self {
        Self::new(
            lerp(self.red, to.red, time),
            lerp(self.green, to.green, time),
            lerp(self.blue, to.blue, time),
            lerp(self.alpha, to.alpha, time),
        )
    }
}

impl ValueType for Color {
    const KIND: ValueKind = ValueKind::Color;

    fn into_value(self) -> Value {
        Value::Color(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Color(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("empty hex color string")]
    Empty,
    #[error("invalid hex color string {0:?}")]
    InvalidHex(String),
    #[error("hex color string {input:?} has {digits} digits, at most 8 are allowed")]
    TooLong { input: String, digits: usize },
}
