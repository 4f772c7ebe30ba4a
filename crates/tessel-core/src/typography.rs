//! Font and styled text values.
//!
//! Family names and text content cannot be blended, so they step: the start
//! value is held until `time` reaches 1.0.

use serde::{Deserialize, Serialize};

use crate::capability::{Cloneable, Equatable, Interpolatable, ValueType};
use crate::color::Color;
use crate::lerp::{lerp, step};
use crate::value::{Value, ValueKind};

/// CSS-style "normal" weight.
pub const REGULAR_WEIGHT: f64 = 400.0;

/// A font face reference: family name, point size and numeric weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    family: String,
    size: f64,
    weight: f64,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64, weight: f64) -> Self {
        Self {
            family: family.into(),
            size,
            weight,
        }
    }

    /// A font at the regular (400) weight.
    pub fn regular(family: impl Into<String>, size: f64) -> Self {
        Self::new(family, size, REGULAR_WEIGHT)
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn with_size(&self, size: f64) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    pub fn with_weight(&self, weight: f64) -> Self {
        Self {
            weight,
            ..self.clone()
        }
    }
}

impl Equatable for Font {
    fn equals(&self, other: &Self) -> bool {
        self.family == other.family && self.size == other.size && self.weight == other.weight
    }
}

impl Cloneable for Font {
    fn duplicate(&self) -> Self {
        Font::new(self.family.clone(), self.size, self.weight)
    }
}

impl Interpolatable for Font {
    fn interpolate(&self, to: &Self, time: f64) -> Self {
        Font::new(
            step(&self.family, &to.family, time).clone(),
            lerp(self.size, to.size, time),
            lerp(self.weight, to.weight, time),
        )
    }
}

impl ValueType for Font {
    const KIND: ValueKind = ValueKind::Font;

    fn into_value(self) -> Value {
        Value::Font(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Font(f) => Some(f),
            _ => None,
        }
    }
}

/// A run of text with its font and fill color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    content: String,
    font: Font,
    color: Color,
}

impl Text {
    pub fn new(content: impl Into<String>, font: Font, color: Color) -> Self {
        Self {
            content: content.into(),
            font,
            color,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self::new(content, self.font.clone(), self.color)
    }

    pub fn with_font(&self, font: Font) -> Self {
        Self::new(self.content.clone(), font, self.color)
    }

    pub fn with_color(&self, color: Color) -> Self {
        Self::new(self.content.clone(), self.font.clone(), color)
    }
}

impl Equatable for Text {
    fn equals(&self, other: &Self) -> bool {
        self.content == other.content
            && self.font.equals(&other.font)
            && self.color.equals(&other.color)
    }
}

impl Cloneable for Text {
    fn duplicate(&self) -> Self {
        Text::new(
            self.content.clone(),
            self.font.duplicate(),
            self.color.duplicate(),
        )
    }
}

impl Interpolatable for Text {
    fn interpolate(&self, to: &Self, time: f64) -> Self {
        Text::new(
            step(&self.content, &to.content, time).clone(),
            self.font.interpolate(&to.font, time),
            self.color.interpolate(&to.color, time),
        )
    }
}

impl ValueType for Text {
    const KIND: ValueKind = ValueKind::Text;

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_interpolate_blends_metrics_and_steps_family() {
        let a = Font::regular("Inter", 12.0);
        let b = Font::new("Roboto", 24.0, 700.0);
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid.family(), "Inter");
        assert!((mid.size() - 18.0).abs() < 1e-12);
        assert!((mid.weight() - 550.0).abs() < 1e-12);
        assert_eq!(a.interpolate(&b, 1.0).family(), "Roboto");
    }

    #[test]
    fn test_font_with_size_keeps_family() {
        let f = Font::regular("Inter", 12.0).with_size(32.0);
        assert_eq!(f.family(), "Inter");
        assert_eq!(f.size(), 32.0);
        assert_eq!(f.weight(), REGULAR_WEIGHT);
    }

    #[test]
    fn test_text_interpolate_recurses() {
        let a = Text::new("Hello", Font::regular("Inter", 10.0), Color::BLACK);
        let b = Text::new("World", Font::regular("Inter", 20.0), Color::WHITE);
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid.content(), "Hello");
        assert_eq!(mid.font().size(), 15.0);
        assert!(mid.color().equals(&Color::new(0.5, 0.5, 0.5, 1.0)));
        assert!(a.interpolate(&b, 1.0).equals(&b));
    }

    #[test]
    fn test_text_duplicate_is_independent() {
        let a = Text::new("Title", Font::regular("Inter", 10.0), Color::RED);
        let b = a.duplicate().with_content("Changed");
        assert_eq!(a.content(), "Title");
        assert_eq!(b.content(), "Changed");
        assert!(!a.equals(&b));
    }
}
