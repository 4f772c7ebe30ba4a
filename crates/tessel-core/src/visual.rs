use serde::{Deserialize, Serialize};

use crate::capability::{Cloneable, Equatable, Interpolatable, ValueType};
use crate::color::Color;
use crate::geometry::{Size, Vector};
use crate::lerp::{lerp, step};
use crate::value::{Value, ValueKind};

/// A drop shadow: offset from the caster, blur radius and color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    offset: Vector,
    blur: f64,
    color: Color,
}

impl Shadow {
    pub const fn new(offset: Vector, blur: f64, color: Color) -> Self {
        Self {
            offset,
            blur,
            color,
        }
    }

    /// No offset, no blur, fully transparent.
    pub const fn none() -> Self {
        Self::new(Vector::zero(), 0.0, Color::CLEAR)
    }

    pub fn offset(&self) -> Vector {
        self.offset
    }

    pub fn blur(&self) -> f64 {
        self.blur
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn with_color(&self, color: Color) -> Self {
        Self { color, ..*self }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

impl Equatable for Shadow {
    fn equals(&self, other: &Self) -> bool {
        self.offset.equals(&other.offset)
            && self.blur == other.blur
            && self.color.equals(&other.color)
    }
}

impl Cloneable for Shadow {
    fn duplicate(&self) -> Self {
        Shadow::new(
            self.offset.duplicate(),
            self.blur,
            self.color.duplicate(),
        )
    }
}

impl Interpolatable for Shadow {
    fn interpolate(&self, to: &Self, time: f64) -> Self {
        Shadow::new(
            self.offset.interpolate(&to.offset, time),
            lerp(self.blur, to.blur, time),
            self.color.interpolate(&to.color, time),
        )
    }
}

impl ValueType for Shadow {
    const KIND: ValueKind = ValueKind::Shadow;

    fn into_value(self) -> Value {
        Value::Shadow(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Shadow(s) => Some(s),
            _ => None,
        }
    }
}

/// A reference to image content (path or URL) with its display size and opacity.
///
/// The source steps like other non-numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    source: String,
    size: Size,
    opacity: f64,
}

impl Image {
    /// A fully opaque image.
    pub fn new(source: impl Into<String>, size: Size) -> Self {
        Self {
            source: source.into(),
            size,
            opacity: 1.0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.size.aspect_ratio()
    }

    pub fn with_opacity(&self, opacity: f64) -> Self {
        Self {
            opacity,
            ..self.clone()
        }
    }

    pub fn with_size(&self, size: Size) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

impl Equatable for Image {
    fn equals(&self, other: &Self) -> bool {
        self.source == other.source
            && self.size.equals(&other.size)
            && self.opacity == other.opacity
    }
}

impl Cloneable for Image {
    fn duplicate(&self) -> Self {
        Image {
            source: self.source.clone(),
            size: self.size.duplicate(),
            opacity: self.opacity,
        }
    }
}

impl Interpolatable for Image {
    fn interpolate(&self, to: &Self, time: f64) -> Self {
        Image {
            source: step(&self.source, &to.source, time).clone(),
            size: self.size.interpolate(&to.size, time),
            opacity: lerp(self.opacity, to.opacity, time),
        }
    }
}

impl ValueType for Image {
    const KIND: ValueKind = ValueKind::Image;

    fn into_value(self) -> Value {
        Value::Image(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Image(i) => Some(i),
            _ => None,
        }
    }
}
