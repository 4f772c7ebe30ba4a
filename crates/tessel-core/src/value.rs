//! Tagged union over the value type family.
//!
//! Used wherever the concrete type is only known at runtime. Interpolation
//! between two `Value`s checks the tags first and reports a mismatch as
//! [`TesselError::InvalidInterpolatableDestination`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::capability::{Cloneable, Equatable, Interpolatable};
use crate::color::Color;
use crate::error::{TesselError, TesselResult};
use crate::geometry::{Edges, Point, Rect, Size, Vector};
use crate::typography::{Font, Text};
use crate::visual::{Image, Shadow};

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Number,
    Color,
    Vector,
    Point,
    Size,
    Rect,
    Edges,
    Font,
    Text,
    Shadow,
    Image,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Number => write!(f, "number"),
            ValueKind::Color => write!(f, "color"),
            ValueKind::Vector => write!(f, "vector"),
            ValueKind::Point => write!(f, "point"),
            ValueKind::Size => write!(f, "size"),
            ValueKind::Rect => write!(f, "rect"),
            ValueKind::Edges => write!(f, "edges"),
            ValueKind::Font => write!(f, "font"),
            ValueKind::Text => write!(f, "text"),
            ValueKind::Shadow => write!(f, "shadow"),
            ValueKind::Image => write!(f, "image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Value {
    Number(f64),
    Color(Color),
    Vector(Vector),
    Point(Point),
    Size(Size),
    Rect(Rect),
    Edges(Edges),
    Font(Font),
    Text(Text),
    Shadow(Shadow),
    Image(Image),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Color(_) => ValueKind::Color,
            Value::Vector(_) => ValueKind::Vector,
            Value::Point(_) => ValueKind::Point,
            Value::Size(_) => ValueKind::Size,
            Value::Rect(_) => ValueKind::Rect,
            Value::Edges(_) => ValueKind::Edges,
            Value::Font(_) => ValueKind::Font,
            Value::Text(_) => ValueKind::Text,
            Value::Shadow(_) => ValueKind::Shadow,
            Value::Image(_) => ValueKind::Image,
        }
    }

    /// Interpolate toward `to`, which must carry the same kind.
    pub fn interpolate(&self, to: &Value, time: f64) -> TesselResult<Value> {
        let value = match (self, to) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a.interpolate(b, time)),
            (Value::Color(a), Value::Color(b)) => Value::Color(a.interpolate(b, time)),
            (Value::Vector(a), Value::Vector(b)) => Value::Vector(a.interpolate(b, time)),
            (Value::Point(a), Value::Point(b)) => Value::Point(a.interpolate(b, time)),
            (Value::Size(a), Value::Size(b)) => Value::Size(a.interpolate(b, time)),
            (Value::Rect(a), Value::Rect(b)) => Value::Rect(a.interpolate(b, time)),
            (Value::Edges(a), Value::Edges(b)) => Value::Edges(a.interpolate(b, time)),
            (Value::Font(a), Value::Font(b)) => Value::Font(a.interpolate(b, time)),
            (Value::Text(a), Value::Text(b)) => Value::Text(a.interpolate(b, time)),
            (Value::Shadow(a), Value::Shadow(b)) => Value::Shadow(a.interpolate(b, time)),
            (Value::Image(a), Value::Image(b)) => Value::Image(a.interpolate(b, time)),
            _ => {
                tracing::debug!(
                    "rejecting interpolation from {} to {}",
                    self.kind(),
                    to.kind()
                );
                return Err(TesselError::invalid_destination(
                    self.duplicate(),
                    to.duplicate(),
                ));
            }
        };
        Ok(value)
    }

    /// Serialize as tagged JSON (`{"type": "color", "data": {...}}`).
    pub fn to_json(&self) -> TesselResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> TesselResult<Value> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Equatable for Value {
    /// False for mismatched kinds, otherwise the payload's own `equals`.
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.equals(b),
            (Value::Color(a), Value::Color(b)) => a.equals(b),
            (Value::Vector(a), Value::Vector(b)) => a.equals(b),
            (Value::Point(a), Value::Point(b)) => a.equals(b),
            (Value::Size(a), Value::Size(b)) => a.equals(b),
            (Value::Rect(a), Value::Rect(b)) => a.equals(b),
            (Value::Edges(a), Value::Edges(b)) => a.equals(b),
            (Value::Font(a), Value::Font(b)) => a.equals(b),
            (Value::Text(a), Value::Text(b)) => a.equals(b),
            (Value::Shadow(a), Value::Shadow(b)) => a.equals(b),
            (Value::Image(a), Value::Image(b)) => a.equals(b),
            _ => false,
        }
    }
}

impl Cloneable for Value {
    fn duplicate(&self) -> Self {
        match self {
            Value::Number(v) => Value::Number(v.duplicate()),
            Value::Color(v) => Value::Color(v.duplicate()),
            Value::Vector(v) => Value::Vector(v.duplicate()),
            Value::Point(v) => Value::Point(v.duplicate()),
            Value::Size(v) => Value::Size(v.duplicate()),
            Value::Rect(v) => Value::Rect(v.duplicate()),
            Value::Edges(v) => Value::Edges(v.duplicate()),
            Value::Font(v) => Value::Font(v.duplicate()),
            Value::Text(v) => Value::Text(v.duplicate()),
            Value::Shadow(v) => Value::Shadow(v.duplicate()),
            Value::Image(v) => Value::Image(v.duplicate()),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<Color> for Value {
    fn from(v: Color) -> Self {
        Value::Color(v)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}

impl From<Point> for Value {
    fn from(v: Point) -> Self {
        Value::Point(v)
    }
}

impl From<Size> for Value {
    fn from(v: Size) -> Self {
        Value::Size(v)
    }
}

impl From<Rect> for Value {
    fn from(v: Rect) -> Self {
        Value::Rect(v)
    }
}

impl From<Edges> for Value {
    fn from(v: Edges) -> Self {
        Value::Edges(v)
    }
}

impl From<Font> for Value {
    fn from(v: Font) -> Self {
        Value::Font(v)
    }
}

impl From<Text> for Value {
    fn from(v: Text) -> Self {
        Value::Text(v)
    }
}

impl From<Shadow> for Value {
    fn from(v: Shadow) -> Self {
        Value::Shadow(v)
    }
}

impl From<Image> for Value {
    fn from(v: Image) -> Self {
        Value::Image(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", ValueKind::Color), "color");
        assert_eq!(format!("{}", Value::from(Rect::default()).kind()), "rect");
    }

    #[test]
    fn test_same_layout_different_kind_not_equal() {
        let v = Value::from(Vector::new(1.0, 2.0));
        let p = Value::from(Point::new(1.0, 2.0));
        assert!(!v.equals(&p));
        assert!(!p.equals(&v));
        assert_ne!(v, p);
    }

    #[test]
    fn test_interpolate_matching_kinds() {
        let a = Value::from(Color::BLACK);
        let b = Value::from(Color::WHITE);
        let mid = a.interpolate(&b, 0.5).unwrap();
        assert!(mid.equals(&Value::Color(Color::new(0.5, 0.5, 0.5, 1.0))));
    }

    #[test]
    fn test_interpolate_mismatched_kinds_fails() {
        let a = Value::from(Size::new(1.0, 1.0));
        let b = Value::from(Point::new(1.0, 1.0));
        match a.interpolate(&b, 0.5) {
            Err(TesselError::InvalidInterpolatableDestination { from, to }) => {
                assert_eq!(*from, a);
                assert_eq!(*to, b);
            }
            other => panic!("expected mismatch error, got {:?}", other),
        }
    }

    #[test]
    fn test_json_is_tagged() {
        let json = Value::from(Point::new(1.0, 2.0)).to_json().unwrap();
        assert_eq!(json, r#"{"type":"point","data":{"x":1.0,"y":2.0}}"#);
        let back = Value::from_json(&json).unwrap();
        assert_eq!(back, Value::Point(Point::new(1.0, 2.0)));
    }
}
