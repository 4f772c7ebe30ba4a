use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use crate::capability::{Cloneable, Equatable, Interpolatable, ValueType};
use crate::lerp::lerp;
use crate::value::{Value, ValueKind};

/// A 2D displacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    dx: f64,
    dy: f64,
}

impl Vector {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Equatable for Vector {
    fn equals(&self, other: &Self) -> bool {
        self.dx == other.dx && self.dy == other.dy
    }
}

impl Cloneable for Vector {
    fn duplicate(&self) -> Self {
        *self
    }
}

impl Interpolatable for Vector {
    fn interpolate(&self, to: &Self, time: f64) -> Self {
        Vector::new(lerp(self.dx, to.dx, time), lerp(self.dy, to.dy, time))
    }
}

impl ValueType for Vector {
    const KIND: ValueKind = ValueKind::Vector;

    fn into_value(self) -> Value {
        Value::Vector(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Move the point by a displacement.
    pub fn offset(&self, by: Vector) -> Point {
        Point::new(self.x + by.dx, self.y + by.dy)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (*other - *self).length()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        self.offset(rhs)
    }
}

impl Sub for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Equatable for Point {
    fn equals(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Cloneable for Point {
    fn duplicate(&self) -> Self {
        *self
    }
}

impl Interpolatable for Point {
    fn interpolate(&self, to: &Self, time: f64) -> Self {
        Point::new(lerp(self.x, to.x, time), lerp(self.y, to.y, time))
    }
}

impl ValueType for Point {
    const KIND: ValueKind = ValueKind::Point;

    fn into_value(self) -> Value {
        Value::Point(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Point(p) => Some(p),
            _ => None,
        }
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Compute the aspect ratio (width / height), or 0.0 for a zero height.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0.0 {
            return 0.0;
        }
        self.width / self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

impl Equatable for Size {
    fn equals(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl Cloneable for Size {
    fn duplicate(&self) -> Self {
        *self
    }
}

impl Interpolatable for Size {
    fn interpolate(&self, to: &Self, time: f64) -> Self {
        Size::new(
            lerp(self.width, to.width, time),
            lerp(self.height, to.height, time),
        )
    }
}

impl ValueType for Size {
    const KIND: ValueKind = ValueKind::Size;

    fn into_value(self) -> Value {
        Value::Size(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Size(s) => Some(s),
            _ => None,
        }
    }
}

/// Insets on the four sides of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    top: f64,
    left: f64,
    bottom: f64,
    right: f64,
}

impl Edges {
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub const fn zero() -> Self {
        Self::uniform(0.0)
    }

    /// The same inset on every side.
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// `vertical` on top and bottom, `horizontal` on left and right.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    /// Sum of the left and right insets.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::zero()
    }
}

impl Equatable for Edges {
    fn equals(&self, other: &Self) -> bool {
        self.top == other.top
            && self.left == other.left
            && self.bottom == other.bottom
            && self.right == other.right
    }
}

impl Cloneable for Edges {
    fn duplicate(&self) -> Self {
        *self
    }
}

impl Interpolatable for Edges {
    fn interpolate(&self, to: &Self, time: f64) -> Self {
        Edges::new(
            lerp(self.top, to.top, time),
            lerp(self.left, to.left, time),
            lerp(self.bottom, to.bottom, time),
            lerp(self.right, to.right, time),
        )
    }
}

impl ValueType for Edges {
    const KIND: ValueKind = ValueKind::Edges;

    fn into_value(self) -> Value {
        Value::Edges(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Edges(e) => Some(e),
            _ => None,
        }
    }
}

/// An axis-aligned rectangle: origin (top-left) plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn with_origin(&self, origin: Point) -> Self {
        Self { origin, ..*self }
    }

    pub fn with_size(&self, size: Size) -> Self {
        Self { size, ..*self }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Half-open containment: the min edges are inside, the max edges are not.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Shrink by `edges`. The resulting size never goes below zero.
    pub fn inset(&self, edges: &Edges) -> Rect {
        Rect::from_xywh(
            self.origin.x + edges.left,
            self.origin.y + edges.top,
            (self.size.width - edges.horizontal()).max(0.0),
            (self.size.height - edges.vertical()).max(0.0),
        )
    }

    /// Grow by `edges`.
    pub fn outset(&self, edges: &Edges) -> Rect {
        Rect::from_xywh(
            self.origin.x - edges.left,
            self.origin.y - edges.top,
            self.size.width + edges.horizontal(),
            self.size.height + edges.vertical(),
        )
    }
}

impl Equatable for Rect {
    fn equals(&self, other: &Self) -> bool {
        self.origin.equals(&other.origin) && self.size.equals(&other.size)
    }
}

impl Cloneable for Rect {
    fn duplicate(&self) -> Self {
        Rect::new(self.origin.duplicate(), self.size.duplicate())
    }
}

impl Interpolatable for Rect {
    fn interpolate(&self, to: &Self, time: f64) -> Self {
        Rect::new(
            self.origin.interpolate(&to.origin, time),
            self.size.interpolate(&to.size, time),
        )
    }
}

impl ValueType for Rect {
    const KIND: ValueKind = ValueKind::Rect;

    fn into_value(self) -> Value {
        Value::Rect(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Rect(r) => Some(r),
            _ => None,
        }
    }
}
