//! # tessel-core
//!
//! Immutable geometric and visual value types for Tessel.
//! Every type in the family (colors, vectors, points, sizes, rects, edges,
//! fonts, text, shadows, images) implements the same three capabilities:
//! structural equality, deep copying and time-based interpolation.

pub mod capability;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod lerp;
pub mod typography;
pub mod value;
pub mod visual;

pub use config::*;

pub use capability::{Cloneable, Equatable, Interpolatable, ValueType};
pub use color::{Color, ColorError};
pub use error::{TesselError, TesselResult};
pub use geometry::{Edges, Point, Rect, Size, Vector};
pub use lerp::{lerp, step};
pub use typography::{Font, Text};
pub use value::{Value, ValueKind};
pub use visual::{Image, Shadow};
