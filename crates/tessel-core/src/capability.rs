//! Capability traits implemented by every member of the value type family.

use crate::error::{TesselError, TesselResult};
use crate::value::{Value, ValueKind};

/// Structural value equality.
///
/// Floating-point fields are compared with exact `==`, so a value holding a
/// NaN channel is not equal to itself.
pub trait Equatable {
    fn equals(&self, other: &Self) -> bool;
}

/// Deep copy into independently owned storage.
pub trait Cloneable {
    fn duplicate(&self) -> Self;
}

/// Time-parameterized blending between two values of the same type.
///
/// Scalar fields blend linearly, nested value types delegate to their own
/// `interpolate` with the same `time`. `time` is never clamped.
pub trait Interpolatable {
    fn interpolate(&self, to: &Self, time: f64) -> Self;
}

/// A concrete member of the value type family.
///
/// Ties a type to its [`ValueKind`] tag so it can be checked against a
/// dynamically typed [`Value`] destination.
pub trait ValueType: Equatable + Cloneable + Interpolatable + Sized {
    const KIND: ValueKind;

    /// Wrap this value in the tagged [`Value`] enum.
    fn into_value(self) -> Value;

    /// Borrow the payload of `value` if it carries this type's tag.
    fn from_value(value: &Value) -> Option<&Self>;

    /// Interpolate toward a dynamically typed destination.
    ///
    /// Fails with [`TesselError::InvalidInterpolatableDestination`] when `to`
    /// is tagged with a different kind.
    fn interpolate_towards(&self, to: &Value, time: f64) -> TesselResult<Self> {
        match Self::from_value(to) {
            Some(to) => Ok(self.interpolate(to, time)),
            None => Err(TesselError::invalid_destination(
                self.duplicate().into_value(),
                to.duplicate(),
            )),
        }
    }
}
