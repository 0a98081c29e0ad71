//! The immutable box.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::bounds::BoxBounds;
use crate::error::{self, BoxError};
use crate::log::debug;

use super::Box2Builder;

/// Immutable axis-aligned box with `i32` bounds in coordinate space `S`.
///
/// Invariants:
/// - `min_x <= max_x` and `min_y <= max_y`.
/// - `max_x - min_x` and `max_y - min_y` fit in an `i32`.
///
/// `S` is a compile-time tag only; it is never stored and never compared.
pub struct Box2<S> {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
    space: PhantomData<fn() -> S>,
}

/// Validate one axis: ordering first, then that the extent is representable.
fn check_axis(axis: char, min: i32, max: i32) -> Result<(), BoxError> {
    if min > max {
        debug!(axis = %axis, min, max, "bound ordering violated");
        return Err(BoxError::invariant(format!(
            "minimum_{axis} ({min}) must be <= maximum_{axis} ({max})"
        )));
    }
    error::sub(max, min)?;
    Ok(())
}

pub(crate) fn check_axes(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Result<(), BoxError> {
    check_axis('x', min_x, max_x)?;
    check_axis('y', min_y, max_y)
}

impl<S> Box2<S> {
    /// Box from its four bounds.
    ///
    /// Fails with [`BoxError::InvariantViolation`] if a minimum exceeds its
    /// maximum, and with [`BoxError::ArithmeticOverflow`] if the width or height
    /// does not fit in an `i32` (for example `Box2::of(i32::MIN, i32::MAX, 0, 0)`).
    pub fn of(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Result<Self, BoxError> {
        check_axes(min_x, max_x, min_y, max_y)?;
        Ok(Self::from_checked(min_x, max_x, min_y, max_y))
    }

    /// Caller has already run `check_axes` on these bounds.
    #[inline]
    pub(crate) fn from_checked(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            space: PhantomData,
        }
    }

    /// Copy of any box-like value in the same space.
    pub fn copy_of(other: &impl BoxBounds<S>) -> Result<Self, BoxError> {
        Self::of(
            other.minimum_x(),
            other.maximum_x(),
            other.minimum_y(),
            other.maximum_y(),
        )
    }

    pub fn builder() -> Box2Builder<S> {
        Box2Builder::new()
    }

    pub fn with_minimum_x(&self, value: i32) -> Result<Self, BoxError> {
        Self::of(value, self.max_x, self.min_y, self.max_y)
    }

    pub fn with_maximum_x(&self, value: i32) -> Result<Self, BoxError> {
        Self::of(self.min_x, value, self.min_y, self.max_y)
    }

    pub fn with_minimum_y(&self, value: i32) -> Result<Self, BoxError> {
        Self::of(self.min_x, self.max_x, value, self.max_y)
    }

    pub fn with_maximum_y(&self, value: i32) -> Result<Self, BoxError> {
        Self::of(self.min_x, self.max_x, self.min_y, value)
    }
}

impl<S> BoxBounds<S> for Box2<S> {
    #[inline]
    fn minimum_x(&self) -> i32 {
        self.min_x
    }
    #[inline]
    fn maximum_x(&self) -> i32 {
        self.max_x
    }
    #[inline]
    fn minimum_y(&self) -> i32 {
        self.min_y
    }
    #[inline]
    fn maximum_y(&self) -> i32 {
        self.max_y
    }
}

// Manual impls: derives would demand the same traits of `S`.

impl<S> Clone for Box2<S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Box2<S> {}

impl<S> PartialEq for Box2<S> {
    fn eq(&self, other: &Self) -> bool {
        self.min_x == other.min_x
            && self.max_x == other.max_x
            && self.min_y == other.min_y
            && self.max_y == other.max_y
    }
}

impl<S> Eq for Box2<S> {}

impl<S> Hash for Box2<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.min_x, self.max_x, self.min_y, self.max_y).hash(state);
    }
}

impl<S> fmt::Debug for Box2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Box2")
            .field("min_x", &self.min_x)
            .field("max_x", &self.max_x)
            .field("min_y", &self.min_y)
            .field("max_y", &self.max_y)
            .finish()
    }
}

/// Same text as `boxes::show`.
impl<S> fmt::Display for Box2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::boxes::show_to(self, f)
    }
}
