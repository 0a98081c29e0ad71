//! Mutable box with individually settable bounds.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::bounds::{Bound, BoxBounds};
use crate::error::BoxError;

use super::types::check_axes;
use super::Box2;

/// A box whose bounds are set one at a time and validated on demand.
///
/// Lifecycle: uninitialized (no bounds) → partially initialized → initialized
/// (all four set). Setters never validate, so the box may pass through
/// inconsistent states while being assembled; `check_preconditions` and
/// `to_immutable` are where `min <= max` is enforced.
///
/// Mutation goes through `&mut self`; a `Box2Mut` shared between threads
/// needs a lock around it.
pub struct Box2Mut<S> {
    min_x: Option<i32>,
    max_x: Option<i32>,
    min_y: Option<i32>,
    max_y: Option<i32>,
    space: PhantomData<fn() -> S>,
}

impl<S> Box2Mut<S> {
    /// Uninitialized box.
    pub fn new() -> Self {
        Self {
            min_x: None,
            max_x: None,
            min_y: None,
            max_y: None,
            space: PhantomData,
        }
    }

    /// Fully initialized box; the bounds are not checked here.
    pub fn from_bounds(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x: Some(min_x),
            max_x: Some(max_x),
            min_y: Some(min_y),
            max_y: Some(max_y),
            space: PhantomData,
        }
    }

    /// Overwrite all four bounds with those of `other`.
    pub fn copy_from(&mut self, other: &impl BoxBounds<S>) -> &mut Self {
        self.min_x = Some(other.minimum_x());
        self.max_x = Some(other.maximum_x());
        self.min_y = Some(other.minimum_y());
        self.max_y = Some(other.maximum_y());
        self
    }

    pub fn set_minimum_x(&mut self, value: i32) -> &mut Self {
        self.min_x = Some(value);
        self
    }

    pub fn set_maximum_x(&mut self, value: i32) -> &mut Self {
        self.max_x = Some(value);
        self
    }

    pub fn set_minimum_y(&mut self, value: i32) -> &mut Self {
        self.min_y = Some(value);
        self
    }

    pub fn set_maximum_y(&mut self, value: i32) -> &mut Self {
        self.max_y = Some(value);
        self
    }

    pub fn minimum_x(&self) -> Result<i32, BoxError> {
        self.min_x.ok_or(BoxError::unset(Bound::MinimumX))
    }

    pub fn maximum_x(&self) -> Result<i32, BoxError> {
        self.max_x.ok_or(BoxError::unset(Bound::MaximumX))
    }

    pub fn minimum_y(&self) -> Result<i32, BoxError> {
        self.min_y.ok_or(BoxError::unset(Bound::MinimumY))
    }

    pub fn maximum_y(&self) -> Result<i32, BoxError> {
        self.max_y.ok_or(BoxError::unset(Bound::MaximumY))
    }

    pub fn is_initialized(&self) -> bool {
        self.min_x.is_some() && self.max_x.is_some() && self.min_y.is_some() && self.max_y.is_some()
    }

    /// Back to uninitialized.
    pub fn clear(&mut self) {
        self.min_x = None;
        self.max_x = None;
        self.min_y = None;
        self.max_y = None;
    }

    fn bounds(&self) -> Result<(i32, i32, i32, i32), BoxError> {
        Ok((
            self.minimum_x()?,
            self.maximum_x()?,
            self.minimum_y()?,
            self.maximum_y()?,
        ))
    }

    /// Fails with `IllegalState` if a bound is unset, else with
    /// `InvariantViolation` if either axis is inverted.
    pub fn check_preconditions(&self) -> Result<(), BoxError> {
        let (min_x, max_x, min_y, max_y) = self.bounds()?;
        check_axes(min_x, max_x, min_y, max_y)
    }

    pub fn to_immutable(&self) -> Result<Box2<S>, BoxError> {
        let (min_x, max_x, min_y, max_y) = self.bounds()?;
        Box2::of(min_x, max_x, min_y, max_y)
    }
}

impl<S> Default for Box2Mut<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for Box2Mut<S> {
    fn clone(&self) -> Self {
        Self {
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
            space: PhantomData,
        }
    }
}

impl<S> PartialEq for Box2Mut<S> {
    fn eq(&self, other: &Self) -> bool {
        self.min_x == other.min_x
            && self.max_x == other.max_x
            && self.min_y == other.min_y
            && self.max_y == other.max_y
    }
}

impl<S> Eq for Box2Mut<S> {}

impl<S> Hash for Box2Mut<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.min_x, self.max_x, self.min_y, self.max_y).hash(state);
    }
}

impl<S> fmt::Debug for Box2Mut<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Box2Mut")
            .field("min_x", &self.min_x)
            .field("max_x", &self.max_x)
            .field("min_y", &self.min_y)
            .field("max_y", &self.max_y)
            .finish()
    }
}
