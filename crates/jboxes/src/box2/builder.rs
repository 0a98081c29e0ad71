//! Staged construction of an immutable box.

use std::fmt;
use std::marker::PhantomData;

use crate::bounds::{Bound, BoxBounds};
use crate::error::BoxError;

use super::types::check_axes;
use super::Box2;

/// Staged construction of a `Box2`: all four bounds must be set before `build`.
pub struct Box2Builder<S> {
    min_x: Option<i32>,
    max_x: Option<i32>,
    min_y: Option<i32>,
    max_y: Option<i32>,
    space: PhantomData<fn() -> S>,
}

impl<S> Box2Builder<S> {
    pub fn new() -> Self {
        Self {
            min_x: None,
            max_x: None,
            min_y: None,
            max_y: None,
            space: PhantomData,
        }
    }

    /// Set all four bounds from an existing box.
    pub fn from(&mut self, other: &impl BoxBounds<S>) -> &mut Self {
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

    /// Missing bounds are reported in the order min x, min y, max x, max y.
    pub fn build(&self) -> Result<Box2<S>, BoxError> {
        let min_x = self.min_x.ok_or(BoxError::unset(Bound::MinimumX))?;
        let min_y = self.min_y.ok_or(BoxError::unset(Bound::MinimumY))?;
        let max_x = self.max_x.ok_or(BoxError::unset(Bound::MaximumX))?;
        let max_y = self.max_y.ok_or(BoxError::unset(Bound::MaximumY))?;
        check_axes(min_x, max_x, min_y, max_y)?;
        Ok(Box2::from_checked(min_x, max_x, min_y, max_y))
    }
}

impl<S> Default for Box2Builder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for Box2Builder<S> {
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

impl<S> fmt::Debug for Box2Builder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Box2Builder")
            .field("min_x", &self.min_x)
            .field("max_x", &self.max_x)
            .field("min_y", &self.min_y)
            .field("max_y", &self.max_y)
            .finish()
    }
}
