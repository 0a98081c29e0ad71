//! The capability every box-like input to `boxes` provides.

use std::fmt;

/// Names of the four bounds, used in error reports and by `Box2Builder`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    MinimumX,
    MaximumX,
    MinimumY,
    MaximumY,
}

impl Bound {
    pub fn name(self) -> &'static str {
        match self {
            Bound::MinimumX => "minimum_x",
            Bound::MaximumX => "maximum_x",
            Bound::MinimumY => "minimum_y",
            Bound::MaximumY => "maximum_y",
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read access to the four bounds of a box in coordinate space `S`.
///
/// Implementors guarantee `minimum_x() <= maximum_x()`, `minimum_y() <= maximum_y()`
/// and that both extents fit in an `i32`; the provided `width`/`height`
/// rely on it.
pub trait BoxBounds<S> {
    fn minimum_x(&self) -> i32;
    fn maximum_x(&self) -> i32;
    fn minimum_y(&self) -> i32;
    fn maximum_y(&self) -> i32;

    /// `maximum_x - minimum_x`, never negative.
    #[inline]
    fn width(&self) -> i32 {
        self.maximum_x() - self.minimum_x()
    }

    /// `maximum_y - minimum_y`, never negative.
    #[inline]
    fn height(&self) -> i32 {
        self.maximum_y() - self.minimum_y()
    }
}
