//! Partition a box along one axis.

use crate::bounds::BoxBounds;
use crate::box2::{Box2, Box2HorizontalSplit, Box2VerticalSplit};
use crate::error::{add, BoxError};
use crate::log::trace;

/// Clamp a cut offset into `[0, size]`.
fn clamp_cut(offset: i32, size: i32) -> i32 {
    let cut = offset.clamp(0, size);
    if cut != offset {
        trace!(offset, size, cut, "split offset clamped");
    }
    cut
}

/// Cut `b` at `height` below its top edge; `height` is clamped to `[0, b.height()]`.
///
/// `upper.height() + lower.height() == b.height()` and both keep the width of `b`.
pub fn split_along_horizontal<S>(
    b: &impl BoxBounds<S>,
    height: i32,
) -> Result<Box2HorizontalSplit<S>, BoxError> {
    let cut = add(b.minimum_y(), clamp_cut(height, b.height()))?;
    let upper = Box2::of(b.minimum_x(), b.maximum_x(), b.minimum_y(), cut)?;
    let lower = Box2::of(b.minimum_x(), b.maximum_x(), cut, b.maximum_y())?;
    Ok(Box2HorizontalSplit::new(upper, lower))
}

/// Cut `b` at `width` right of its left edge; `width` is clamped to `[0, b.width()]`.
pub fn split_along_vertical<S>(
    b: &impl BoxBounds<S>,
    width: i32,
) -> Result<Box2VerticalSplit<S>, BoxError> {
    let cut = add(b.minimum_x(), clamp_cut(width, b.width()))?;
    let left = Box2::of(b.minimum_x(), cut, b.minimum_y(), b.maximum_y())?;
    let right = Box2::of(cut, b.maximum_x(), b.minimum_y(), b.maximum_y())?;
    Ok(Box2VerticalSplit::new(left, right))
}
