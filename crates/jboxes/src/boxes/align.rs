//! Alignment of an inner box against an outer box, and hollow-out.
//!
//! Every alignment keeps the inner box's width and height; only its position
//! changes. Offsets are measured from the chosen outer edge towards the inside
//! of the outer box and may be negative.

use crate::bounds::BoxBounds;
use crate::box2::Box2;
use crate::error::{add, require_non_negative, sub, BoxError};

/// Placement rule for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    /// Leave the inner box where it is on this axis.
    Keep,
    /// Minimum edge (left or top), inset by the offset.
    Start(i32),
    /// Maximum edge (right or bottom), inset by the offset.
    End(i32),
    /// Centered, rounding toward the minimum edge.
    Center,
}

/// Place the span `[inner_min, inner_max]` against `[outer_min, outer_max]`.
fn place(outer: (i32, i32), inner: (i32, i32), rule: Align) -> Result<(i32, i32), BoxError> {
    let (outer_min, outer_max) = outer;
    let (inner_min, inner_max) = inner;
    let size = inner_max - inner_min;
    match rule {
        Align::Keep => Ok(inner),
        Align::Start(offset) => {
            let min = add(outer_min, offset)?;
            Ok((min, add(min, size)?))
        }
        Align::End(offset) => {
            let max = sub(outer_max, offset)?;
            Ok((sub(max, size)?, max))
        }
        Align::Center => {
            let mid = add(outer_min, (outer_max - outer_min) / 2)?;
            let min = sub(mid, size / 2)?;
            Ok((min, add(min, size)?))
        }
    }
}

/// Align `inner` against `outer` with one rule per axis.
pub fn align<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
    horizontal: Align,
    vertical: Align,
) -> Result<Box2<S>, BoxError> {
    let (min_x, max_x) = place(
        (outer.minimum_x(), outer.maximum_x()),
        (inner.minimum_x(), inner.maximum_x()),
        horizontal,
    )?;
    let (min_y, max_y) = place(
        (outer.minimum_y(), outer.maximum_y()),
        (inner.minimum_y(), inner.maximum_y()),
        vertical,
    )?;
    Box2::of(min_x, max_x, min_y, max_y)
}

pub fn align_horizontally_left<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Start(0), Align::Keep)
}

pub fn align_horizontally_left_offset<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
    offset: i32,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Start(offset), Align::Keep)
}

pub fn align_horizontally_right<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::End(0), Align::Keep)
}

pub fn align_horizontally_right_offset<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
    offset: i32,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::End(offset), Align::Keep)
}

/// Horizontal center; the left and right gaps differ by at most one.
pub fn align_horizontally_center<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Center, Align::Keep)
}

pub fn align_vertically_top<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Keep, Align::Start(0))
}

pub fn align_vertically_top_offset<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
    offset: i32,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Keep, Align::Start(offset))
}

pub fn align_vertically_bottom<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Keep, Align::End(0))
}

pub fn align_vertically_bottom_offset<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
    offset: i32,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Keep, Align::End(offset))
}

/// Vertical center; the top and bottom gaps differ by at most one.
pub fn align_vertically_center<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Keep, Align::Center)
}

pub fn align_top_left<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Start(0), Align::Start(0))
}

pub fn align_top_left_offset<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
    offset_left: i32,
    offset_top: i32,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Start(offset_left), Align::Start(offset_top))
}

pub fn align_top_right<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::End(0), Align::Start(0))
}

pub fn align_top_right_offset<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
    offset_right: i32,
    offset_top: i32,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::End(offset_right), Align::Start(offset_top))
}

pub fn align_bottom_left<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Start(0), Align::End(0))
}

pub fn align_bottom_left_offset<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
    offset_left: i32,
    offset_bottom: i32,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Start(offset_left), Align::End(offset_bottom))
}

pub fn align_bottom_right<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::End(0), Align::End(0))
}

pub fn align_bottom_right_offset<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
    offset_right: i32,
    offset_bottom: i32,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::End(offset_right), Align::End(offset_bottom))
}

/// Horizontal center followed by vertical center.
pub fn align_center<S>(
    outer: &impl BoxBounds<S>,
    inner: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    align(outer, inner, Align::Center, Align::Center)
}

/// Clamp `x` into `[min, max]` (`min <= max` holds for box bounds).
#[inline]
fn clamp(x: i32, min: i32, max: i32) -> i32 {
    x.min(max).max(min)
}

/// Inset `outer` by the four offsets.
///
/// Each inset edge is clamped into the outer box on its axis. When opposing
/// offsets overlap, the far edge is pulled up to the near one, so the result
/// degenerates to zero width or height instead of inverting.
pub fn hollow_out<S>(
    outer: &impl BoxBounds<S>,
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
) -> Result<Box2<S>, BoxError> {
    require_non_negative(left, "left offset")?;
    require_non_negative(right, "right offset")?;
    require_non_negative(top, "top offset")?;
    require_non_negative(bottom, "bottom offset")?;

    let (ox0, ox1) = (outer.minimum_x(), outer.maximum_x());
    let (oy0, oy1) = (outer.minimum_y(), outer.maximum_y());
    let min_x = clamp(add(ox0, left)?, ox0, ox1);
    let max_x = clamp(sub(ox1, right)?, ox0, ox1);
    let min_y = clamp(add(oy0, top)?, oy0, oy1);
    let max_y = clamp(sub(oy1, bottom)?, oy0, oy1);
    Box2::of(min_x, max_x.max(min_x), min_y, max_y.max(min_y))
}

pub fn hollow_out_evenly<S>(outer: &impl BoxBounds<S>, offset: i32) -> Result<Box2<S>, BoxError> {
    hollow_out(outer, offset, offset, offset, offset)
}
