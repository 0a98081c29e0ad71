//! Box algorithms.
//!
//! Purpose
//! - Pure functions over `BoxBounds<S>` inputs that return fresh `Box2<S>` values.
//! - Every bound computation is overflow-checked (`BoxError::ArithmeticOverflow`).
//!
//! Conventions
//! - y grows downwards: "top" is `minimum_y`, "bottom" is `maximum_y`.
//! - Point containment and overlap use half-open intervals `[min, max)`;
//!   box containment compares closed bounds `[min, max]`.
//! - Center placement rounds toward the minimum edge, so for odd sizes the
//!   gaps to the two opposing outer edges may differ by one.
//!
//! Layout
//! - `align`: edge/corner/center alignment and hollow-out.
//! - `resize`: set-size and scale about an anchor.
//! - `relate`: overlap, containment, enclosing and in-between boxes.
//! - `split`: partition along one axis.

use std::fmt;

use crate::bounds::BoxBounds;
use crate::box2::Box2;
use crate::error::{add, BoxError};

mod align;
mod relate;
mod resize;
mod split;

pub use align::{
    align, align_bottom_left, align_bottom_left_offset, align_bottom_right,
    align_bottom_right_offset, align_center, align_horizontally_center, align_horizontally_left,
    align_horizontally_left_offset, align_horizontally_right, align_horizontally_right_offset,
    align_top_left, align_top_left_offset, align_top_right, align_top_right_offset,
    align_vertically_bottom, align_vertically_bottom_offset, align_vertically_center,
    align_vertically_top, align_vertically_top_offset, hollow_out, hollow_out_evenly, Align,
};
pub use relate::{
    containing, contains, contains_point, could_fit_inside, fit_between_horizontal,
    fit_between_vertical, overlaps,
};
pub use resize::{
    scale_from, scale_from_bottom_left, scale_from_bottom_right, scale_from_center,
    scale_from_top_left, scale_from_top_right, set_size_from, set_size_from_bottom_left,
    set_size_from_bottom_right, set_size_from_center, set_size_from_top_left,
    set_size_from_top_right, Anchor,
};
pub use split::{split_along_horizontal, split_along_vertical};

/// Re-tag a box as belonging to coordinate space `T`.
///
/// No computation happens. Mixing coordinate spaces is a classic source of
/// hard-to-find bugs; every call site of `cast` is a place where the caller
/// vouches that the two spaces agree.
#[inline]
pub fn cast<S, T>(b: &Box2<S>) -> Box2<T> {
    Box2::from_checked(b.minimum_x(), b.maximum_x(), b.minimum_y(), b.maximum_y())
}

/// Box with top-left corner `(x, y)` and size `width × height`.
pub fn create<S>(x: i32, y: i32, width: i32, height: i32) -> Result<Box2<S>, BoxError> {
    Box2::of(x, add(x, width)?, y, add(y, height)?)
}

/// Translate by `(dx, dy)`.
pub fn move_relative<S>(b: &impl BoxBounds<S>, dx: i32, dy: i32) -> Result<Box2<S>, BoxError> {
    Box2::of(
        add(b.minimum_x(), dx)?,
        add(b.maximum_x(), dx)?,
        add(b.minimum_y(), dy)?,
        add(b.maximum_y(), dy)?,
    )
}

/// Same size, top-left corner moved to `(x, y)`.
pub fn move_absolute<S>(b: &impl BoxBounds<S>, x: i32, y: i32) -> Result<Box2<S>, BoxError> {
    create(x, y, b.width(), b.height())
}

pub fn move_to_origin<S>(b: &impl BoxBounds<S>) -> Result<Box2<S>, BoxError> {
    move_absolute(b, 0, 0)
}

/// `"{width}x{height} {minimum_x}+{minimum_y}"`, for debugging and tests.
pub fn show<S>(b: &impl BoxBounds<S>) -> String {
    let mut out = String::with_capacity(32);
    // Writing into a String cannot fail.
    let _ = show_to(b, &mut out);
    out
}

/// Append the `show` rendering of `b` to `sink`.
pub fn show_to<S, W: fmt::Write + ?Sized>(b: &impl BoxBounds<S>, sink: &mut W) -> fmt::Result {
    write!(
        sink,
        "{}x{} {}+{}",
        b.width(),
        b.height(),
        b.minimum_x(),
        b.minimum_y()
    )
}
