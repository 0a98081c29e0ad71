//! Resizing and scaling about an anchor.
//!
//! The anchor names the handle being dragged: `set_size_from_top_left` moves
//! the top-left corner and keeps the bottom-right corner where it was.
//! The new size is first laid out at the box's own top-left, then aligned
//! against the original box on the corner opposite the anchor. For `Center`
//! that alignment is `align_center`, with its rounding.

use crate::bounds::BoxBounds;
use crate::box2::Box2;
use crate::error::{add, require_non_negative, BoxError};

use super::align::{align, Align};

/// Handle of a resize or scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
        Anchor::Center,
    ];

    /// Alignment rules that keep the opposite corner (or the center) fixed.
    fn fixed_rules(self) -> (Align, Align) {
        match self {
            Anchor::TopLeft => (Align::End(0), Align::End(0)),
            Anchor::TopRight => (Align::Start(0), Align::End(0)),
            Anchor::BottomLeft => (Align::End(0), Align::Start(0)),
            Anchor::BottomRight => (Align::Start(0), Align::Start(0)),
            Anchor::Center => (Align::Center, Align::Center),
        }
    }
}

/// Give `b` the size `width × height`, dragging the `anchor` handle.
pub fn set_size_from<S>(
    b: &impl BoxBounds<S>,
    anchor: Anchor,
    width: i32,
    height: i32,
) -> Result<Box2<S>, BoxError> {
    require_non_negative(width, "width")?;
    require_non_negative(height, "height")?;
    let sized: Box2<S> = Box2::of(
        b.minimum_x(),
        add(b.minimum_x(), width)?,
        b.minimum_y(),
        add(b.minimum_y(), height)?,
    )?;
    let (horizontal, vertical) = anchor.fixed_rules();
    align(b, &sized, horizontal, vertical)
}

/// Grow (or shrink, for negative deltas) `b` by `(dx, dy)`, dragging the
/// `anchor` handle. The size never goes below zero.
pub fn scale_from<S>(
    b: &impl BoxBounds<S>,
    anchor: Anchor,
    dx: i32,
    dy: i32,
) -> Result<Box2<S>, BoxError> {
    let width = add(b.width(), dx)?.max(0);
    let height = add(b.height(), dy)?.max(0);
    set_size_from(b, anchor, width, height)
}

pub fn set_size_from_top_left<S>(
    b: &impl BoxBounds<S>,
    width: i32,
    height: i32,
) -> Result<Box2<S>, BoxError> {
    set_size_from(b, Anchor::TopLeft, width, height)
}

pub fn set_size_from_top_right<S>(
    b: &impl BoxBounds<S>,
    width: i32,
    height: i32,
) -> Result<Box2<S>, BoxError> {
    set_size_from(b, Anchor::TopRight, width, height)
}

pub fn set_size_from_bottom_left<S>(
    b: &impl BoxBounds<S>,
    width: i32,
    height: i32,
) -> Result<Box2<S>, BoxError> {
    set_size_from(b, Anchor::BottomLeft, width, height)
}

pub fn set_size_from_bottom_right<S>(
    b: &impl BoxBounds<S>,
    width: i32,
    height: i32,
) -> Result<Box2<S>, BoxError> {
    set_size_from(b, Anchor::BottomRight, width, height)
}

pub fn set_size_from_center<S>(
    b: &impl BoxBounds<S>,
    width: i32,
    height: i32,
) -> Result<Box2<S>, BoxError> {
    set_size_from(b, Anchor::Center, width, height)
}

pub fn scale_from_top_left<S>(
    b: &impl BoxBounds<S>,
    dx: i32,
    dy: i32,
) -> Result<Box2<S>, BoxError> {
    scale_from(b, Anchor::TopLeft, dx, dy)
}

pub fn scale_from_top_right<S>(
    b: &impl BoxBounds<S>,
    dx: i32,
    dy: i32,
) -> Result<Box2<S>, BoxError> {
    scale_from(b, Anchor::TopRight, dx, dy)
}

pub fn scale_from_bottom_left<S>(
    b: &impl BoxBounds<S>,
    dx: i32,
    dy: i32,
) -> Result<Box2<S>, BoxError> {
    scale_from(b, Anchor::BottomLeft, dx, dy)
}

pub fn scale_from_bottom_right<S>(
    b: &impl BoxBounds<S>,
    dx: i32,
    dy: i32,
) -> Result<Box2<S>, BoxError> {
    scale_from(b, Anchor::BottomRight, dx, dy)
}

pub fn scale_from_center<S>(
    b: &impl BoxBounds<S>,
    dx: i32,
    dy: i32,
) -> Result<Box2<S>, BoxError> {
    scale_from(b, Anchor::Center, dx, dy)
}
