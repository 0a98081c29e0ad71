//! Relations between boxes, and boxes derived from two others.

use crate::bounds::BoxBounds;
use crate::box2::Box2;
use crate::error::BoxError;

/// Half-open spans `[a0, a1)` and `[b0, b1)` share at least one point.
#[inline]
fn spans_intersect(a0: i32, a1: i32, b0: i32, b1: i32) -> bool {
    a0.max(b0) < a1.min(b1)
}

/// `a` and `b` share a point under half-open `[min, max)` semantics on both axes.
///
/// Symmetric. A box with zero width or height overlaps nothing, itself included.
pub fn overlaps<S>(a: &impl BoxBounds<S>, b: &impl BoxBounds<S>) -> bool {
    spans_intersect(a.minimum_x(), a.maximum_x(), b.minimum_x(), b.maximum_x())
        && spans_intersect(a.minimum_y(), a.maximum_y(), b.minimum_y(), b.maximum_y())
}

/// `b` lies within `a`, comparing closed bounds. Reflexive and transitive.
pub fn contains<S>(a: &impl BoxBounds<S>, b: &impl BoxBounds<S>) -> bool {
    let contain_x = b.minimum_x() >= a.minimum_x() && b.maximum_x() <= a.maximum_x();
    let contain_y = b.minimum_y() >= a.minimum_y() && b.maximum_y() <= a.maximum_y();
    contain_x && contain_y
}

/// `a` is no wider and no taller than `b`; positions are ignored.
pub fn could_fit_inside<S>(a: &impl BoxBounds<S>, b: &impl BoxBounds<S>) -> bool {
    a.width() <= b.width() && a.height() <= b.height()
}

/// `(x, y)` lies in `[min_x, max_x) × [min_y, max_y)`.
pub fn contains_point<S>(b: &impl BoxBounds<S>, x: i32, y: i32) -> bool {
    let contain_x = x >= b.minimum_x() && x < b.maximum_x();
    let contain_y = y >= b.minimum_y() && y < b.maximum_y();
    contain_x && contain_y
}

/// Smallest box containing both `a` and `b`.
///
/// Fails with [`BoxError::ArithmeticOverflow`] when the combined extent does
/// not fit in an `i32`, even though `a` and `b` are each valid.
pub fn containing<S>(a: &impl BoxBounds<S>, b: &impl BoxBounds<S>) -> Result<Box2<S>, BoxError> {
    Box2::of(
        a.minimum_x().min(b.minimum_x()),
        a.maximum_x().max(b.maximum_x()),
        a.minimum_y().min(b.minimum_y()),
        a.maximum_y().max(b.maximum_y()),
    )
}

/// Span between the inner edges of two spans, normalized so `min <= max`.
#[inline]
fn between(a0: i32, a1: i32, b0: i32, b1: i32) -> (i32, i32) {
    let near = a1.min(b1);
    let far = a0.max(b0);
    (near.min(far), near.max(far))
}

/// Box spanning the horizontal gap between `a` and `b`, with the vertical
/// bounds of `fit`. Fails like [`containing`] when the gap's extent overflows.
pub fn fit_between_horizontal<S>(
    fit: &impl BoxBounds<S>,
    a: &impl BoxBounds<S>,
    b: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    let (min_x, max_x) = between(a.minimum_x(), a.maximum_x(), b.minimum_x(), b.maximum_x());
    Box2::of(min_x, max_x, fit.minimum_y(), fit.maximum_y())
}

/// Box spanning the vertical gap between `a` and `b`, with the horizontal
/// bounds of `fit`. Fails like [`containing`] when the gap's extent overflows.
pub fn fit_between_vertical<S>(
    fit: &impl BoxBounds<S>,
    a: &impl BoxBounds<S>,
    b: &impl BoxBounds<S>,
) -> Result<Box2<S>, BoxError> {
    let (min_y, max_y) = between(a.minimum_y(), a.maximum_y(), b.minimum_y(), b.maximum_y());
    Box2::of(fit.minimum_x(), fit.maximum_x(), min_y, max_y)
}
