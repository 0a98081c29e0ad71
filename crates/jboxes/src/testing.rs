//! Test-only fixtures: a coordinate-space tag and proptest strategies.

use proptest::prelude::*;

use crate::box2::Box2;
use crate::boxes;

/// Tag for screen-space boxes in tests.
#[derive(Debug)]
pub(crate) enum Screen {}

/// Tag for a second, incompatible space.
#[derive(Debug)]
pub(crate) enum Page {}

pub(crate) fn bx(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Box2<Screen> {
    Box2::of(min_x, max_x, min_y, max_y).expect("valid test box")
}

/// Valid boxes with corners in `[-400, 400]` and sizes in `[0, 400]`.
pub(crate) fn arb_box() -> impl Strategy<Value = Box2<Screen>> {
    (-400..=400i32, -400..=400i32, 0..=400i32, 0..=400i32)
        .prop_map(|(x, y, w, h)| boxes::create(x, y, w, h).expect("in-range box"))
}

/// Valid boxes with positive width and height.
pub(crate) fn arb_solid_box() -> impl Strategy<Value = Box2<Screen>> {
    (-400..=400i32, -400..=400i32, 1..=400i32, 1..=400i32)
        .prop_map(|(x, y, w, h)| boxes::create(x, y, w, h).expect("in-range box"))
}
