//! JSON shapes printed by the subcommands.

use jboxes::boxes;
use jboxes::BoxBounds;
use serde::Serialize;

use crate::args::Layout;

/// A box as printed: bounds, derived size, and the `show` rendering.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct BoxOut {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
    pub width: i32,
    pub height: i32,
    pub show: String,
}

impl BoxOut {
    pub fn of(b: &impl BoxBounds<Layout>) -> Self {
        Self {
            min_x: b.minimum_x(),
            max_x: b.maximum_x(),
            min_y: b.minimum_y(),
            max_y: b.maximum_y(),
            width: b.width(),
            height: b.height(),
            show: boxes::show(b),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SplitOut {
    Horizontal { upper: BoxOut, lower: BoxOut },
    Vertical { left: BoxOut, right: BoxOut },
}

#[derive(Debug, Serialize)]
pub struct RelateOut {
    pub overlaps: bool,
    pub a_contains_b: bool,
    pub b_contains_a: bool,
    pub a_fits_in_b: bool,
    pub b_fits_in_a: bool,
    pub containing: BoxOut,
}

#[derive(Debug, Serialize)]
pub struct SampleOut {
    pub seed: u64,
    pub index: u64,
    #[serde(rename = "box")]
    pub bx: BoxOut,
}
