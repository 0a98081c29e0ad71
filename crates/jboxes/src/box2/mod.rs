//! Box value types.
//!
//! - `Box2`: immutable box, `min <= max` on both axes, validated at construction.
//! - `Box2Builder`: staged construction, every bound required before `build`.
//! - `Box2Mut`: reusable mutable box, validated only when finalized.
//! - `Box2HorizontalSplit`, `Box2VerticalSplit`: results of the split algorithms.

mod builder;
mod mutable;
mod split;
mod types;

pub use builder::Box2Builder;
pub use mutable::Box2Mut;
pub use split::{Box2HorizontalSplit, Box2VerticalSplit};
pub use types::Box2;

#[cfg(test)]
mod tests;
