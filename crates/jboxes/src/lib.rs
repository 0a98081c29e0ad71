//! Exact, overflow-checked arithmetic on axis-aligned integer boxes.
//!
//! Purpose
//! - Layout geometry: align, resize, scale, split, contain and overlap-test
//!   rectangles with `i32` bounds, failing loudly instead of wrapping.
//! - Keep boxes from different coordinate spaces apart at compile time via a
//!   zero-sized space tag (`Box2<S>`); `boxes::cast` is the only way across.
//!
//! Layout
//! - `box2`: the value types (`Box2`, `Box2Builder`, `Box2Mut`, split pairs).
//! - `boxes`: the algorithm catalogue, generic over `BoxBounds<S>`.
//! - `rand`: reproducible random boxes for property checks and benches.
//!
//! Threading
//! - `Box2` is an immutable `Copy` value and is `Send + Sync` for every tag.
//!   `Box2Mut` and `Box2Builder` are plain mutable structs; sharing one across
//!   threads for mutation needs external synchronization.

pub mod bounds;
pub mod box2;
pub mod boxes;
pub mod error;
mod log;
pub mod rand;

#[cfg(test)]
mod testing;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bounds::{Bound, BoxBounds};
pub use box2::{Box2, Box2Builder, Box2HorizontalSplit, Box2Mut, Box2VerticalSplit};
pub use error::BoxError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bounds::{Bound, BoxBounds};
    pub use crate::box2::{Box2, Box2Builder, Box2HorizontalSplit, Box2Mut, Box2VerticalSplit};
    pub use crate::boxes::{self, Anchor};
    pub use crate::error::BoxError;
    pub use crate::rand::{draw_box, BoxSampler, BoxSamplerCfg, ReplayToken};
}
