//! Core types shared by the rootbake crates.
//!
//! - [`errors`]: the [`BakeError`] type and `Result` alias
//! - [`axis`]: translation axes and axis selections
//! - [`time`]: frame/sub-frame sample times
//! - [`bounds`]: axis-aligned bounding boxes

pub mod axis;
pub mod bounds;
pub mod errors;
pub mod time;

pub use axis::{Axis, AxisMask};
pub use bounds::BoundingBox;
pub use errors::{BakeError, Result};
pub use time::FrameTime;
