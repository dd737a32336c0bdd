//! rootbake: root-motion extraction for skeletal animation clips.
//!
//! Re-exports the member crates and the types most callers need.

pub use rootbake_animation as animation;
pub use rootbake_bake as bake;
pub use rootbake_core as types;
pub use rootbake_scene as scene;

pub use glam;

pub use rootbake_animation::{AnimationClip, ChannelLayout, ChannelLocator, KeyframeChannel};
pub use rootbake_bake::{
    BakeMethod, BakeOptions, BakeReport, BatchReport, BoneNames, CleanupHook, ClipOutcome,
    Decomposition, NamingHook, RootMotionBaker,
};
pub use rootbake_core::{Axis, AxisMask, BakeError, BoundingBox, FrameTime, Result};
pub use rootbake_scene::{AnimatedObject, Bone, BoneHandle, EvaluationContext, Skeleton, Transform};

/// Crate version, for log banners.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
