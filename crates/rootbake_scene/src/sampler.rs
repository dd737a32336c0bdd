//! World-space sampling.
//!
//! Each call advances the context, then reads. Group every bone needed at
//! one time into a single [`sample_world_positions`] call so the pose is
//! evaluated once per time.

use glam::Vec3;

use rootbake_animation::ChannelLocator;
use rootbake_core::{BakeError, BoundingBox, FrameTime, Result};

use crate::evaluator::EvaluationContext;
use crate::object::AnimatedObject;

/// World-space head position of `bone` at `time`.
pub fn sample_world_position(
    ctx: &mut EvaluationContext,
    object: &AnimatedObject,
    locator: &dyn ChannelLocator,
    bone: &str,
    time: FrameTime,
) -> Result<Vec3> {
    ctx.advance_to(object, locator, time);
    ctx.world_head(object, bone)
}

/// World-space head positions of several bones at the same `time`, in the
/// order given.
pub fn sample_world_positions(
    ctx: &mut EvaluationContext,
    object: &AnimatedObject,
    locator: &dyn ChannelLocator,
    bones: &[&str],
    time: FrameTime,
) -> Result<Vec<Vec3>> {
    ctx.advance_to(object, locator, time);
    bones.iter().map(|bone| ctx.world_head(object, bone)).collect()
}

/// World-space bounds of the posed skeleton at `time`.
pub fn sample_world_bounds(
    ctx: &mut EvaluationContext,
    object: &AnimatedObject,
    locator: &dyn ChannelLocator,
    time: FrameTime,
) -> Result<BoundingBox> {
    ctx.advance_to(object, locator, time);
    ctx.world_bounds(object).ok_or_else(|| BakeError::MissingBone {
        name: format!("<any bone of '{}'>", object.name),
    })
}
