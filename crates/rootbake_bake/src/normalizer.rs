use glam::Vec3;

use rootbake_animation::ChannelLocator;
use rootbake_core::{FrameTime, Result};
use rootbake_scene::{AnimatedObject, EvaluationContext, sample_world_positions};

use crate::options::BoneNames;

/// Ground point between the feet on the first frame.
///
/// The midpoint of the two foot heads at frame 1, projected onto z = 0.
pub fn feet_start_point(
    ctx: &mut EvaluationContext,
    object: &AnimatedObject,
    locator: &dyn ChannelLocator,
    bones: &BoneNames,
) -> Result<Vec3> {
    let feet = sample_world_positions(ctx, object, locator, &bones.feet(), FrameTime::START)?;
    let mid = (feet[0] + feet[1]) * 0.5;
    Ok(Vec3::new(mid.x, mid.y, 0.0))
}

/// Reference point the root trajectory starts from.
pub fn start_point(
    ctx: &mut EvaluationContext,
    object: &AnimatedObject,
    locator: &dyn ChannelLocator,
    bones: &BoneNames,
    start_at_feet: bool,
) -> Result<Vec3> {
    if start_at_feet {
        feet_start_point(ctx, object, locator, bones)
    } else {
        Ok(Vec3::ZERO)
    }
}
