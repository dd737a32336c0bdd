//! Bake methods.
//!
//! The three methods share the per-frame sampling loop and the
//! decomposition; they differ only in how a frame's root height is
//! estimated.

use glam::Vec3;

use rootbake_animation::ChannelLocator;
use rootbake_core::{AxisMask, FrameTime, Result};
use rootbake_scene::{
    AnimatedObject, EvaluationContext, sample_world_bounds, sample_world_position,
    sample_world_positions,
};

use crate::decompose::{Decomposition, FrameSample, decompose};
use crate::options::{BakeMethod, BoneNames};

impl BakeMethod {
    /// Samples the main bone and the height estimate at one time. The
    /// context is advanced exactly once.
    pub fn sample_frame(
        self,
        ctx: &mut EvaluationContext,
        object: &AnimatedObject,
        locator: &dyn ChannelLocator,
        bones: &BoneNames,
        time: FrameTime,
    ) -> Result<FrameSample> {
        match self {
            BakeMethod::CopyData => {
                let main = sample_world_position(ctx, object, locator, &bones.main, time)?;
                Ok(FrameSample {
                    main,
                    height: main.z,
                })
            }
            BakeMethod::LowestBone => {
                let probes = bones.ground_probes();
                let mut names = Vec::with_capacity(probes.len() + 1);
                names.push(bones.main.as_str());
                names.extend(probes);

                let positions = sample_world_positions(ctx, object, locator, &names, time)?;
                let height = positions[1..]
                    .iter()
                    .map(|p| p.z)
                    .fold(f32::INFINITY, f32::min);
                Ok(FrameSample {
                    main: positions[0],
                    height,
                })
            }
            BakeMethod::BoundBox => {
                let bounds = sample_world_bounds(ctx, object, locator, time)?;
                let main = ctx.world_head(object, &bones.main)?;
                Ok(FrameSample {
                    main,
                    height: bounds.lowest_z(),
                })
            }
        }
    }

    /// Samples every time in order.
    pub fn sample_frames(
        self,
        ctx: &mut EvaluationContext,
        object: &AnimatedObject,
        locator: &dyn ChannelLocator,
        bones: &BoneNames,
        times: &[FrameTime],
    ) -> Result<Vec<FrameSample>> {
        times
            .iter()
            .map(|&time| self.sample_frame(ctx, object, locator, bones, time))
            .collect()
    }

    /// Samples all times and splits the main bone motion into root and
    /// residual world vectors.
    pub fn bake(
        self,
        ctx: &mut EvaluationContext,
        object: &AnimatedObject,
        locator: &dyn ChannelLocator,
        bones: &BoneNames,
        times: &[FrameTime],
        axes: AxisMask,
        start_point: Vec3,
    ) -> Result<Decomposition> {
        let samples = self.sample_frames(ctx, object, locator, bones, times)?;
        log::debug!(
            "Sampled {} frames of '{}' with {self:?}",
            samples.len(),
            object.clip.name
        );
        Ok(decompose(&samples, axes, self.rebases_height(), start_point))
    }
}
