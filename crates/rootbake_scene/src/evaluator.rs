//! Pose evaluation.
//!
//! An [`EvaluationContext`] plays the role of the host's scene clock for one
//! animated object: advancing it to a time evaluates every bone's
//! translation channels and propagates pose matrices down the hierarchy,
//! parents before children. All reads between two advances see the same
//! pose. Contexts are independent of each other, so separate objects can be
//! evaluated with separate contexts.

use glam::{Affine3A, Vec3};
use slotmap::SecondaryMap;

use rootbake_animation::{ChannelLocator, sample_translation};
use rootbake_core::{BakeError, BoundingBox, FrameTime, Result};

use crate::BoneHandle;
use crate::object::AnimatedObject;

#[derive(Debug, Clone)]
pub struct EvaluationContext {
    time: FrameTime,
    /// Posed bone-to-object matrices at `time`.
    pose: SecondaryMap<BoneHandle, Affine3A>,
    object_world: Affine3A,
    evaluated: bool,
}

impl EvaluationContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            time: FrameTime::START,
            pose: SecondaryMap::new(),
            object_world: Affine3A::IDENTITY,
            evaluated: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn current_time(&self) -> FrameTime {
        self.time
    }

    #[inline]
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// Steps the clock to `time` and evaluates the object's pose there.
    pub fn advance_to(
        &mut self,
        object: &AnimatedObject,
        locator: &dyn ChannelLocator,
        time: FrameTime,
    ) {
        let t = time.value();
        self.pose.clear();

        for handle in object.skeleton.walk() {
            let Some(bone) = object.skeleton.get(handle) else {
                continue;
            };
            let parent_pose = bone
                .parent()
                .and_then(|p| self.pose.get(p).copied())
                .unwrap_or(Affine3A::IDENTITY);
            let location = sample_translation(&object.clip, locator, &bone.name, t);
            let pose = parent_pose * *bone.rest() * Affine3A::from_translation(location);
            self.pose.insert(handle, pose);
        }

        self.object_world = object.world_matrix();
        self.time = time;
        self.evaluated = true;
    }

    /// Returns the clock to the first frame and drops the evaluated pose.
    pub fn reset(&mut self) {
        self.time = FrameTime::START;
        self.pose.clear();
        self.object_world = Affine3A::IDENTITY;
        self.evaluated = false;
    }

    fn posed(&self, object: &AnimatedObject, bone: &str) -> Result<Affine3A> {
        let handle = object.skeleton.require(bone)?;
        self.pose
            .get(handle)
            .copied()
            .ok_or_else(|| BakeError::MissingBone {
                name: bone.to_string(),
            })
    }

    /// World-space head of `bone` in the evaluated pose.
    pub fn world_head(&self, object: &AnimatedObject, bone: &str) -> Result<Vec3> {
        let pose = self.posed(object, bone)?;
        Ok(self.object_world.transform_point3(pose.translation.into()))
    }

    /// World-space axis-aligned box of the posed skeleton (heads and tails).
    ///
    /// The box is fitted in object space, then its eight corners are moved
    /// through the object matrix.
    #[must_use]
    pub fn world_bounds(&self, object: &AnimatedObject) -> Option<BoundingBox> {
        let points = object.skeleton.iter().filter_map(|(handle, bone)| {
            let pose = self.pose.get(handle)?;
            Some([
                Vec3::from(pose.translation),
                pose.transform_point3(bone.tail_local()),
            ])
        });
        let local = BoundingBox::from_points(points.flatten())?;
        Some(local.transform(&self.object_world))
    }
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::new()
    }
}
