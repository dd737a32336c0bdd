use glam::{Affine3A, Vec3};

use rootbake_animation::{AnimationClip, ChannelLocator, translation_channels};
use rootbake_core::{Axis, Result};

use crate::skeleton::Skeleton;
use crate::transform::Transform;

/// A skeleton instance with an object transform and one active clip.
#[derive(Debug, Clone)]
pub struct AnimatedObject {
    pub name: String,
    pub skeleton: Skeleton,
    pub transform: Transform,
    pub clip: AnimationClip,
}

impl AnimatedObject {
    #[must_use]
    pub fn new(name: impl Into<String>, skeleton: Skeleton, clip: AnimationClip) -> Self {
        Self {
            name: name.into(),
            skeleton,
            transform: Transform::IDENTITY,
            clip,
        }
    }

    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> Affine3A {
        self.transform.matrix()
    }

    /// Multiplies `bone`'s x/y/z translation key values by the object scale
    /// components, so the motion keeps its size once the scale is applied.
    pub fn scale_channel_intensity(
        &mut self,
        bone: &str,
        locator: &dyn ChannelLocator,
    ) -> Result<()> {
        let channels = translation_channels(&self.clip, locator, bone)?;
        let scale = self.transform.scale;

        for (axis, index) in Axis::ALL.into_iter().zip(channels) {
            let factor = axis.component(scale);
            if let Some(channel) = self.clip.channel_mut(index) {
                for value in channel.keys.values_mut() {
                    *value *= factor;
                }
            }
        }
        log::debug!("Scaled '{bone}' key intensity by {scale} in '{}'", self.clip.name);
        Ok(())
    }

    /// Bakes the object transform into the skeleton's rest pose and resets
    /// it to identity.
    ///
    /// Bone heads move through the object matrix and bone frames take the
    /// object rotation. Scale only affects positions and lengths, never the
    /// bone frames, so translation keys must be rescaled separately (see
    /// [`AnimatedObject::scale_channel_intensity`]).
    pub fn apply_transform(&mut self) {
        if self.transform.is_identity() {
            return;
        }

        let world = self.world_matrix();
        let rotation = self.transform.rotation;
        let order = self.skeleton.walk();

        let targets: Vec<_> = order
            .iter()
            .filter_map(|&handle| {
                let bone = self.skeleton.get(handle)?;
                let rest = self.skeleton.rest_object_matrix(handle);
                let (_, bone_rotation, head) = rest.to_scale_rotation_translation();
                let tail = rest.transform_point3(bone.tail_local());

                let new_head = world.transform_point3(head);
                let new_length = world.transform_point3(tail).distance(new_head);
                let matrix =
                    Affine3A::from_rotation_translation(rotation * bone_rotation, new_head);
                Some((handle, matrix, new_length))
            })
            .collect();

        // Parents come first in `order`, so each parent is already in place
        // when its children are re-expressed relative to it.
        for (handle, matrix, length) in targets {
            self.skeleton.set_rest_object_matrix(handle, matrix);
            self.skeleton.set_length(handle, length);
        }

        log::debug!(
            "Applied object transform of '{}' to {} bones",
            self.name,
            self.skeleton.len()
        );
        self.transform = Transform::IDENTITY;
    }

    /// Object-space rest head of a bone.
    #[must_use]
    pub fn rest_head(&self, bone: &str) -> Option<Vec3> {
        let handle = self.skeleton.find(bone)?;
        Some(self.skeleton.rest_object_matrix(handle).translation.into())
    }
}
