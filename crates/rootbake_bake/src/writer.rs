//! Keyframe writer.
//!
//! Creates the root bone and its channels, rewrites the main bone's key
//! values in place and reparents the main bone under the root.
//!
//! Writes are not transactional: if a step fails after an earlier one
//! succeeded, the earlier mutation stays.

use glam::Vec3;

use rootbake_animation::{AnimationClip, ChannelLocator, ensure_channel, translation_channels};
use rootbake_core::{Axis, BakeError, Result};
use rootbake_scene::{Bone, BoneHandle, Skeleton};

/// Extent of a freshly created root bone along +Z.
pub const ROOT_BONE_LENGTH: f32 = 0.3;

/// Adds an unparented root bone with its head at the origin, pointing up.
pub fn create_root_bone(skeleton: &mut Skeleton, name: &str) -> Result<BoneHandle> {
    let bone = Bone::from_head_tail(name, Vec3::ZERO, Vec3::new(0.0, 0.0, ROOT_BONE_LENGTH));
    let handle = skeleton.add_bone(bone, None)?;
    log::debug!("Created root bone '{name}'");
    Ok(handle)
}

/// Keys `bone`'s x/y/z translation at each time with the matching local
/// vector. Times are used as given. Channels are created when absent.
pub fn insert_translation_keys(
    clip: &mut AnimationClip,
    locator: &dyn ChannelLocator,
    bone: &str,
    times: &[f32],
    values: &[Vec3],
) {
    for axis in Axis::ALL {
        let index = ensure_channel(clip, locator, bone, axis);
        if let Some(channel) = clip.channel_mut(index) {
            for (time, value) in times.iter().zip(values) {
                channel.keys.insert(*time, axis.component(*value));
            }
        }
    }
}

/// Overwrites the values of `bone`'s existing translation keys, key by key.
/// Times and key counts are left unchanged.
pub fn overwrite_translation_values(
    clip: &mut AnimationClip,
    locator: &dyn ChannelLocator,
    bone: &str,
    values: &[Vec3],
) -> Result<()> {
    let indices = translation_channels(clip, locator, bone)?;
    for (axis, index) in Axis::ALL.into_iter().zip(indices) {
        let channel = clip
            .channel_mut(index)
            .ok_or_else(|| BakeError::MissingChannel {
                bone: bone.to_string(),
                axis,
            })?;
        if channel.keys.len() != values.len() {
            return Err(BakeError::InconsistentSampleTimes {
                bone: bone.to_string(),
                axis,
            });
        }
        for (slot, value) in channel.keys.values_mut().zip(values) {
            *slot = axis.component(*value);
        }
    }
    Ok(())
}

/// Edit-time reparent of `child` under `parent`, both by name.
pub fn reparent(skeleton: &mut Skeleton, child: &str, parent: &str) -> Result<()> {
    let child_handle = skeleton.require(child)?;
    let parent_handle = skeleton.require(parent)?;
    skeleton.set_parent(child_handle, Some(parent_handle))
}
