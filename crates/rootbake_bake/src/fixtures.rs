//! Ready-made test rigs.
//!
//! A small Mixamo-style biped (Z up, facing -Y) whose hips carry all of
//! the world translation. Used by the integration tests and the demo app.
//!
//! | bone            | head               | parent     |
//! |-----------------|--------------------|------------|
//! | Hips            | (0, 0, 1.0)        | -          |
//! | Spine           | (0, 0, 1.1)        | Hips       |
//! | HeadTop_End     | (0, 0, 1.75)       | Spine      |
//! | Left/RightHand  | (±0.45, 0, 1.0)    | Spine      |
//! | Left/RightFoot  | (±0.1, 0, 0.1)     | Hips       |
//! | Left/RightToe   | (±0.1, -0.18, 0.0) | foot       |

use glam::Vec3;

use rootbake_animation::{AnimationClip, ChannelLayout, ensure_channel, locator_for};
use rootbake_core::{Axis, Result};
use rootbake_scene::{AnimatedObject, Bone, BoneHandle, Skeleton};

use crate::options::BoneNames;

pub const HIPS_HEAD: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Adds a bone from object-space head and tail points.
pub fn place_bone(
    skeleton: &mut Skeleton,
    name: &str,
    head: Vec3,
    tail: Vec3,
    parent: Option<BoneHandle>,
) -> Result<BoneHandle> {
    let bone = Bone::from_head_tail(name, head, tail);
    let object_rest = *bone.rest();
    let handle = skeleton.add_bone(bone, parent)?;
    skeleton.set_rest_object_matrix(handle, object_rest);
    Ok(handle)
}

/// Builds the biped using the bone names in `names`.
pub fn biped_skeleton(names: &BoneNames) -> Result<Skeleton> {
    let mut s = Skeleton::new();

    let hips = place_bone(&mut s, &names.main, HIPS_HEAD, Vec3::new(0.0, 0.0, 1.1), None)?;
    let spine = place_bone(
        &mut s,
        &names.spine,
        Vec3::new(0.0, 0.0, 1.1),
        Vec3::new(0.0, 0.0, 1.3),
        Some(hips),
    )?;
    place_bone(
        &mut s,
        &names.head_top,
        Vec3::new(0.0, 0.0, 1.75),
        Vec3::new(0.0, 0.0, 1.85),
        Some(spine),
    )?;

    for (side, hand, foot, toe) in [
        (1.0, &names.left_hand, &names.left_foot, &names.left_toe),
        (-1.0, &names.right_hand, &names.right_foot, &names.right_toe),
    ] {
        place_bone(
            &mut s,
            hand,
            Vec3::new(side * 0.45, 0.0, 1.0),
            Vec3::new(side * 0.45, 0.0, 0.9),
            Some(spine),
        )?;
        let foot = place_bone(
            &mut s,
            foot,
            Vec3::new(side * 0.1, 0.0, 0.1),
            Vec3::new(side * 0.1, -0.18, 0.0),
            Some(hips),
        )?;
        place_bone(
            &mut s,
            toe,
            Vec3::new(side * 0.1, -0.18, 0.0),
            Vec3::new(side * 0.1, -0.25, 0.0),
            Some(foot),
        )?;
    }
    Ok(s)
}

/// Keys the main bone so its head moves by each world offset from rest.
///
/// `offsets` pairs a key time with the head's displacement from its rest
/// position, in object space.
pub fn main_bone_clip(
    name: &str,
    skeleton: &Skeleton,
    names: &BoneNames,
    offsets: &[(f32, Vec3)],
    layout: ChannelLayout,
) -> Result<AnimationClip> {
    let handle = skeleton.require(&names.main)?;
    let to_local = skeleton.rest_object_matrix(handle).inverse();
    let locator = locator_for(layout);

    let mut clip = AnimationClip::new(name);
    for axis in Axis::ALL {
        let index = ensure_channel(&mut clip, locator.as_ref(), &names.main, axis);
        if let Some(channel) = clip.channel_mut(index) {
            for &(time, offset) in offsets {
                let local = to_local.transform_vector3(offset);
                channel.keys.insert(time, axis.component(local));
            }
        }
    }
    Ok(clip)
}

/// Hips path of a short walk: forward along -Y with a sway and a bob.
#[must_use]
pub fn walk_offsets(frames: u16) -> Vec<(f32, Vec3)> {
    (1..=frames)
        .map(|frame| {
            let t = f32::from(frame - 1);
            let phase = t * 0.5;
            (
                f32::from(frame),
                Vec3::new(0.04 * phase.sin(), -0.08 * t, 0.03 * (2.0 * phase).cos()),
            )
        })
        .collect()
}

/// A biped walking for `frames` frames, with default bone names.
pub fn walking_biped(name: &str, frames: u16, layout: ChannelLayout) -> Result<AnimatedObject> {
    let names = BoneNames::default();
    let skeleton = biped_skeleton(&names)?;
    let clip = main_bone_clip(
        &format!("{name}|walk"),
        &skeleton,
        &names,
        &walk_offsets(frames),
        layout,
    )?;
    Ok(AnimatedObject::new(name, skeleton, clip))
}
