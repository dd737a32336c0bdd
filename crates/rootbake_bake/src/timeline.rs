//! Keyframe time set.
//!
//! The main bone's x translation channel defines the sample times of the
//! whole bake. The y and z channels must carry exactly the same times; the
//! root channels are keyed at the same times later on.

use rootbake_animation::{AnimationClip, ChannelLocator, translation_channels};
use rootbake_core::{Axis, BakeError, FrameTime, Result};

/// The main bone's translation channels and their shared sample times.
#[derive(Debug, Clone)]
pub struct MainChannels {
    /// Channel indices for x, y, z.
    pub indices: [usize; 3],
    pub times: Vec<FrameTime>,
    /// The same times exactly as keyed, for writing new keys.
    pub key_times: Vec<f32>,
}

/// Resolves the main bone's channels and checks they share one non-empty
/// set of key times.
pub fn main_channels(
    clip: &AnimationClip,
    locator: &dyn ChannelLocator,
    bone: &str,
) -> Result<MainChannels> {
    let indices = translation_channels(clip, locator, bone)?;
    let channel = |axis: Axis| {
        clip.channel(indices[axis.index()])
            .ok_or_else(|| BakeError::MissingChannel {
                bone: bone.to_string(),
                axis,
            })
    };

    let x = channel(Axis::X)?;
    if x.keys.is_empty() {
        return Err(BakeError::EmptyKeyframeSet {
            bone: bone.to_string(),
        });
    }

    for axis in [Axis::Y, Axis::Z] {
        let other = channel(axis)?;
        if !other.keys.times().eq(x.keys.times()) {
            return Err(BakeError::InconsistentSampleTimes {
                bone: bone.to_string(),
                axis,
            });
        }
    }

    let times = x.keys.keys().iter().map(|k| k.frame_time()).collect();
    let key_times = x.keys.times().collect();
    Ok(MainChannels {
        indices,
        times,
        key_times,
    })
}
