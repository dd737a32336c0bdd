//! Channel lookup.
//!
//! Hosts lay out bone translation channels differently. A [`ChannelLocator`]
//! hides the layout: it finds the channel for `(bone, axis)` in a clip and
//! produces the address a new channel must carry. The layout is chosen once
//! through [`locator_for`] and then shared by every caller.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use rootbake_core::{Axis, BakeError, Result};

use crate::clip::{AnimationClip, Channel, ChannelAddress};
use crate::tracks::KeyframeChannel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelLayout {
    /// `pose.bones["<bone>"].location`, array index = axis.
    #[default]
    DataPath,
    /// `location` grouped under the bone name, array index = axis.
    Grouped,
}

pub trait ChannelLocator: Send + Sync {
    /// Index of the channel animating `axis` of `bone`'s translation.
    fn locate(&self, clip: &AnimationClip, bone: &str, axis: Axis) -> Option<usize>;

    /// Address for a newly created translation channel.
    fn address(&self, bone: &str, axis: Axis) -> ChannelAddress;
}

/// Escapes `\` and `"` so a bone name can be embedded in a quoted data path.
#[must_use]
pub fn escape_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Default)]
pub struct DataPathLocator;

impl DataPathLocator {
    fn data_path(bone: &str) -> String {
        format!("pose.bones[\"{}\"].location", escape_identifier(bone))
    }
}

impl ChannelLocator for DataPathLocator {
    fn locate(&self, clip: &AnimationClip, bone: &str, axis: Axis) -> Option<usize> {
        let path = Self::data_path(bone);
        clip.channels()
            .iter()
            .position(|c| c.address.data_path == path && c.address.array_index == axis.index())
    }

    fn address(&self, bone: &str, axis: Axis) -> ChannelAddress {
        ChannelAddress {
            data_path: Self::data_path(bone),
            array_index: axis.index(),
            group: Some(bone.to_string()),
        }
    }
}

#[derive(Debug, Default)]
pub struct GroupedLocator;

impl ChannelLocator for GroupedLocator {
    fn locate(&self, clip: &AnimationClip, bone: &str, axis: Axis) -> Option<usize> {
        clip.channels().iter().position(|c| {
            c.address.data_path == "location"
                && c.address.array_index == axis.index()
                && c.address.group.as_deref() == Some(bone)
        })
    }

    fn address(&self, bone: &str, axis: Axis) -> ChannelAddress {
        ChannelAddress {
            data_path: "location".to_string(),
            array_index: axis.index(),
            group: Some(bone.to_string()),
        }
    }
}

#[must_use]
pub fn locator_for(layout: ChannelLayout) -> Box<dyn ChannelLocator> {
    match layout {
        ChannelLayout::DataPath => Box::new(DataPathLocator),
        ChannelLayout::Grouped => Box::new(GroupedLocator),
    }
}

/// Indices of `bone`'s x/y/z translation channels; all three must exist.
pub fn translation_channels(
    clip: &AnimationClip,
    locator: &dyn ChannelLocator,
    bone: &str,
) -> Result<[usize; 3]> {
    let find = |axis| {
        locator
            .locate(clip, bone, axis)
            .ok_or_else(|| BakeError::MissingChannel {
                bone: bone.to_string(),
                axis,
            })
    };
    Ok([find(Axis::X)?, find(Axis::Y)?, find(Axis::Z)?])
}

/// Returns the channel for `(bone, axis)`, creating an empty one if absent.
pub fn ensure_channel(
    clip: &mut AnimationClip,
    locator: &dyn ChannelLocator,
    bone: &str,
    axis: Axis,
) -> usize {
    match locator.locate(clip, bone, axis) {
        Some(index) => index,
        None => {
            log::debug!("Creating {axis} translation channel for '{bone}' in '{}'", clip.name);
            clip.add_channel(Channel::new(
                locator.address(bone, axis),
                KeyframeChannel::default(),
            ))
        }
    }
}

/// Evaluates `bone`'s translation at `time`. Unkeyed axes rest at zero.
#[must_use]
pub fn sample_translation(
    clip: &AnimationClip,
    locator: &dyn ChannelLocator,
    bone: &str,
    time: f32,
) -> Vec3 {
    let mut out = Vec3::ZERO;
    for axis in Axis::ALL {
        if let Some(value) = locator
            .locate(clip, bone, axis)
            .and_then(|i| clip.channel(i))
            .and_then(|c| c.keys.sample(time))
        {
            out[axis.index()] = value;
        }
    }
    out
}
