//! Animation data for rootbake: keyframes, channels, clips and the
//! [`ChannelLocator`] capability used to find a bone's translation channels.

pub mod clip;
pub mod locator;
pub mod tracks;

pub use clip::{AnimationClip, Channel, ChannelAddress};
pub use locator::{
    ChannelLayout, ChannelLocator, DataPathLocator, GroupedLocator, ensure_channel,
    escape_identifier, locator_for, sample_translation, translation_channels,
};
pub use tracks::{InterpolationMode, Keyframe, KeyframeChannel};
