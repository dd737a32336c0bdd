//! Animation Data Tests
//!
//! Tests for:
//! - KeyframeChannel insertion order, replacement and sampling
//! - FrameTime integer/fraction split
//! - ChannelLocator layouts (data path vs. grouped)
//! - Translation channel lookup and creation

use glam::Vec3;

use rootbake::animation::{
    AnimationClip, Channel, ChannelLayout, DataPathLocator, GroupedLocator, InterpolationMode,
    KeyframeChannel, ensure_channel, locator_for, sample_translation, translation_channels,
};
use rootbake::{Axis, BakeError, ChannelLocator, FrameTime};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// KeyframeChannel
// ============================================================================

#[test]
fn channel_keeps_keys_sorted() {
    let channel = KeyframeChannel::from_pairs([(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)]);
    let times: Vec<f32> = channel.times().collect();
    assert_eq!(times, vec![1.0, 2.0, 3.0]);
}

#[test]
fn channel_insert_replaces_existing_time() {
    let mut channel = KeyframeChannel::from_pairs([(1.0, 10.0), (2.0, 20.0)]);
    channel.insert(2.0, 99.0);

    assert_eq!(channel.len(), 2);
    assert!(approx(channel.keys()[1].value, 99.0));
}

#[test]
fn channel_linear_midpoint() {
    let channel = KeyframeChannel::from_pairs([(1.0, 0.0), (3.0, 10.0)]);
    let val = channel.sample(2.0).unwrap();
    assert!(approx(val, 5.0), "Expected 5.0, got {val}");
}

#[test]
fn channel_clamps_outside_range() {
    let channel = KeyframeChannel::from_pairs([(1.0, 4.0), (2.0, 8.0)]);
    assert!(approx(channel.sample(-10.0).unwrap(), 4.0));
    assert!(approx(channel.sample(50.0).unwrap(), 8.0));
}

#[test]
fn channel_constant_holds_previous_value() {
    let mut channel = KeyframeChannel::new(InterpolationMode::Constant);
    channel.insert(1.0, 1.0);
    channel.insert(2.0, 5.0);
    assert!(approx(channel.sample(1.9).unwrap(), 1.0));
    assert!(approx(channel.sample(2.0).unwrap(), 5.0));
}

#[test]
fn empty_channel_samples_nothing() {
    assert!(KeyframeChannel::default().sample(1.0).is_none());
}

#[test]
fn values_mut_leaves_times_alone() {
    let mut channel = KeyframeChannel::from_pairs([(1.0, 1.0), (1.5, 2.0)]);
    for value in channel.values_mut() {
        *value *= 3.0;
    }
    assert_eq!(channel.times().collect::<Vec<_>>(), vec![1.0, 1.5]);
    assert!(approx(channel.keys()[1].value, 6.0));
}

// ============================================================================
// FrameTime
// ============================================================================

#[test]
fn frame_time_splits_fraction() {
    let t = FrameTime::from_value(12.25);
    assert_eq!(t.frame, 12);
    assert!(approx(t.subframe, 0.25));
    assert!(approx(t.value(), 12.25));
}

#[test]
fn frame_time_negative_floors_down() {
    let t = FrameTime::from_value(-0.5);
    assert_eq!(t.frame, -1);
    assert!(approx(t.subframe, 0.5));
}

#[test]
fn keyframe_reports_frame_time() {
    let channel = KeyframeChannel::from_pairs([(7.5, 0.0)]);
    assert_eq!(channel.keys()[0].frame_time(), FrameTime::from_value(7.5));
}

// ============================================================================
// Channel Locators
// ============================================================================

#[test]
fn data_path_address_escapes_bone_name() {
    let address = DataPathLocator.address("Bone\"A", Axis::Z);
    assert_eq!(address.data_path, r#"pose.bones["Bone\"A"].location"#);
    assert_eq!(address.array_index, 2);
}

#[test]
fn grouped_address_uses_group() {
    let locator = GroupedLocator;
    let address = locator.address("Hips", Axis::Y);
    assert_eq!(address.data_path, "location");
    assert_eq!(address.array_index, 1);
    assert_eq!(address.group.as_deref(), Some("Hips"));
}

#[test]
fn ensure_channel_reuses_existing() {
    let locator = locator_for(ChannelLayout::DataPath);
    let mut clip = AnimationClip::new("walk");

    let a = ensure_channel(&mut clip, locator.as_ref(), "Hips", Axis::X);
    let b = ensure_channel(&mut clip, locator.as_ref(), "Hips", Axis::X);
    assert_eq!(a, b);
    assert_eq!(clip.channels().len(), 1);
}

#[test]
fn translation_channels_reports_first_missing_axis() {
    let locator = locator_for(ChannelLayout::DataPath);
    let mut clip = AnimationClip::new("walk");
    ensure_channel(&mut clip, locator.as_ref(), "Hips", Axis::X);
    ensure_channel(&mut clip, locator.as_ref(), "Hips", Axis::Z);

    let err = translation_channels(&clip, locator.as_ref(), "Hips").unwrap_err();
    assert!(matches!(
        err,
        BakeError::MissingChannel { ref bone, axis: Axis::Y } if bone == "Hips"
    ));
}

#[test]
fn sample_translation_leaves_unkeyed_axes_at_zero() {
    let locator = locator_for(ChannelLayout::Grouped);
    let mut clip = AnimationClip::new("walk");
    let address = locator.address("Hips", Axis::Y);
    clip.add_channel(Channel::new(
        address,
        KeyframeChannel::from_pairs([(1.0, 2.0), (3.0, 4.0)]),
    ));

    let v = sample_translation(&clip, locator.as_ref(), "Hips", 2.0);
    assert!((v - Vec3::new(0.0, 3.0, 0.0)).length() < EPSILON);
}

#[test]
fn frame_range_spans_all_channels() {
    let locator = locator_for(ChannelLayout::DataPath);
    let mut clip = AnimationClip::new("walk");
    let keyed = [
        (Axis::X, [(1.0, 0.0), (10.0, 0.0)]),
        (Axis::Y, [(0.5, 0.0), (4.0, 0.0)]),
    ];
    for (axis, keys) in keyed {
        let index = ensure_channel(&mut clip, locator.as_ref(), "Hips", axis);
        for (t, v) in keys {
            clip.channel_mut(index).unwrap().keys.insert(t, v);
        }
    }
    assert_eq!(clip.frame_range(), Some((0.5, 10.0)));
}
