//! Skeleton and Evaluation Tests
//!
//! Tests for:
//! - Bone rest frames built from head/tail points
//! - Skeleton renaming and edit-time reparenting
//! - EvaluationContext pose propagation, reset and bounds
//! - Applying the object transform to the rest pose

use std::f32::consts::FRAC_PI_2;

use glam::{Affine3A, Vec3};

use rootbake::animation::{ChannelLayout, locator_for};
use rootbake::bake::fixtures;
use rootbake::scene::sample_world_positions;
use rootbake::{
    AnimatedObject, BakeError, Bone, BoneNames, EvaluationContext, FrameTime, Skeleton, Transform,
};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-4;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

fn walker(frames: u16) -> AnimatedObject {
    fixtures::walking_biped("Walker", frames, ChannelLayout::DataPath).unwrap()
}

// ============================================================================
// Bone / Skeleton
// ============================================================================

#[test]
fn bone_from_head_tail_points_y_along_bone() {
    let bone = Bone::from_head_tail("Up", Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 5.0));
    assert!((bone.length - 2.0).abs() < EPSILON);
    let tail = bone.rest().transform_point3(bone.tail_local());
    assert!(vec3_approx(tail, Vec3::new(1.0, 2.0, 5.0)));
}

#[test]
fn biped_rest_heads_match_layout() {
    let names = BoneNames::default();
    let skeleton = fixtures::biped_skeleton(&names).unwrap();
    assert_eq!(skeleton.len(), 9);

    let toe = skeleton.require(&names.left_toe).unwrap();
    let head = Vec3::from(skeleton.rest_object_matrix(toe).translation);
    assert!(vec3_approx(head, Vec3::new(0.1, -0.18, 0.0)), "Got {head}");
}

#[test]
fn rename_keeps_hierarchy() {
    let names = BoneNames::default();
    let mut skeleton = fixtures::biped_skeleton(&names).unwrap();
    let hips = skeleton.require(&names.main).unwrap();
    let spine = skeleton.require(&names.spine).unwrap();

    skeleton.rename(hips, "Hips").unwrap();

    assert!(skeleton.find(&names.main).is_none());
    assert_eq!(skeleton.find("Hips"), Some(hips));
    assert_eq!(skeleton.get(hips).unwrap().name(), "Hips");
    assert_eq!(skeleton.require("Hips").unwrap(), hips);
    assert_eq!(skeleton.get(spine).unwrap().parent(), Some(hips));
}

#[test]
fn rename_to_taken_name_fails() {
    let names = BoneNames::default();
    let mut skeleton = fixtures::biped_skeleton(&names).unwrap();
    let hips = skeleton.require(&names.main).unwrap();

    let err = skeleton.rename(hips, &names.spine).unwrap_err();
    assert!(matches!(err, BakeError::BoneAlreadyExists { .. }));
}

#[test]
fn reparent_keeps_object_space_rest() {
    let names = BoneNames::default();
    let mut skeleton = fixtures::biped_skeleton(&names).unwrap();
    let hips = skeleton.require(&names.main).unwrap();
    let before = skeleton.rest_object_matrix(hips);

    let root = skeleton
        .add_bone(
            Bone::from_head_tail("Root", Vec3::ZERO, Vec3::new(0.0, 0.0, 0.3)),
            None,
        )
        .unwrap();
    skeleton.set_parent(hips, Some(root)).unwrap();

    let after = skeleton.rest_object_matrix(hips);
    assert!(before.abs_diff_eq(after, EPSILON));
    assert_eq!(skeleton.get(hips).unwrap().parent(), Some(root));
    assert_eq!(skeleton.roots(), &[root]);
    assert_eq!(skeleton.get(root).unwrap().children(), &[hips]);
}

#[test]
fn reparent_under_descendant_is_a_cycle() {
    let names = BoneNames::default();
    let mut skeleton = fixtures::biped_skeleton(&names).unwrap();
    let hips = skeleton.require(&names.main).unwrap();
    let toe = skeleton.require(&names.right_toe).unwrap();

    let err = skeleton.set_parent(hips, Some(toe)).unwrap_err();
    assert!(matches!(err, BakeError::HierarchyCycle { .. }));
}

#[test]
fn require_unknown_bone_fails() {
    let skeleton = Skeleton::new();
    let err = skeleton.require("Nope").unwrap_err();
    assert!(matches!(err, BakeError::MissingBone { ref name } if name == "Nope"));
}

// ============================================================================
// EvaluationContext
// ============================================================================

#[test]
fn evaluated_hips_follow_keys() {
    let object = walker(5);
    let locator = locator_for(ChannelLayout::DataPath);
    let names = BoneNames::default();
    let mut ctx = EvaluationContext::new();

    for (time, offset) in fixtures::walk_offsets(5) {
        ctx.advance_to(&object, locator.as_ref(), FrameTime::from_value(time));
        let head = ctx.world_head(&object, &names.main).unwrap();
        assert!(vec3_approx(head, fixtures::HIPS_HEAD + offset), "Frame {time}: {head}");
    }
}

#[test]
fn children_follow_parent_motion() {
    let object = walker(5);
    let locator = locator_for(ChannelLayout::DataPath);
    let names = BoneNames::default();
    let mut ctx = EvaluationContext::new();

    let offsets = fixtures::walk_offsets(5);
    let (time, offset) = offsets[3];
    let feet = sample_world_positions(
        &mut ctx,
        &object,
        locator.as_ref(),
        &[names.left_foot.as_str(), names.right_foot.as_str()],
        FrameTime::from_value(time),
    )
    .unwrap();
    assert!(vec3_approx(feet[0], Vec3::new(0.1, 0.0, 0.1) + offset));
    assert!(vec3_approx(feet[1], Vec3::new(-0.1, 0.0, 0.1) + offset));
}

#[test]
fn object_transform_moves_world_positions() {
    let mut object = walker(2);
    object.transform.position = Vec3::new(5.0, 0.0, 0.0);
    let locator = locator_for(ChannelLayout::DataPath);
    let mut ctx = EvaluationContext::new();

    ctx.advance_to(&object, locator.as_ref(), FrameTime::START);
    let head = ctx.world_head(&object, &BoneNames::default().main).unwrap();
    let expected = fixtures::HIPS_HEAD + fixtures::walk_offsets(1)[0].1 + Vec3::X * 5.0;
    assert!(vec3_approx(head, expected));
}

#[test]
fn reset_returns_to_first_frame() {
    let object = walker(4);
    let locator = locator_for(ChannelLayout::DataPath);
    let mut ctx = EvaluationContext::new();

    ctx.advance_to(&object, locator.as_ref(), FrameTime::from_frame(3));
    assert!(ctx.is_evaluated());
    assert_eq!(ctx.current_time(), FrameTime::from_frame(3));

    ctx.reset();
    assert!(!ctx.is_evaluated());
    assert_eq!(ctx.current_time(), FrameTime::START);
    assert!(ctx.world_head(&object, &BoneNames::default().main).is_err());
}

#[test]
fn contexts_are_independent() {
    let a = walker(4);
    let b = walker(4);
    let locator = locator_for(ChannelLayout::DataPath);
    let hips = BoneNames::default().main;

    let mut ctx_a = EvaluationContext::new();
    let mut ctx_b = EvaluationContext::new();
    ctx_a.advance_to(&a, locator.as_ref(), FrameTime::from_frame(4));
    ctx_b.advance_to(&b, locator.as_ref(), FrameTime::from_frame(1));

    let head_a = ctx_a.world_head(&a, &hips).unwrap();
    let head_b = ctx_b.world_head(&b, &hips).unwrap();
    assert!(!vec3_approx(head_a, head_b));
    assert_eq!(ctx_a.current_time(), FrameTime::from_frame(4));
}

#[test]
fn rest_bounds_reach_the_ground() {
    let object = walker(1);
    let locator = locator_for(ChannelLayout::DataPath);
    let mut ctx = EvaluationContext::new();

    // Frame 1 of the walk lifts the hips by 0.03.
    ctx.advance_to(&object, locator.as_ref(), FrameTime::START);
    let bounds = ctx.world_bounds(&object).unwrap();
    assert!((bounds.lowest_z() - 0.03).abs() < EPSILON, "Got {}", bounds.lowest_z());
    assert!((bounds.max.z - 1.88).abs() < EPSILON);
}

// ============================================================================
// Apply Transform
// ============================================================================

#[test]
fn apply_transform_bakes_scale_into_rest() {
    let mut object = walker(1);
    object.transform = Transform::from_scale(Vec3::splat(0.01));
    object.apply_transform();

    let names = BoneNames::default();
    assert!(object.transform.is_identity());
    let head = object.rest_head(&names.main).unwrap();
    assert!(vec3_approx(head, fixtures::HIPS_HEAD * 0.01));

    let hips = object.skeleton.require(&names.main).unwrap();
    let length = object.skeleton.get(hips).unwrap().length;
    assert!((length - 0.001).abs() < 1e-6);
}

#[test]
fn apply_transform_preserves_world_rest_pose() {
    let mut object = walker(1);
    object.transform.position = Vec3::new(1.0, -2.0, 0.5);
    object.transform.set_rotation_euler(0.0, 0.0, FRAC_PI_2);
    let world = object.world_matrix();

    let before: Vec<(String, Vec3)> = object
        .skeleton
        .iter()
        .map(|(h, b)| {
            let head = object.skeleton.rest_object_matrix(h).translation;
            (b.name().to_string(), world.transform_point3(head.into()))
        })
        .collect();

    object.apply_transform();
    assert_eq!(object.world_matrix(), Affine3A::IDENTITY);

    for (name, expected) in before {
        let head = object.rest_head(&name).unwrap();
        assert!(vec3_approx(head, expected), "{name}: {head} vs {expected}");
    }
}

#[test]
fn scale_channel_intensity_multiplies_main_keys() {
    let mut object = walker(3);
    object.transform = Transform::from_scale(Vec3::new(2.0, 3.0, 4.0));
    let locator = locator_for(ChannelLayout::DataPath);
    let hips = BoneNames::default().main;

    let before: Vec<Vec<f32>> = object
        .clip
        .channels()
        .iter()
        .map(|c| c.keys.keys().iter().map(|k| k.value).collect())
        .collect();
    object.scale_channel_intensity(&hips, locator.as_ref()).unwrap();

    let factors = [2.0, 3.0, 4.0];
    for ((channel, old), factor) in object.clip.channels().iter().zip(&before).zip(factors) {
        for (key, value) in channel.keys.keys().iter().zip(old) {
            assert!((key.value - value * factor).abs() < 1e-6);
        }
    }
}
