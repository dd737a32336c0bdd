use glam::Vec3;

use rootbake_core::Result;
use rootbake_scene::AnimatedObject;

/// Maps world-space vectors into `bone`'s keyframe space.
///
/// Each vector goes through the inverse rest local-to-object matrix of the
/// bone, then through the inverse object matrix. The rest pose is used,
/// never the animated pose, because translation keys are stored relative to
/// rest.
///
/// The rest inverse is applied first, then the object inverse. This is the
/// exact inverse of pose evaluation only while the object matrix is
/// identity, i.e. after the object transform has been applied.
pub fn world_to_local(object: &AnimatedObject, bone: &str, vectors: &[Vec3]) -> Result<Vec<Vec3>> {
    let handle = object.skeleton.require(bone)?;
    let inv_world = object.world_matrix().inverse();
    let inv_rest = object.skeleton.rest_object_matrix(handle).inverse();

    Ok(vectors
        .iter()
        .map(|&v| inv_world.transform_point3(inv_rest.transform_point3(v)))
        .collect())
}
