//! Skeleton and pose evaluation for rootbake.
//!
//! - [`Bone`] / [`Skeleton`]: rest hierarchy, edit-time reparenting
//! - [`Transform`]: object-level TRS
//! - [`AnimatedObject`]: skeleton + object transform + active clip
//! - [`EvaluationContext`]: explicit evaluation clock for one object
//! - [`sampler`]: world-space reads at a given time

pub mod bone;
pub mod evaluator;
pub mod object;
pub mod sampler;
pub mod skeleton;
pub mod transform;

pub use bone::Bone;
pub use evaluator::EvaluationContext;
pub use object::AnimatedObject;
pub use sampler::{sample_world_bounds, sample_world_position, sample_world_positions};
pub use skeleton::Skeleton;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct BoneHandle;
}
