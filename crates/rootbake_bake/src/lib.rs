//! Root-motion extraction.
//!
//! Splits the world motion of a skeleton's main bone (typically the hips)
//! between a new root bone and the main bone itself:
//!
//! - [`options`]: [`BakeOptions`], [`BakeMethod`], configurable bone names
//! - [`timeline`]: sample times taken from the main bone's keys
//! - [`strategy`]: per-method world sampling
//! - [`decompose`]: the root / residual split
//! - [`normalizer`]: start point of the root trajectory
//! - [`converter`]: world vectors to bone keyframe space
//! - [`writer`]: root bone creation, key writing, reparenting
//! - [`orchestrator`]: [`RootMotionBaker`], per-clip and batch entry points
//!
//! # Example
//!
//! ```rust,ignore
//! use rootbake_bake::{BakeOptions, RootMotionBaker};
//! use rootbake_scene::EvaluationContext;
//!
//! let mut baker = RootMotionBaker::new(BakeOptions::default());
//! let mut ctx = EvaluationContext::new();
//! let report = baker.bake(&mut object, &mut ctx)?;
//! println!("{} samples", report.sample_count());
//! ```

pub mod converter;
pub mod decompose;
pub mod fixtures;
pub mod hooks;
pub mod normalizer;
pub mod options;
pub mod orchestrator;
pub mod strategy;
pub mod timeline;
pub mod writer;

pub use converter::world_to_local;
pub use decompose::{Decomposition, FrameSample, decompose};
pub use hooks::{CleanupHook, NamingHook};
pub use normalizer::{feet_start_point, start_point};
pub use options::{BakeMethod, BakeOptions, BoneNames};
pub use orchestrator::{BakeReport, BatchReport, ClipOutcome, RootMotionBaker};
pub use timeline::{MainChannels, main_channels};
pub use writer::{
    ROOT_BONE_LENGTH, create_root_bone, insert_translation_keys, overwrite_translation_values,
    reparent,
};
