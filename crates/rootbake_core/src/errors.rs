//! Error Types
//!
//! This module defines the error type shared by every rootbake crate.
//!
//! # Overview
//!
//! [`BakeError`] covers the failure modes of a root-motion bake:
//! - Missing source data (bones, channels, keyframes)
//! - Malformed source data (channels that disagree on their sample times)
//! - Skeleton edits that cannot be honored (duplicate names, cycles)
//! - Configuration that fails to parse or validate
//!
//! Every variant is a hard failure for the clip being baked. Nothing is
//! substituted with a default geometric value.
//!
//! ```rust,ignore
//! use rootbake_core::errors::{BakeError, Result};
//!
//! fn find_hips() -> Result<()> {
//!     Err(BakeError::MissingBone { name: "mixamorig:Hips".into() })
//! }
//! ```

use thiserror::Error;

use crate::axis::Axis;

/// The error type for root-motion baking.
#[derive(Error, Debug)]
pub enum BakeError {
    // ========================================================================
    // Source Data Errors
    // ========================================================================
    /// A bone lacks one of its translation channels.
    #[error("Missing {axis} translation channel for bone '{bone}'")]
    MissingChannel {
        /// Bone the channel belongs to
        bone: String,
        /// Translation axis of the channel
        axis: Axis,
    },

    /// A configured bone name does not exist in the skeleton.
    #[error("Bone not found in skeleton: '{name}'")]
    MissingBone {
        /// The name that failed to resolve
        name: String,
    },

    /// The main bone's translation channel holds no keyframes.
    #[error("Translation channel of bone '{bone}' has no keyframes")]
    EmptyKeyframeSet {
        /// Bone whose channel is empty
        bone: String,
    },

    /// The x/y/z translation channels of a bone disagree on their key times.
    #[error("Sample times of the {axis} channel of bone '{bone}' differ from the x channel")]
    InconsistentSampleTimes {
        /// Bone whose channels disagree
        bone: String,
        /// The first axis found to differ from x
        axis: Axis,
    },

    // ========================================================================
    // Skeleton Edit Errors
    // ========================================================================
    /// A bone with this name already exists.
    #[error("Bone already exists in skeleton: '{name}'")]
    BoneAlreadyExists {
        /// The conflicting name
        name: String,
    },

    /// Reparenting would make a bone its own ancestor.
    #[error("Cannot parent '{child}' under '{parent}': the hierarchy would contain a cycle")]
    HierarchyCycle {
        /// Bone being reparented
        child: String,
        /// Requested parent
        parent: String,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration text could not be parsed or holds invalid values.
    #[error("Invalid bake configuration: {0}")]
    InvalidConfig(String),
}

impl BakeError {
    /// Name of the bone the error refers to, when there is one.
    #[must_use]
    pub fn bone(&self) -> Option<&str> {
        match self {
            BakeError::MissingChannel { bone, .. }
            | BakeError::EmptyKeyframeSet { bone }
            | BakeError::InconsistentSampleTimes { bone, .. } => Some(bone),
            BakeError::MissingBone { name } | BakeError::BoneAlreadyExists { name } => Some(name),
            BakeError::HierarchyCycle { child, .. } => Some(child),
            BakeError::InvalidConfig(_) => None,
        }
    }
}

/// Alias for `Result<T, BakeError>`.
pub type Result<T> = std::result::Result<T, BakeError>;
