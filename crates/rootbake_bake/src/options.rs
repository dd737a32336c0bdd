//! Bake configuration.
//!
//! Every field has a default, so hosts may pass a partial JSON document:
//!
//! ```json
//! { "method": "LOWEST_BONE", "axes": { "x": true, "y": true, "z": true } }
//! ```

use serde::{Deserialize, Serialize};

use rootbake_animation::ChannelLayout;
use rootbake_core::{AxisMask, BakeError, Result};

/// How the up-axis component of the root trajectory is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BakeMethod {
    /// Root height mirrors the main bone's own height.
    #[default]
    CopyData,
    /// Root height is the lowest of six auxiliary bones.
    LowestBone,
    /// Root height is the bottom of the posed skeleton's world bounds.
    BoundBox,
}

impl BakeMethod {
    /// Whether the first-frame re-basing also applies to the up axis.
    ///
    /// Only `CopyData` re-bases height; the ground-contact estimates keep
    /// their absolute height.
    #[inline]
    #[must_use]
    pub fn rebases_height(self) -> bool {
        matches!(self, BakeMethod::CopyData)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoneNames {
    pub main: String,
    pub root: String,
    pub head_top: String,
    pub spine: String,
    pub left_hand: String,
    pub right_hand: String,
    pub left_foot: String,
    pub right_foot: String,
    pub left_toe: String,
    pub right_toe: String,
}

impl BoneNames {
    /// Bones whose lowest head defines the ground height for `LowestBone`.
    #[must_use]
    pub fn ground_probes(&self) -> [&str; 6] {
        self.labelled_probes().map(|(_, name)| name)
    }

    #[must_use]
    pub fn feet(&self) -> [&str; 2] {
        self.labelled_feet().map(|(_, name)| name)
    }

    fn labelled_probes(&self) -> [(&'static str, &str); 6] {
        [
            ("head_top", self.head_top.as_str()),
            ("left_hand", self.left_hand.as_str()),
            ("right_hand", self.right_hand.as_str()),
            ("spine", self.spine.as_str()),
            ("left_toe", self.left_toe.as_str()),
            ("right_toe", self.right_toe.as_str()),
        ]
    }

    fn labelled_feet(&self) -> [(&'static str, &str); 2] {
        [
            ("left_foot", self.left_foot.as_str()),
            ("right_foot", self.right_foot.as_str()),
        ]
    }
}

impl Default for BoneNames {
    fn default() -> Self {
        Self {
            main: "mixamorig:Hips".to_string(),
            root: "Root".to_string(),
            head_top: "mixamorig:HeadTop_End".to_string(),
            spine: "mixamorig:Spine".to_string(),
            left_hand: "mixamorig:LeftHand".to_string(),
            right_hand: "mixamorig:RightHand".to_string(),
            left_foot: "mixamorig:LeftFoot".to_string(),
            right_foot: "mixamorig:RightFoot".to_string(),
            left_toe: "mixamorig:LeftToe_End".to_string(),
            right_toe: "mixamorig:RightToe_End".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeOptions {
    pub bones: BoneNames,
    pub method: BakeMethod,
    /// World axes moved from the main bone into the root.
    pub axes: AxisMask,
    /// Start the root at the feet's ground point instead of the origin.
    pub start_at_feet: bool,
    /// Rescale main-bone keys by the object scale, then apply the object
    /// transform to the rest pose before sampling.
    pub apply_transform: bool,
    /// Create, key and parent the root bone. When off, only
    /// `apply_transform` runs.
    pub add_root: bool,
    pub layout: ChannelLayout,
}

impl Default for BakeOptions {
    fn default() -> Self {
        Self {
            bones: BoneNames::default(),
            method: BakeMethod::CopyData,
            axes: AxisMask::PLANAR,
            start_at_feet: false,
            apply_transform: true,
            add_root: true,
            layout: ChannelLayout::DataPath,
        }
    }
}

impl BakeOptions {
    /// Parses and validates options from JSON. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let options: BakeOptions =
            serde_json::from_str(text).map_err(|e| BakeError::InvalidConfig(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Rejects empty bone names among those the bake will read, and a root
    /// named like the main bone. Auxiliary names are only checked when the
    /// chosen method or `start_at_feet` uses them.
    pub fn validate(&self) -> Result<()> {
        for (field, name) in self.used_bone_names() {
            if name.trim().is_empty() {
                return Err(BakeError::InvalidConfig(format!(
                    "bone name '{field}' must not be empty"
                )));
            }
        }
        if self.bones.root == self.bones.main {
            return Err(BakeError::InvalidConfig(format!(
                "root bone name '{}' must differ from the main bone name",
                self.bones.root
            )));
        }
        Ok(())
    }

    fn used_bone_names(&self) -> Vec<(&'static str, &str)> {
        let bones = &self.bones;
        let mut names = vec![("main", bones.main.as_str()), ("root", bones.root.as_str())];
        if !self.add_root {
            return names;
        }
        if self.method == BakeMethod::LowestBone {
            names.extend(bones.labelled_probes());
        }
        if self.start_at_feet {
            names.extend(bones.labelled_feet());
        }
        names
    }
}
