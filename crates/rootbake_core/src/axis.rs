use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One of the three principal translation axes. Z is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index, matching the host's channel array index.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn component(self, v: Vec3) -> f32 {
        v[self.index()]
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// Selection of world axes extracted into the root bone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisMask {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl AxisMask {
    pub const NONE: AxisMask = AxisMask::new(false, false, false);
    pub const ALL: AxisMask = AxisMask::new(true, true, true);
    /// Ground-plane travel only (the default).
    pub const PLANAR: AxisMask = AxisMask::new(true, true, false);

    #[must_use]
    pub const fn new(x: bool, y: bool, z: bool) -> Self {
        Self { x, y, z }
    }

    #[inline]
    #[must_use]
    pub fn contains(self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.x || self.y || self.z)
    }

    /// Same selection with the up axis removed.
    #[must_use]
    pub fn without_up(self) -> Self {
        Self { z: false, ..self }
    }

    /// 1.0 for selected axes, 0.0 for the others.
    #[inline]
    #[must_use]
    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(
            f32::from(u8::from(self.x)),
            f32::from(u8::from(self.y)),
            f32::from(u8::from(self.z)),
        )
    }

    /// Zeroes every component of `v` that is not selected.
    #[inline]
    #[must_use]
    pub fn apply(self, v: Vec3) -> Vec3 {
        v * self.as_vec3()
    }
}

impl Default for AxisMask {
    fn default() -> Self {
        Self::PLANAR
    }
}
