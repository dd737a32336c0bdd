use glam::{Affine3A, Quat, Vec3};
use smallvec::SmallVec;

use crate::BoneHandle;

/// A skeleton bone.
///
/// # Rest pose
///
/// `rest` places the bone relative to its parent's rest frame (or the object
/// when it has no parent). The bone's head sits at the frame origin and the
/// bone extends `length` along its local +Y axis, so the tail is at
/// `rest × (0, length, 0)`.
///
/// Translation keys are expressed in this rest frame: a keyed location `l`
/// moves the head to `rest × l`.
#[derive(Debug, Clone)]
pub struct Bone {
    pub(crate) name: String,
    pub(crate) rest: Affine3A,
    pub length: f32,

    // === Hierarchy ===
    pub(crate) parent: Option<BoneHandle>,
    pub(crate) children: SmallVec<[BoneHandle; 4]>,
}

impl Bone {
    #[must_use]
    pub fn new(name: impl Into<String>, rest: Affine3A, length: f32) -> Self {
        Self {
            name: name.into(),
            rest,
            length,
            parent: None,
            children: SmallVec::new(),
        }
    }

    /// Builds a bone from head and tail points in its parent's rest frame.
    /// The local +Y axis is aligned with `tail - head`.
    #[must_use]
    pub fn from_head_tail(name: impl Into<String>, head: Vec3, tail: Vec3) -> Self {
        let dir = tail - head;
        let length = dir.length();
        let rotation = if length > f32::EPSILON {
            Quat::from_rotation_arc(Vec3::Y, dir / length)
        } else {
            Quat::IDENTITY
        };
        Self::new(name, Affine3A::from_rotation_translation(rotation, head), length)
    }

    /// Renaming goes through [`Skeleton::rename`](crate::Skeleton::rename),
    /// which keeps the name lookup in step.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rest transform relative to the parent's rest frame.
    #[inline]
    #[must_use]
    pub fn rest(&self) -> &Affine3A {
        &self.rest
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<BoneHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[BoneHandle] {
        &self.children
    }

    /// Tail offset in the bone's own frame.
    #[inline]
    #[must_use]
    pub fn tail_local(&self) -> Vec3 {
        Vec3::new(0.0, self.length, 0.0)
    }
}
