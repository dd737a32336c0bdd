use glam::Affine3A;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use rootbake_core::{BakeError, Result};

use crate::BoneHandle;
use crate::bone::Bone;

/// An ordered set of uniquely named bones forming a forest.
///
/// Bones are owned by the skeleton and addressed by [`BoneHandle`]. Parent
/// links are handles, never names, so renaming a bone keeps the hierarchy.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    bones: SlotMap<BoneHandle, Bone>,
    by_name: FxHashMap<String, BoneHandle>,
    roots: Vec<BoneHandle>,
}

impl Skeleton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Adds `bone` under `parent`. Its rest transform is taken as relative
    /// to the parent's rest frame.
    pub fn add_bone(&mut self, mut bone: Bone, parent: Option<BoneHandle>) -> Result<BoneHandle> {
        if self.by_name.contains_key(&bone.name) {
            return Err(BakeError::BoneAlreadyExists { name: bone.name });
        }
        if let Some(p) = parent {
            if !self.bones.contains_key(p) {
                return Err(BakeError::MissingBone {
                    name: format!("{p:?}"),
                });
            }
        }

        bone.parent = parent;
        bone.children.clear();
        let name = bone.name.clone();
        let handle = self.bones.insert(bone);
        self.by_name.insert(name, handle);

        match parent.and_then(|p| self.bones.get_mut(p)) {
            Some(p) => p.children.push(handle),
            None => self.roots.push(handle),
        }
        Ok(handle)
    }

    #[inline]
    #[must_use]
    pub fn find(&self, name: &str) -> Option<BoneHandle> {
        self.by_name.get(name).copied()
    }

    /// Like [`Skeleton::find`], failing with `MissingBone`.
    pub fn require(&self, name: &str) -> Result<BoneHandle> {
        self.find(name).ok_or_else(|| BakeError::MissingBone {
            name: name.to_string(),
        })
    }

    #[inline]
    #[must_use]
    pub fn get(&self, handle: BoneHandle) -> Option<&Bone> {
        self.bones.get(handle)
    }

    #[must_use]
    pub fn name(&self, handle: BoneHandle) -> Option<&str> {
        self.bones.get(handle).map(|b| b.name.as_str())
    }

    #[must_use]
    pub fn roots(&self) -> &[BoneHandle] {
        &self.roots
    }

    pub fn iter(&self) -> impl Iterator<Item = (BoneHandle, &Bone)> {
        self.bones.iter()
    }

    /// Renames a bone. Handles and parent links are unaffected.
    pub fn rename(&mut self, handle: BoneHandle, new_name: &str) -> Result<()> {
        if self.by_name.contains_key(new_name) {
            return Err(BakeError::BoneAlreadyExists {
                name: new_name.to_string(),
            });
        }
        let bone = self.bones.get_mut(handle).ok_or_else(|| BakeError::MissingBone {
            name: format!("{handle:?}"),
        })?;
        let old = std::mem::replace(&mut bone.name, new_name.to_string());
        self.by_name.remove(&old);
        self.by_name.insert(new_name.to_string(), handle);
        Ok(())
    }

    /// Accumulated rest transform from bone space to object space.
    #[must_use]
    pub fn rest_object_matrix(&self, handle: BoneHandle) -> Affine3A {
        let mut matrix = Affine3A::IDENTITY;
        let mut current = Some(handle);
        while let Some(h) = current {
            let Some(bone) = self.bones.get(h) else {
                break;
            };
            matrix = bone.rest * matrix;
            current = bone.parent;
        }
        matrix
    }

    /// Places a bone at `matrix` in object space, keeping its parent.
    pub fn set_rest_object_matrix(&mut self, handle: BoneHandle, matrix: Affine3A) {
        let parent_matrix = self
            .bones
            .get(handle)
            .and_then(|b| b.parent)
            .map_or(Affine3A::IDENTITY, |p| self.rest_object_matrix(p));
        if let Some(bone) = self.bones.get_mut(handle) {
            bone.rest = parent_matrix.inverse() * matrix;
        }
    }

    pub fn set_length(&mut self, handle: BoneHandle, length: f32) {
        if let Some(bone) = self.bones.get_mut(handle) {
            bone.length = length;
        }
    }

    /// `true` when `ancestor` lies on the parent chain of `handle` (or is it).
    #[must_use]
    pub fn is_ancestor(&self, ancestor: BoneHandle, handle: BoneHandle) -> bool {
        let mut current = Some(handle);
        while let Some(h) = current {
            if h == ancestor {
                return true;
            }
            current = self.bones.get(h).and_then(|b| b.parent);
        }
        false
    }

    /// Edit-time reparent. The child keeps its object-space rest transform.
    pub fn set_parent(&mut self, child: BoneHandle, parent: Option<BoneHandle>) -> Result<()> {
        let child_name = self.name(child).map(str::to_string).ok_or_else(|| {
            BakeError::MissingBone {
                name: format!("{child:?}"),
            }
        })?;

        if let Some(p) = parent {
            let parent_name = self.name(p).map(str::to_string).ok_or_else(|| {
                BakeError::MissingBone {
                    name: format!("{p:?}"),
                }
            })?;
            if self.is_ancestor(child, p) {
                return Err(BakeError::HierarchyCycle {
                    child: child_name,
                    parent: parent_name,
                });
            }
        }

        let object_matrix = self.rest_object_matrix(child);

        // Detach
        let old_parent = self.bones[child].parent;
        match old_parent.and_then(|p| self.bones.get_mut(p)) {
            Some(p) => p.children.retain(|c| *c != child),
            None => self.roots.retain(|r| *r != child),
        }

        // Attach
        self.bones[child].parent = parent;
        match parent.and_then(|p| self.bones.get_mut(p)) {
            Some(p) => p.children.push(child),
            None => self.roots.push(child),
        }

        self.set_rest_object_matrix(child, object_matrix);
        log::debug!("Reparented '{child_name}' (was {old_parent:?}, now {parent:?})");
        Ok(())
    }

    /// Every bone in depth-first order, parents before children.
    #[must_use]
    pub fn walk(&self) -> Vec<BoneHandle> {
        let mut order = Vec::with_capacity(self.bones.len());
        let mut stack: Vec<BoneHandle> = self.roots.iter().rev().copied().collect();

        while let Some(handle) = stack.pop() {
            let Some(bone) = self.bones.get(handle) else {
                continue;
            };
            order.push(handle);
            stack.extend(bone.children.iter().rev().copied());
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn walk_visits_parents_first() {
        let mut skeleton = Skeleton::new();
        let hips = skeleton
            .add_bone(Bone::from_head_tail("Hips", Vec3::Z, Vec3::Z * 1.1), None)
            .unwrap();
        let spine = skeleton
            .add_bone(Bone::from_head_tail("Spine", Vec3::ZERO, Vec3::Y * 0.2), Some(hips))
            .unwrap();
        let leg = skeleton
            .add_bone(Bone::from_head_tail("Leg", Vec3::ZERO, -Vec3::Y), Some(hips))
            .unwrap();

        let order = skeleton.walk();
        assert_eq!(order, vec![hips, spine, leg]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut skeleton = Skeleton::new();
        skeleton.add_bone(Bone::new("Hips", Affine3A::IDENTITY, 0.1), None).unwrap();
        let err = skeleton
            .add_bone(Bone::new("Hips", Affine3A::IDENTITY, 0.1), None)
            .unwrap_err();
        assert!(matches!(err, BakeError::BoneAlreadyExists { .. }));
    }
}
