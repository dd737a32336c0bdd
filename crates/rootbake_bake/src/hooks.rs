//! Hand-off points for collaborators outside the bake.

use rootbake_scene::AnimatedObject;

/// Runs after the main bone has been parented under the root.
///
/// May rename any bone. Bone identity is carried by handles and parent
/// links, which renaming leaves intact.
pub trait NamingHook {
    fn rename(&mut self, object: &mut AnimatedObject);
}

/// Runs once the bake is completely done with an object, whether the bake
/// succeeded or not.
pub trait CleanupHook {
    fn cleanup(&mut self, object: &AnimatedObject);
}

impl<F: FnMut(&mut AnimatedObject)> NamingHook for F {
    fn rename(&mut self, object: &mut AnimatedObject) {
        self(object);
    }
}

impl<F: FnMut(&AnimatedObject)> CleanupHook for F {
    fn cleanup(&mut self, object: &AnimatedObject) {
        self(object);
    }
}
