//! Root/residual decomposition shared by every bake method.

use glam::Vec3;

use rootbake_core::AxisMask;

/// Per-frame inputs of the decomposition, in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    /// Main bone head.
    pub main: Vec3,
    /// Estimated up-axis value of the root at this frame.
    pub height: f32,
}

/// World-space root and residual vectors, one pair per sample time.
///
/// For every frame `root[i] + residual[i]` equals the main bone's world
/// position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decomposition {
    pub root: Vec<Vec3>,
    pub residual: Vec<Vec3>,
}

impl Decomposition {
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Recombined main bone positions.
    pub fn recombined(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.root.iter().zip(&self.residual).map(|(r, s)| *r + *s)
    }
}

/// Splits each main bone position into a root and a residual vector.
///
/// 1. `root_raw = (main.x, main.y, height)` masked by `axes`.
/// 2. `residual_raw = main - root_raw`.
/// 3. The root is re-based so its first sample sits at `start_point`:
///    the first raw root value (x/y, plus z when `rebase_height`) is
///    subtracted and `start_point` added on the same axes.
/// 4. The residual receives the opposite offset, which keeps
///    `root + residual == main` on every frame.
///
/// `start_point` is expected on the ground plane; pass `Vec3::ZERO` to
/// anchor the root at the origin.
#[must_use]
pub fn decompose(
    samples: &[FrameSample],
    axes: AxisMask,
    rebase_height: bool,
    start_point: Vec3,
) -> Decomposition {
    let Some(first) = samples.first() else {
        return Decomposition::default();
    };

    let raw = |s: &FrameSample| axes.apply(Vec3::new(s.main.x, s.main.y, s.height));

    let rebase_axes = if rebase_height { axes } else { axes.without_up() };
    let offset = rebase_axes.apply(raw(first));
    let anchor = rebase_axes.apply(start_point);
    let shift = anchor - offset;

    let mut root = Vec::with_capacity(samples.len());
    let mut residual = Vec::with_capacity(samples.len());
    for s in samples {
        let root_raw = raw(s);
        root.push(root_raw + shift);
        residual.push(s.main - root_raw - shift);
    }

    Decomposition { root, residual }
}
