//! Per-clip bake orchestration.
//!
//! For one object, in order:
//! 1. preflight: resolve every bone and channel the bake needs, before
//!    anything is mutated
//! 2. optionally rescale main-bone keys and apply the object transform
//! 3. sample and decompose (root / residual world vectors)
//! 4. create the root bone, convert and write keys
//! 5. reparent the main bone under the root
//! 6. hand the object to naming hooks
//! 7. reset the evaluation clock (also on failure)
//!
//! A failed clip is logged and reported; batch processing moves on to the
//! next object.

use glam::Vec3;

use rootbake_animation::{ChannelLayout, ChannelLocator, locator_for};
use rootbake_core::{AxisMask, BakeError, FrameTime, Result};
use rootbake_scene::{AnimatedObject, EvaluationContext};

use crate::converter::world_to_local;
use crate::decompose::Decomposition;
use crate::hooks::{CleanupHook, NamingHook};
use crate::normalizer::start_point;
use crate::options::{BakeMethod, BakeOptions};
use crate::timeline::{MainChannels, main_channels};
use crate::writer::{
    create_root_bone, insert_translation_keys, overwrite_translation_values, reparent,
};

/// Summary of one successful bake.
#[derive(Debug, Clone)]
pub struct BakeReport {
    pub object: String,
    pub clip: String,
    pub method: BakeMethod,
    pub axes: AxisMask,
    pub times: Vec<FrameTime>,
    /// World-space vectors written to the root and main bones.
    pub decomposition: Decomposition,
    pub start_point: Vec3,
    pub root_created: bool,
}

impl BakeReport {
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.times.len()
    }
}

/// Outcome of one clip in a batch.
#[derive(Debug)]
pub struct ClipOutcome {
    pub object: String,
    pub clip: String,
    pub result: Result<BakeReport>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ClipOutcome>,
}

impl BatchReport {
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn errors(&self) -> impl Iterator<Item = (&ClipOutcome, &BakeError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o, e)))
    }
}

pub struct RootMotionBaker {
    options: BakeOptions,
    locator: Box<dyn ChannelLocator>,
    naming_hooks: Vec<Box<dyn NamingHook>>,
    cleanup_hooks: Vec<Box<dyn CleanupHook>>,
}

impl RootMotionBaker {
    /// Creates a baker. The channel layout in `options` picks the channel
    /// locator used for the baker's whole lifetime.
    #[must_use]
    pub fn new(options: BakeOptions) -> Self {
        let locator = locator_for(options.layout);
        Self {
            options,
            locator,
            naming_hooks: Vec::new(),
            cleanup_hooks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ChannelLayout) -> Self {
        self.options.layout = layout;
        self.locator = locator_for(layout);
        self
    }

    #[must_use]
    pub fn with_naming_hook(mut self, hook: impl NamingHook + 'static) -> Self {
        self.naming_hooks.push(Box::new(hook));
        self
    }

    #[must_use]
    pub fn with_cleanup_hook(mut self, hook: impl CleanupHook + 'static) -> Self {
        self.cleanup_hooks.push(Box::new(hook));
        self
    }

    #[must_use]
    pub fn options(&self) -> &BakeOptions {
        &self.options
    }

    #[must_use]
    pub fn locator(&self) -> &dyn ChannelLocator {
        self.locator.as_ref()
    }

    /// Checks everything the bake needs without touching the object.
    pub fn preflight(&self, object: &AnimatedObject) -> Result<MainChannels> {
        let options = &self.options;
        let bones = &options.bones;
        options.validate()?;

        object.skeleton.require(&bones.main)?;
        let main = main_channels(&object.clip, self.locator(), &bones.main)?;

        if !options.add_root {
            return Ok(main);
        }
        if options.method == BakeMethod::LowestBone {
            for name in bones.ground_probes() {
                object.skeleton.require(name)?;
            }
        }
        if options.start_at_feet {
            for name in bones.feet() {
                object.skeleton.require(name)?;
            }
        }
        if object.skeleton.find(&bones.root).is_some() {
            return Err(BakeError::BoneAlreadyExists {
                name: bones.root.clone(),
            });
        }
        Ok(main)
    }

    /// Bakes the object's active clip. The context is reset to frame 1
    /// afterwards, whatever the outcome.
    pub fn bake(
        &mut self,
        object: &mut AnimatedObject,
        ctx: &mut EvaluationContext,
    ) -> Result<BakeReport> {
        let object_name = object.name.clone();
        let clip_name = object.clip.name.clone();

        let result = self.run(object, ctx);
        ctx.reset();

        match &result {
            Ok(report) => log::info!(
                "Baked root motion of '{clip_name}' on '{object_name}': {} samples, {:?}",
                report.sample_count(),
                report.method
            ),
            Err(err) => log::error!(
                "Root-motion bake of '{clip_name}' on '{object_name}' aborted (bone: {}): {err}",
                err.bone().unwrap_or("-")
            ),
        }
        result
    }

    fn run(
        &mut self,
        object: &mut AnimatedObject,
        ctx: &mut EvaluationContext,
    ) -> Result<BakeReport> {
        let main = self.preflight(object)?;

        let options = &self.options;
        let bones = &options.bones;
        let locator: &dyn ChannelLocator = self.locator.as_ref();

        if options.apply_transform {
            object.scale_channel_intensity(&bones.main, locator)?;
            object.apply_transform();
        }

        let mut report = BakeReport {
            object: object.name.clone(),
            clip: object.clip.name.clone(),
            method: options.method,
            axes: options.axes,
            times: main.times,
            decomposition: Decomposition::default(),
            start_point: Vec3::ZERO,
            root_created: false,
        };
        if !options.add_root {
            log::debug!("Root bone disabled; leaving '{}' keys untouched", report.clip);
            return Ok(report);
        }

        let start = start_point(ctx, object, locator, bones, options.start_at_feet)?;
        let decomposition = options.method.bake(
            ctx,
            object,
            locator,
            bones,
            &report.times,
            options.axes,
            start,
        )?;

        create_root_bone(&mut object.skeleton, &bones.root)?;
        let root_local = world_to_local(object, &bones.root, &decomposition.root)?;
        let main_local = world_to_local(object, &bones.main, &decomposition.residual)?;
        insert_translation_keys(
            &mut object.clip,
            locator,
            &bones.root,
            &main.key_times,
            &root_local,
        );
        overwrite_translation_values(&mut object.clip, locator, &bones.main, &main_local)?;
        reparent(&mut object.skeleton, &bones.main, &bones.root)?;

        report.decomposition = decomposition;
        report.start_point = start;
        report.root_created = true;

        for hook in &mut self.naming_hooks {
            hook.rename(object);
        }
        Ok(report)
    }

    /// Bakes each object in turn with its own evaluation context. Failures
    /// are recorded and do not stop the batch.
    pub fn bake_batch(&mut self, objects: &mut [AnimatedObject]) -> BatchReport {
        let mut report = BatchReport::default();

        for object in objects.iter_mut() {
            let object_name = object.name.clone();
            let clip_name = object.clip.name.clone();

            let mut ctx = EvaluationContext::new();
            let result = self.bake(object, &mut ctx);

            for hook in &mut self.cleanup_hooks {
                hook.cleanup(object);
            }
            report.outcomes.push(ClipOutcome {
                object: object_name,
                clip: clip_name,
                result,
            });
        }

        log::info!(
            "Batch finished: {} baked, {} failed",
            report.succeeded(),
            report.failed()
        );
        report
    }
}
