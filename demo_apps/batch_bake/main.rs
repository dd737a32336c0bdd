//! Batch root-motion bake over a handful of generated biped clips.
//!
//! Usage: `batch_bake [options.json]`
//!
//! Without an argument the default options are used (COPY_DATA, x/y axes,
//! Mixamo bone names). Run with `RUST_LOG=debug` for per-step output.

use std::f32::consts::FRAC_PI_2;

use rootbake::bake::fixtures;
use rootbake::glam::Vec3;
use rootbake::{AnimationClip, AnimatedObject, BakeOptions, ChannelLayout, RootMotionBaker};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("rootbake {}", rootbake::version());

    let options = match std::env::args().nth(1) {
        Some(path) => BakeOptions::from_json(&std::fs::read_to_string(&path)?)?,
        None => BakeOptions::default(),
    };
    println!("Method: {:?}, axes: {:?}", options.method, options.axes);

    let mut objects = build_objects(options.layout)?;

    let mut baker = RootMotionBaker::new(options)
        .with_cleanup_hook(|object: &AnimatedObject| {
            log::debug!("Done with '{}' ({} bones)", object.name, object.skeleton.len());
        });
    let report = baker.bake_batch(&mut objects);

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(bake) => {
                let last = bake.decomposition.root.last().copied().unwrap_or(Vec3::ZERO);
                println!(
                    "  ok   {:<24} {:>3} samples, root ends at ({:.3}, {:.3}, {:.3})",
                    outcome.clip,
                    bake.sample_count(),
                    last.x,
                    last.y,
                    last.z
                );
            }
            Err(err) => println!("  FAIL {:<24} {err}", outcome.clip),
        }
    }
    println!("{} baked, {} failed", report.succeeded(), report.failed());
    Ok(())
}

fn build_objects(layout: ChannelLayout) -> anyhow::Result<Vec<AnimatedObject>> {
    let short = fixtures::walking_biped("Walker", 24, layout)?;

    // Scaled and turned at object level; applied to the rest pose before baking.
    let mut imported = fixtures::walking_biped("Imported", 48, layout)?;
    imported.transform.scale = Vec3::splat(0.01);
    imported.transform.set_rotation_euler(0.0, 0.0, FRAC_PI_2);

    // No hips keys at all: reported as a failure, the rest still bake.
    let mut broken = fixtures::walking_biped("Broken", 12, layout)?;
    broken.clip = AnimationClip::new("Broken|idle");

    Ok(vec![short, imported, broken])
}
