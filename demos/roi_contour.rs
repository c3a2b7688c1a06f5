//! Streamlines seeded from a region of interest, drawn with the
//! orientation colormap next to a translucent surface of the ROI.
//!
//! Real tracking is out of scope here: a random walk through a synthetic
//! direction field stands in for it.

use glam::{Mat4, Vec3};
use molviz::error::MolVizError;
use molviz::options::Options;
use molviz::scene::Scene;
use molviz::streamline::{
    contour_from_roi, line, LineColoring, RoiMask, Streamlines,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tracking step size in world units.
const STEP_SIZE: f32 = 2.0;

/// Steps traced from each seed, in both directions.
const MAX_STEPS: usize = 40;

fn main() -> Result<(), MolVizError> {
    env_logger::init();

    // 2 mm voxels, centered on the origin
    let affine = Mat4::from_scale_rotation_translation(
        Vec3::splat(2.0),
        glam::Quat::IDENTITY,
        Vec3::new(-20.0, -20.0, -10.0),
    );

    // A flat slab standing in for a corpus callosum seed ROI
    let seed_mask =
        RoiMask::from_fn([21, 21, 11], |x, y, z| {
            (5..16).contains(&x) && (9..12).contains(&y) && z == 5
        });
    let seeds = seed_mask.voxel_centers(affine);

    let mut rng = StdRng::seed_from_u64(42);
    let streamlines: Streamlines = seeds
        .iter()
        .map(|&seed| track(seed, &mut rng))
        .collect();
    log::info!(
        "{} streamlines, {} points",
        streamlines.len(),
        streamlines.total_points()
    );

    let options = Options::default();
    let mut scene = Scene::new();
    let _ = scene.add(line(
        &streamlines,
        &options.streamlines,
        &LineColoring::Orientation,
    )?);
    let _ = scene.add(contour_from_roi(&seed_mask, affine, &options.contour)?);
    scene.reset_camera();

    for (id, actor) in scene.actors() {
        log::info!(
            "{id:?} {:<16} {:>5} primitives, opacity {}",
            actor.label(),
            actor.primitive_count(),
            actor.opacity()
        );
    }
    Ok(())
}

/// Fiber direction at `p`: arcs over the midline, left-right at the top.
fn direction_field(p: Vec3) -> Vec3 {
    Vec3::new(1.0, -p.x * 0.05, p.x * 0.02).normalize()
}

/// Bidirectional random walk along the direction field.
fn track(seed: Vec3, rng: &mut StdRng) -> Vec<Vec3> {
    let walk = |sign: f32, rng: &mut StdRng| {
        let mut p = seed;
        let mut points = Vec::with_capacity(MAX_STEPS);
        for _ in 0..MAX_STEPS {
            let jitter = Vec3::new(
                rng.random_range(-0.2..0.2),
                rng.random_range(-0.2..0.2),
                rng.random_range(-0.2..0.2),
            );
            p += (direction_field(p) * sign + jitter).normalize() * STEP_SIZE;
            points.push(p);
        }
        points
    };
    let backward = walk(-1.0, rng);
    let forward = walk(1.0, rng);
    backward
        .into_iter()
        .rev()
        .chain(std::iter::once(seed))
        .chain(forward)
        .collect()
}
