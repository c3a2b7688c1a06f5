//! Build ethane, perceive its bonds, and assemble every molecular
//! representation into one scene.
//!
//! Run with `RUST_LOG=debug cargo run --example ethane` to see the builder
//! summaries. Pass a path to write the options used as a TOML preset.

use molviz::element::PeriodicTable;
use molviz::error::MolVizError;
use molviz::molecule::bonding::compute_bonding;
use molviz::molecule::{Molecule, MoleculeArrays};
use molviz::options::{ColorMode, Options};
use molviz::representation::{ball_stick, bounding_box, sphere_cpk, stick};
use molviz::scene::Scene;

fn main() -> Result<(), MolVizError> {
    env_logger::init();

    let arrays = MoleculeArrays::new(
        vec![6, 6, 1, 1, 1, 1, 1, 1],
        vec![
            [5.723_949_5, 5.974_463_6, 5.898_320_5],
            [6.840_181_3, 6.678_078_6, 5.159_998_5],
            [4.774_278, 6.499_436_6, 5.782_310_2],
            [5.576_295_3, 4.957_554_3, 5.530_844_7],
            [5.926_818, 5.907_772, 6.968_386],
            [6.985_131, 7.695_511_4, 5.526_416_7],
            [7.788_135, 6.150_201, 5.277_430_5],
            [6.632_859, 6.740_709, 4.090_898_3],
        ],
    );
    let mut molecule = Molecule::from_arrays(arrays)?;
    let bonds = compute_bonding(&mut molecule);

    let table = PeriodicTable::new();
    for z in [6, 1] {
        log::info!(
            "{} ({}): vdW radius {:.2} A",
            table.element_name(z)?,
            table.atomic_symbol(z)?,
            table.element(z)?.vdw_radius
        );
    }
    log::info!(
        "{} atoms, {bonds} perceived bonds",
        molecule.total_num_atoms()
    );

    let mut options = Options::default();
    options.ball_stick.color_mode = ColorMode::Single;

    let mut scene = Scene::new();
    let _ = scene.add(sphere_cpk(&molecule, &options.sphere)?);
    let _ = scene.add(ball_stick(&molecule, &options.ball_stick)?);
    let _ = scene.add(stick(&molecule, &options.stick)?);
    let _ = scene.add(bounding_box(&molecule, &options.bounding_box)?);
    scene.reset_camera();

    for (id, actor) in scene.actors() {
        log::info!(
            "{id:?} {:<12} {:>3} primitives, {} colors",
            actor.label(),
            actor.primitive_count(),
            actor.colors().len()
        );
    }
    let camera = scene.camera();
    log::info!(
        "camera at {:?} looking at {:?}, clipping {:?}",
        camera.position.to_array(),
        camera.focal_point.to_array(),
        camera.clipping_range
    );

    if let Some(path) = std::env::args().nth(1) {
        options.save(std::path::Path::new(&path))?;
        log::info!("options written to {path}");
    }
    Ok(())
}
