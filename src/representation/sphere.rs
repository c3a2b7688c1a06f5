use super::coloring::{element_color, resolve, Coloring};
use crate::actor::{Actor, Geometry};
use crate::element::element;
use crate::error::Result;
use crate::geometry::SphereInstance;
use crate::molecule::Molecule;
use crate::options::SphereOptions;

/// Space-filling (CPK) model: one sphere per atom with radius
/// `vdw_radius * atom_scale_factor`.
pub fn sphere_cpk(molecule: &Molecule, options: &SphereOptions) -> Result<Actor> {
    options.validate()?;
    let coloring = resolve(options.color_mode, "sphere_cpk");

    let spheres: Vec<SphereInstance> = molecule
        .all_atomic_numbers()
        .iter()
        .zip(molecule.all_atomic_positions())
        .enumerate()
        .map(|(i, (&z, &pos))| {
            let radius = element(z).map_or(1.0, |e| e.vdw_radius)
                * options.atom_scale_factor;
            let color = match coloring {
                Coloring::Element => element_color(z),
                Coloring::Single => options.single_color,
            };
            SphereInstance::new(pos, radius, color, i as u32)
        })
        .collect();

    log::debug!("sphere_cpk: {} spheres", spheres.len());
    Ok(Actor::new(
        "sphere_cpk",
        Geometry::Spheres(spheres),
        options.opacity,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::PeriodicTable;
    use crate::error::MolVizError;
    use crate::molecule::fixtures::ethane_arrays;
    use crate::options::ColorMode;
    use crate::test_log::{capture, warnings};

    fn ethane() -> Molecule {
        Molecule::from_arrays(ethane_arrays()).unwrap()
    }

    #[test]
    fn discrete_uses_element_colors() {
        let actor = sphere_cpk(&ethane(), &SphereOptions::default()).unwrap();
        let table = PeriodicTable::new();
        let colors = actor.colors();
        assert_eq!(colors.len(), 2);
        assert!(colors.contains(&table.atom_color(1).unwrap()));
        assert!(colors.contains(&table.atom_color(6).unwrap()));
        assert_eq!(actor.primitive_count(), 8);
    }

    #[test]
    fn single_uses_one_color() {
        let options = SphereOptions {
            color_mode: ColorMode::Single,
            ..SphereOptions::default()
        };
        let actor = sphere_cpk(&ethane(), &options).unwrap();
        assert_eq!(
            actor.colors(),
            vec![[150.0 / 255.0, 250.0 / 255.0, 150.0 / 255.0]]
        );
    }

    #[test]
    fn radii_scale_with_van_der_waals() {
        let options = SphereOptions {
            atom_scale_factor: 0.5,
            ..SphereOptions::default()
        };
        let actor = sphere_cpk(&ethane(), &options).unwrap();
        let Geometry::Spheres(spheres) = actor.geometry() else {
            panic!("expected spheres");
        };
        let carbon = element(6).unwrap().vdw_radius;
        assert!((spheres[0].radius() - carbon * 0.5).abs() < 1e-6);
    }

    #[test]
    fn multiple_mode_warns_but_builds() {
        let options = SphereOptions {
            color_mode: ColorMode::Multiple,
            ..SphereOptions::default()
        };
        let (result, records) = capture(|| sphere_cpk(&ethane(), &options));
        let actor = result.unwrap();
        assert_eq!(warnings(&records).len(), 1);
        assert_eq!(actor.colors().len(), 2);
    }

    #[test]
    fn invalid_scale_is_rejected() {
        let options = SphereOptions {
            atom_scale_factor: 0.0,
            ..SphereOptions::default()
        };
        assert!(matches!(
            sphere_cpk(&ethane(), &options),
            Err(MolVizError::InvalidOption {
                name: "atom_scale_factor",
                ..
            })
        ));
    }
}
