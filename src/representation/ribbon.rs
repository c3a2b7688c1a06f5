//! Backbone ribbon: a spline through the alpha carbons of each chain,
//! extruded with per-residue secondary-structure profiles.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::actor::{Actor, Geometry};
use crate::error::{MolVizError, Result};
use crate::geometry::extrude::{
    extrude_tube, interpolate_profiles, CrossSectionProfile,
};
use crate::geometry::spline::{build_frames, catmull_rom};
use crate::geometry::Mesh;
use crate::molecule::{AtomMetadata, Molecule, SecondaryStructure};
use crate::options::RibbonOptions;

/// Atom name of the backbone trace atom.
const TRACE_ATOM: &str = "CA";

/// One traced residue of a chain.
#[derive(Debug, Clone, Copy)]
struct TraceResidue {
    residue: i32,
    pos: Vec3,
}

/// Alpha-carbon trace of one (model, chain).
#[derive(Debug)]
struct ChainTrace {
    chain: u8,
    residues: Vec<TraceResidue>,
}

/// Ribbon through the backbone of every chain. Requires per-atom metadata.
///
/// Chains with fewer than two traced residues contribute no geometry.
pub fn ribbon(molecule: &Molecule, options: &RibbonOptions) -> Result<Actor> {
    options.validate()?;
    let meta = molecule
        .metadata()
        .ok_or(MolVizError::MissingMetadata("ribbon"))?;

    let traces = trace_chains(meta, molecule.all_atomic_positions());
    let spr = options.segments_per_residue as usize;
    let csv = options.cross_section_verts as usize;

    let mut mesh = Mesh::default();
    let mut residue_base = 0_u32;
    for trace in &traces {
        let n = trace.residues.len();
        if n < 2 {
            residue_base += n as u32;
            continue;
        }

        let profiles: Vec<CrossSectionProfile> = trace
            .residues
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let ss = molecule
                    .residue_secondary_structure(trace.chain, r.residue);
                resolve_profile(ss, residue_base + i as u32, options)
            })
            .collect();

        let points: Vec<Vec3> = trace.residues.iter().map(|r| r.pos).collect();
        let frames = build_frames(&catmull_rom(&points, spr));
        let spline_profiles = interpolate_profiles(&profiles, frames.len());
        mesh.append(&extrude_tube(&frames, &spline_profiles, csv));
        residue_base += n as u32;
    }

    log::debug!(
        "ribbon: {} chains, {} residues, {} triangles",
        traces.len(),
        residue_base,
        mesh.triangle_count()
    );
    Ok(Actor::new("ribbon", Geometry::Mesh(mesh), options.opacity))
}

/// Group non-hetero trace atoms by (model, chain) in first-seen order,
/// sorted by residue number with one atom per residue.
fn trace_chains(meta: &AtomMetadata, positions: &[Vec3]) -> Vec<ChainTrace> {
    let mut order: FxHashMap<(u32, u8), usize> = FxHashMap::default();
    let mut traces: Vec<ChainTrace> = Vec::new();

    for (i, &pos) in positions.iter().enumerate() {
        if meta.is_hetatm(i) != Some(false)
            || meta.atom_name(i) != Some(TRACE_ATOM)
        {
            continue;
        }
        let (Some(model), Some(chain), Some(residue)) =
            (meta.model(i), meta.chain(i), meta.residue_seq(i))
        else {
            continue;
        };
        let slot = *order.entry((model, chain)).or_insert_with(|| {
            traces.push(ChainTrace {
                chain,
                residues: Vec::new(),
            });
            traces.len() - 1
        });
        traces[slot].residues.push(TraceResidue { residue, pos });
    }

    for trace in &mut traces {
        trace.residues.sort_by_key(|r| r.residue);
        trace.residues.dedup_by_key(|r| r.residue);
    }
    traces
}

/// Cross-section shape and color for one residue.
fn resolve_profile(
    ss: SecondaryStructure,
    residue_idx: u32,
    options: &RibbonOptions,
) -> CrossSectionProfile {
    let (width, thickness, roundness, color) = match ss {
        SecondaryStructure::Helix => (
            options.helix_width,
            options.helix_thickness,
            options.helix_roundness,
            options.helix_color,
        ),
        SecondaryStructure::Sheet => (
            options.sheet_width,
            options.sheet_thickness,
            options.sheet_roundness,
            options.sheet_color,
        ),
        SecondaryStructure::Coil => (
            options.coil_width,
            options.coil_width,
            1.0,
            options.coil_color,
        ),
    };
    CrossSectionProfile {
        width,
        thickness,
        roundness,
        color,
        residue_idx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::fixtures::{ethane_arrays, tripeptide};

    fn mesh(actor: &Actor) -> &Mesh {
        match actor.geometry() {
            Geometry::Mesh(m) => m,
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn helix_is_colored_as_helix() {
        let molecule = Molecule::from_arrays(tripeptide(true, false)).unwrap();
        let actor = ribbon(&molecule, &RibbonOptions::default()).unwrap();
        assert!(!mesh(&actor).is_empty());
        assert_eq!(actor.colors(), vec![[240.0 / 255.0, 0.0, 128.0 / 255.0]]);
    }

    #[test]
    fn sheet_is_colored_as_sheet() {
        let molecule = Molecule::from_arrays(tripeptide(false, true)).unwrap();
        let actor = ribbon(&molecule, &RibbonOptions::default()).unwrap();
        assert_eq!(actor.colors(), vec![[1.0, 1.0, 0.0]]);
    }

    #[test]
    fn unassigned_residues_are_coil() {
        let molecule =
            Molecule::from_arrays(tripeptide(false, false)).unwrap();
        let actor = ribbon(&molecule, &RibbonOptions::default()).unwrap();
        assert_eq!(actor.colors(), vec![[1.0, 1.0, 1.0]]);
    }

    #[test]
    fn mesh_size_follows_tessellation() {
        let molecule = Molecule::from_arrays(tripeptide(true, false)).unwrap();
        let options = RibbonOptions {
            segments_per_residue: 4,
            cross_section_verts: 6,
            ..RibbonOptions::default()
        };
        let actor = ribbon(&molecule, &options).unwrap();
        // 3 residues -> 2 spans * 4 + 1 rings, plus two caps
        let rings = 2 * 4 + 1;
        let m = mesh(&actor);
        assert_eq!(m.vertices.len(), rings * 6 + 2 * 7);
        let n = m.vertices.len() as u32;
        assert!(m.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn residues_are_traced_in_order() {
        let molecule = Molecule::from_arrays(tripeptide(true, false)).unwrap();
        let traces = trace_chains(
            molecule.metadata().unwrap(),
            molecule.all_atomic_positions(),
        );
        assert_eq!(traces.len(), 1);
        let residues: Vec<i32> =
            traces[0].residues.iter().map(|r| r.residue).collect();
        assert_eq!(residues, vec![1, 2, 3]);
    }

    #[test]
    fn requires_metadata() {
        let molecule = Molecule::from_arrays(ethane_arrays()).unwrap();
        assert!(matches!(
            ribbon(&molecule, &RibbonOptions::default()),
            Err(MolVizError::MissingMetadata("ribbon"))
        ));
    }

    #[test]
    fn short_chains_are_skipped() {
        let mut arrays = tripeptide(false, false);
        arrays.chain = Some(
            (0..20).map(|i| if i < 13 { b'A' } else { b'B' }).collect(),
        );
        // Chain B keeps a single CA (residue 3) and yields no geometry
        let molecule = Molecule::from_arrays(arrays).unwrap();
        let actor = ribbon(&molecule, &RibbonOptions::default()).unwrap();
        let residue_ids: Vec<u32> =
            mesh(&actor).vertices.iter().map(|v| v.residue_idx).collect();
        assert!(residue_ids.iter().all(|&r| r < 2));
    }
}
