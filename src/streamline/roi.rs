use glam::{IVec3, Mat3, Mat4, Vec3};
use rustc_hash::FxHashMap;

use crate::actor::{Actor, Geometry};
use crate::error::{MolVizError, Result};
use crate::geometry::{Mesh, MeshVertex};
use crate::options::ContourOptions;

/// Dense boolean voxel grid, x varying fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoiMask {
    dims: [usize; 3],
    voxels: Vec<bool>,
}

impl RoiMask {
    /// Mask of `dims` with `f(x, y, z)` deciding each voxel.
    pub fn from_fn(
        dims: [usize; 3],
        mut f: impl FnMut(usize, usize, usize) -> bool,
    ) -> Self {
        let mut voxels = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
        for z in 0..dims[2] {
            for y in 0..dims[1] {
                for x in 0..dims[0] {
                    voxels.push(f(x, y, z));
                }
            }
        }
        Self { dims, voxels }
    }

    /// Mask from a flat x-fastest buffer.
    pub fn from_vec(dims: [usize; 3], voxels: Vec<bool>) -> Result<Self> {
        let expected = dims[0] * dims[1] * dims[2];
        if voxels.len() != expected {
            return Err(MolVizError::LengthMismatch {
                field: "voxels",
                expected,
                found: voxels.len(),
            });
        }
        Ok(Self { dims, voxels })
    }

    /// Grid dimensions.
    #[must_use]
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Voxel value; out-of-range coordinates read as unset.
    #[must_use]
    pub fn get(&self, x: i64, y: i64, z: i64) -> bool {
        self.index(x, y, z).is_some_and(|i| self.voxels[i])
    }

    /// Number of set voxels.
    #[must_use]
    pub fn count(&self) -> usize {
        self.voxels.iter().filter(|&&v| v).count()
    }

    /// World-space centers of the set voxels under `affine`, e.g. as
    /// tracking seeds.
    #[must_use]
    pub fn voxel_centers(&self, affine: Mat4) -> Vec<Vec3> {
        self.set_voxels()
            .map(|v| affine.transform_point3(v.as_vec3()))
            .collect()
    }

    fn index(&self, x: i64, y: i64, z: i64) -> Option<usize> {
        let [nx, ny, nz] = self.dims;
        let x = usize::try_from(x).ok().filter(|&x| x < nx)?;
        let y = usize::try_from(y).ok().filter(|&y| y < ny)?;
        let z = usize::try_from(z).ok().filter(|&z| z < nz)?;
        Some(x + y * nx + z * nx * ny)
    }

    fn set_voxels(&self) -> impl Iterator<Item = IVec3> + '_ {
        let [nx, ny, _] = self.dims;
        self.voxels
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(move |(i, _)| {
                IVec3::new(
                    (i % nx) as i32,
                    ((i / nx) % ny) as i32,
                    (i / (nx * ny)) as i32,
                )
            })
    }
}

/// Surface around the set voxels of `mask`, mapped through the
/// voxel-to-world `affine`. Voxel `(i, j, k)` is the unit cube centered on
/// `(i, j, k)`; every face between a set and an unset voxel becomes one
/// outward-facing quad. Vertices are shared between faces of the same
/// orientation.
pub fn contour_from_roi(
    mask: &RoiMask,
    affine: Mat4,
    options: &ContourOptions,
) -> Result<Actor> {
    options.validate()?;
    if mask.count() == 0 {
        return Err(MolVizError::EmptyMask);
    }

    let linear = Mat3::from_mat4(affine);
    let normal_matrix = linear.inverse().transpose();
    let flip = linear.determinant() < 0.0;

    let mut mesh = Mesh::default();
    let mut shared: FxHashMap<(IVec3, usize), u32> = FxHashMap::default();

    for voxel in mask.set_voxels() {
        for (dir, step) in FACE_DIRECTIONS.iter().enumerate() {
            let neighbor = voxel + *step;
            if mask.get(
                i64::from(neighbor.x),
                i64::from(neighbor.y),
                i64::from(neighbor.z),
            ) {
                continue;
            }
            let normal = (normal_matrix * step.as_vec3()).normalize_or_zero();
            let mut quad = face_corners(voxel, dir).map(|corner| {
                *shared.entry((corner, dir)).or_insert_with(|| {
                    let pos = affine.transform_point3(
                        corner.as_vec3() - Vec3::splat(0.5),
                    );
                    mesh.vertices.push(MeshVertex {
                        position: pos.into(),
                        normal: normal.into(),
                        color: options.color,
                        residue_idx: 0,
                    });
                    (mesh.vertices.len() - 1) as u32
                })
            });
            if flip {
                quad.reverse();
            }
            let [a, b, c, d] = quad;
            mesh.indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }

    log::debug!(
        "contour_from_roi: {} voxels, {} triangles",
        mask.count(),
        mesh.triangle_count()
    );
    Ok(Actor::new(
        "contour_from_roi",
        Geometry::Mesh(mesh),
        options.opacity,
    ))
}

/// Outward steps: +x, -x, +y, -y, +z, -z.
const FACE_DIRECTIONS: [IVec3; 6] = [
    IVec3::X,
    IVec3::NEG_X,
    IVec3::Y,
    IVec3::NEG_Y,
    IVec3::Z,
    IVec3::NEG_Z,
];

/// Corner lattice points (voxel `v` spans `v..v + 1` on the lattice) of
/// face `dir`, counter-clockwise seen from outside.
fn face_corners(voxel: IVec3, dir: usize) -> [IVec3; 4] {
    let axis = dir / 2;
    let positive = dir % 2 == 0;
    let u = unit((axis + 1) % 3);
    let v = unit((axis + 2) % 3);
    let base = if positive { voxel + unit(axis) } else { voxel };
    let ccw = [base, base + u, base + u + v, base + v];
    if positive {
        ccw
    } else {
        [ccw[0], ccw[3], ccw[2], ccw[1]]
    }
}

fn unit(axis: usize) -> IVec3 {
    match axis {
        0 => IVec3::X,
        1 => IVec3::Y,
        _ => IVec3::Z,
    }
}
