//! GPU-ready primitive layouts.
//!
//! Instance and vertex structs are `#[repr(C)]` and `Pod` so a rendering
//! backend can upload them with a single byte copy.

use glam::Vec3;

use super::Aabb;

/// Per-instance data for a sphere impostor.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    /// xyz = position, w = radius
    pub center: [f32; 4],
    /// xyz = RGB color, w = atom index (packed as float)
    pub color: [f32; 4],
}

impl SphereInstance {
    /// Sphere at `pos` with the given radius, color, and atom index.
    #[must_use]
    pub fn new(pos: Vec3, radius: f32, color: [f32; 3], atom: u32) -> Self {
        Self {
            center: [pos.x, pos.y, pos.z, radius],
            color: [color[0], color[1], color[2], atom as f32],
        }
    }

    /// Center position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.center[0], self.center[1], self.center[2])
    }

    /// Radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.center[3]
    }

    /// RGB color.
    #[must_use]
    pub fn rgb(&self) -> [f32; 3] {
        [self.color[0], self.color[1], self.color[2]]
    }
}

/// Per-instance data for a capsule impostor (cylinder with hemispherical
/// ends).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CapsuleInstance {
    /// Endpoint A position (xyz), radius (w)
    pub endpoint_a: [f32; 4],
    /// Endpoint B position (xyz), bond index (w) - packed as float
    pub endpoint_b: [f32; 4],
    /// Color at endpoint A (RGB), w unused
    pub color_a: [f32; 4],
    /// Color at endpoint B (RGB), w unused
    pub color_b: [f32; 4],
}

impl CapsuleInstance {
    /// Capsule from `a` to `b`; `colors` is `[color_a, color_b]`.
    #[must_use]
    pub fn new(
        a: Vec3,
        b: Vec3,
        radius: f32,
        colors: [[f32; 3]; 2],
        bond: u32,
    ) -> Self {
        let [ca, cb] = colors;
        Self {
            endpoint_a: [a.x, a.y, a.z, radius],
            endpoint_b: [b.x, b.y, b.z, bond as f32],
            color_a: [ca[0], ca[1], ca[2], 0.0],
            color_b: [cb[0], cb[1], cb[2], 0.0],
        }
    }

    /// Both endpoint positions.
    #[must_use]
    pub fn endpoints(&self) -> [Vec3; 2] {
        [
            Vec3::new(self.endpoint_a[0], self.endpoint_a[1], self.endpoint_a[2]),
            Vec3::new(self.endpoint_b[0], self.endpoint_b[1], self.endpoint_b[2]),
        ]
    }

    /// Radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.endpoint_a[3]
    }

    /// RGB colors at both endpoints.
    #[must_use]
    pub fn rgb(&self) -> [[f32; 3]; 2] {
        [
            [self.color_a[0], self.color_a[1], self.color_a[2]],
            [self.color_b[0], self.color_b[1], self.color_b[2]],
        ]
    }
}

/// Vertex of a lit triangle mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
    /// RGB color.
    pub color: [f32; 3],
    /// Residue (or other source element) this vertex belongs to.
    pub residue_idx: u32,
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex buffer.
    pub vertices: Vec<MeshVertex>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append `other`, rebasing its indices.
    pub fn append(&mut self, other: &Self) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Raw vertex bytes for upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Bounds of all vertex positions.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().map(|v| Vec3::from(v.position)))
    }
}

/// Vertex of a colored polyline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// RGB color.
    pub color: [f32; 3],
}

/// A set of line strips sharing one vertex buffer and a line width.
///
/// Strip `i` spans `vertices[offsets[i]..offsets[i + 1]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polylines {
    vertices: Vec<LineVertex>,
    offsets: Vec<u32>,
    width: f32,
}

impl Polylines {
    /// Empty set of strips drawn `width` pixels wide.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            vertices: Vec::new(),
            offsets: vec![0],
            width,
        }
    }

    /// Append one strip with a single color.
    pub fn push_strip(&mut self, points: &[Vec3], color: [f32; 3]) {
        self.vertices.extend(points.iter().map(|p| LineVertex {
            position: p.to_array(),
            color,
        }));
        self.offsets.push(self.vertices.len() as u32);
    }

    /// Line width in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Number of strips.
    #[must_use]
    pub fn strip_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Vertices of strip `index`.
    #[must_use]
    pub fn strip(&self, index: usize) -> Option<&[LineVertex]> {
        let start = *self.offsets.get(index)? as usize;
        let end = *self.offsets.get(index + 1)? as usize;
        Some(&self.vertices[start..end])
    }

    /// Iterate over strips.
    pub fn strips(&self) -> impl Iterator<Item = &[LineVertex]> + '_ {
        (0..self.strip_count()).filter_map(|i| self.strip(i))
    }

    /// All vertices.
    #[must_use]
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Raw vertex bytes for upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Bounds of all vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().map(|v| Vec3::from(v.position)))
    }
}
