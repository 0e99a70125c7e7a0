//! # Mesh Data Structure
//!
//! Indexed buffer of vertices, edges and quad faces produced by one
//! generation run and handed whole to the host.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An indexed quad mesh with explicit edges.
///
/// Vertex indices follow insertion order and are never reused. All
/// geometry is f64; conversion to f32 happens only in the flat exports
/// for GPU hosts.
///
/// # Example
///
/// ```rust
/// use procgen_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// let d = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_quad(a, b, c, d);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Edge index pairs
    edges: Vec<[u32; 2]>,
    /// Quad index quadruples
    faces: Vec<[u32; 4]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, edge_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::with_capacity(edge_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of quad faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds an edge by vertex indices.
    pub fn add_edge(&mut self, v0: u32, v1: u32) {
        self.edges.push([v0, v1]);
    }

    /// Adds a quad face by vertex indices.
    pub fn add_quad(&mut self, v0: u32, v1: u32, v2: u32, v3: u32) {
        self.faces.push([v0, v1, v2, v3]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the edges.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns a reference to the quad faces.
    #[inline]
    pub fn faces(&self) -> &[[u32; 4]] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Appends another mesh, offsetting its indices past this mesh's
    /// vertices so the two index spaces never overlap.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.edges
            .extend(other.edges.iter().map(|e| [e[0] + offset, e[1] + offset]));
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|f| [f[0] + offset, f[1] + offset, f[2] + offset, f[3] + offset]),
        );
    }

    /// Merges a sequence of meshes into one buffer.
    pub fn merge_all<'a>(meshes: impl IntoIterator<Item = &'a Mesh>) -> Mesh {
        meshes.into_iter().fold(Mesh::new(), |mut acc, mesh| {
            acc.merge(mesh);
            acc
        })
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All edge and face indices are valid
    /// - No edge or face repeats a vertex index
    ///
    /// Coincident vertex positions are allowed: sweeps over closed profiles
    /// carry a duplicated seam point.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        let edges_ok = self
            .edges
            .iter()
            .all(|e| e[0] < vertex_count && e[1] < vertex_count && e[0] != e[1]);

        let faces_ok = self.faces.iter().all(|f| {
            f.iter().all(|&i| i < vertex_count)
                && (0..4).all(|a| (a + 1..4).all(|b| f[a] != f[b]))
        });

        edges_ok && faces_ok
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports edges as flattened [a, b, a, b, ...] indices.
    pub fn edges_u32(&self) -> Vec<u32> {
        self.edges.iter().flatten().copied().collect()
    }

    /// Exports quads as flattened [a, b, c, d, ...] indices.
    pub fn faces_u32(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }

    /// Exports faces as triangle indices, two triangles per quad.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn triangle_indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.faces.len() * 6);
        for f in &self.faces {
            result.extend_from_slice(&[f[0], f[1], f[2], f[0], f[2], f[3]]);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Mesh {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(DVec3::ZERO);
        let b = mesh.add_vertex(DVec3::X);
        let c = mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        let d = mesh.add_vertex(DVec3::Y);
        mesh.add_edge(a, b);
        mesh.add_edge(b, c);
        mesh.add_edge(c, d);
        mesh.add_edge(d, a);
        mesh.add_quad(a, b, c, d);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.edge_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex_returns_insertion_index() {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0)), 0);
        assert_eq!(mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0)), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_bounding_box_empty() {
        assert_eq!(Mesh::new().bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_square().validate());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_quad(0, 1, 2, 3);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_repeated_index() {
        let mut mesh = unit_square();
        mesh.add_edge(2, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_merge_offsets_indices() {
        let mut first = unit_square();
        let second = unit_square();
        first.merge(&second);

        assert_eq!(first.vertex_count(), 8);
        assert_eq!(first.edge_count(), 8);
        assert_eq!(first.faces()[1], [4, 5, 6, 7]);
        assert_eq!(first.edges()[4], [4, 5]);
        assert!(first.validate());
    }

    #[test]
    fn test_mesh_merge_all() {
        let parts = vec![unit_square(), unit_square(), unit_square()];
        let merged = Mesh::merge_all(&parts);
        assert_eq!(merged.vertex_count(), 12);
        assert_eq!(merged.face_count(), 3);
        assert_eq!(merged.faces()[2], [8, 9, 10, 11]);
    }

    #[test]
    fn test_mesh_translate() {
        let mut mesh = unit_square();
        mesh.translate(DVec3::new(0.0, 0.0, 2.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.z, 2.0);
        assert_eq!(max.z, 2.0);
    }

    #[test]
    fn test_mesh_flat_exports() {
        let mesh = unit_square();
        assert_eq!(mesh.vertices_f32().len(), 12);
        assert_eq!(mesh.edges_u32(), vec![0, 1, 1, 2, 2, 3, 3, 0]);
        assert_eq!(mesh.faces_u32(), vec![0, 1, 2, 3]);
        assert_eq!(mesh.triangle_indices_u32(), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_mesh_serializes_to_json() {
        let mesh = unit_square();
        let json = serde_json::to_string(&mesh).expect("serializable");
        let back: Mesh = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, mesh);
    }
}
