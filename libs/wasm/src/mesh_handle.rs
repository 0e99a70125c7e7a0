//! # Mesh Handle
//!
//! WASM-friendly wrappers for mesh data that can be transferred to
//! JavaScript.

use procgen_mesh::{GeometryResult, Mesh, MeshSink};
use wasm_bindgen::prelude::*;

/// Flat buffers of one generated mesh.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = coiled_shell();
///
/// // Get counts
/// const vertexCount = mesh.vertex_count;
/// const faceCount = mesh.face_count;
///
/// // Get buffers for Three.js
/// const vertices = mesh.vertices();   // Float32Array
/// const indices = mesh.triangles();   // Uint32Array
///
/// // Create BufferGeometry
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(vertices, 3));
/// geometry.setIndex(new THREE.BufferAttribute(indices, 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Edge indices as [a, b, a, b, ...]
    edges: Vec<u32>,
    /// Quad indices as [a, b, c, d, ...]
    faces: Vec<u32>,
    /// Quads split into triangles as [i0, i1, i2, ...]
    triangles: Vec<u32>,
    vertex_count: u32,
    edge_count: u32,
    face_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of edges.
    #[wasm_bindgen(getter)]
    pub fn edge_count(&self) -> u32 {
        self.edge_count
    }

    /// Returns the number of quad faces.
    #[wasm_bindgen(getter)]
    pub fn face_count(&self) -> u32 {
        self.face_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the edge indices as a Uint32Array.
    ///
    /// Length: edge_count * 2
    pub fn edges(&self) -> Vec<u32> {
        self.edges.clone()
    }

    /// Returns the quad indices as a Uint32Array.
    ///
    /// Length: face_count * 4
    pub fn faces(&self) -> Vec<u32> {
        self.faces.clone()
    }

    /// Returns triangle indices (two per quad) as a Uint32Array.
    ///
    /// Length: face_count * 6
    pub fn triangles(&self) -> Vec<u32> {
        self.triangles.clone()
    }

    /// Returns true if the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a Mesh.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.vertices_f32(),
            edges: mesh.edges_u32(),
            faces: mesh.faces_u32(),
            triangles: mesh.triangle_indices_u32(),
            vertex_count: to_u32(mesh.vertex_count()),
            edge_count: to_u32(mesh.edge_count()),
            face_count: to_u32(mesh.face_count()),
        }
    }
}

impl From<Mesh> for MeshHandle {
    fn from(mesh: Mesh) -> Self {
        Self::from_mesh(&mesh)
    }
}

fn to_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Ordered list of mesh handles, one per created host object.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct MeshHandleList {
    handles: Vec<MeshHandle>,
}

#[wasm_bindgen]
impl MeshHandleList {
    /// Returns the number of meshes.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns true if the list holds no mesh.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Returns a mesh by index.
    pub fn get(&self, index: usize) -> Option<MeshHandle> {
        self.handles.get(index).cloned()
    }
}

impl MeshHandleList {
    /// All handles in creation order.
    pub fn handles(&self) -> &[MeshHandle] {
        &self.handles
    }
}

impl MeshSink for MeshHandleList {
    type Handle = usize;

    fn create_mesh(&mut self, mesh: Mesh) -> GeometryResult<usize> {
        self.handles.push(MeshHandle::from(mesh));
        Ok(self.handles.len() - 1)
    }
}
