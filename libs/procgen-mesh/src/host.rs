//! # Host Handoff
//!
//! The generators never touch a host scene directly. Finished buffers go
//! through [`MeshSink::create_mesh`], the single operation a host binding
//! has to provide.

use crate::error::GeometryResult;
use crate::mesh::Mesh;
use serde::{Deserialize, Serialize};

/// Receiver of finished meshes, implemented by host bindings.
pub trait MeshSink {
    /// Host-side reference to a created mesh object.
    type Handle;

    /// Takes ownership of a finished mesh buffer.
    fn create_mesh(&mut self, mesh: Mesh) -> GeometryResult<Self::Handle>;
}

/// How multi-part output (one tube per turtle `F`) reaches the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// One host mesh per part.
    PerSegment,
    /// All parts merged into one buffer with disjoint index ranges.
    #[default]
    Merged,
}

/// Hands `meshes` to `sink` according to `mode`.
///
/// In [`OutputMode::Merged`] an empty input still produces one (empty)
/// host mesh.
pub fn submit<S: MeshSink>(
    sink: &mut S,
    meshes: Vec<Mesh>,
    mode: OutputMode,
) -> GeometryResult<Vec<S::Handle>> {
    tracing::debug!(parts = meshes.len(), ?mode, "submitting meshes to host");
    match mode {
        OutputMode::PerSegment => meshes
            .into_iter()
            .map(|mesh| sink.create_mesh(mesh))
            .collect(),
        OutputMode::Merged => {
            let merged = Mesh::merge_all(&meshes);
            Ok(vec![sink.create_mesh(merged)?])
        }
    }
}

/// Index of a mesh inside a [`MeshCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshId(pub usize);

/// Named in-memory container of meshes, the headless stand-in for a host
/// scene collection.
///
/// # Example
///
/// ```rust
/// use procgen_mesh::{Mesh, MeshCollection, MeshSink};
///
/// let mut collection = MeshCollection::new("shells");
/// let id = collection.create_mesh(Mesh::new()).unwrap();
/// assert!(collection.get(id).is_some());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshCollection {
    name: String,
    meshes: Vec<Mesh>,
}

impl MeshCollection {
    /// Creates an empty collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meshes: Vec::new(),
        }
    }

    /// Collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of meshes held.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Returns true if no mesh has been created.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Looks up a mesh by handle.
    pub fn get(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0)
    }

    /// All meshes in creation order.
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }
}

impl MeshSink for MeshCollection {
    type Handle = MeshId;

    fn create_mesh(&mut self, mesh: Mesh) -> GeometryResult<MeshId> {
        let id = MeshId(self.meshes.len());
        tracing::trace!(
            collection = %self.name,
            id = id.0,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "mesh created"
        );
        self.meshes.push(mesh);
        Ok(id)
    }
}
