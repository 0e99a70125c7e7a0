//! # Procgen Mesh
//!
//! Procedural mesh generation: coiling-axis sweeps and L-system turtle
//! branching structures, emitted as indexed vertex/edge/quad buffers.
//!
//! ## Architecture
//!
//! ```text
//! grammar (word) → turtle ─┐
//!                          ├→ Mesh → MeshSink (host)
//! profile + axis → sweep ──┘
//! ```
//!
//! The generators never talk to a host scene. Finished buffers go through
//! [`MeshSink::create_mesh`]; [`MeshCollection`] is the in-memory sink.
//!
//! ## Usage
//!
//! ```rust
//! use procgen_mesh::recipe::{LSystemRecipe, SweepRecipe};
//!
//! let shell = SweepRecipe::coiled_shell().generate()?;
//! assert!(shell.validate());
//!
//! let koch = LSystemRecipe::koch_curve_3d(1).generate()?;
//! assert_eq!(koch.len(), 32);
//! # Ok::<(), procgen_mesh::GeometryError>(())
//! ```

pub mod error;
pub mod grammar;
pub mod host;
pub mod mesh;
pub mod primitives;
pub mod recipe;
pub mod sweep;
pub mod turtle;
pub mod vector;

pub use error::{GeometryError, GeometryResult};
pub use host::{submit, MeshCollection, MeshId, MeshSink, OutputMode};
pub use mesh::Mesh;
pub use vector::{Vec2, Vec3, VectorExt};
