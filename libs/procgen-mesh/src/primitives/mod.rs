//! # Primitives
//!
//! Fixed-topology meshes that accompany generated structures.

pub mod cuboid;

pub use cuboid::cuboid;
