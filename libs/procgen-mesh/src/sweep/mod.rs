//! # Coiling-Axis Sweeps
//!
//! Sweeps a 2D cross-section along a parametrized axis to build tubes,
//! spirals and shells.
//!
//! ## Algorithm
//!
//! 1. The [`CoilingAxis`] advances one iteration `n`
//! 2. Axis position: `start + displacement(n) * tangent`
//! 3. Rotated normal: `cos(rate(n)) * normal + sin(rate(n)) * binormal`
//! 4. Ring center: `axis position + coiling_radius(n) * rotated normal`
//! 5. Each profile point `p`, scaled by `scaling_factor(n)`, lands at
//!    `center + p.x * rotated normal + p.y * tangent`
//! 6. Consecutive rings are stitched with edges and quads

mod axis;
mod generate;
mod param;
mod profile;


pub use axis::CoilingAxis;
pub use generate::generate_sweep;
pub use param::{AxisParam, GeneratingShape};
pub use profile::{homotopy, make_circle, make_semi_oval, make_square, ProfileKind};
pub(crate) use profile::blend;
