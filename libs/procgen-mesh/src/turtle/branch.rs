//! Hollow tube segments emitted by the turtle's forward step.

use crate::error::{GeometryError, GeometryResult};
use crate::mesh::Mesh;
use crate::vector::Vec3;
use config::constants::{DEFAULT_BRANCH_RADIUS, DEFAULT_BRANCH_RESOLUTION, MIN_PROFILE_RESOLUTION};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Cross-section of a branch tube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BranchStyle {
    /// Tube radius.
    pub radius: f64,
    /// Vertices per ring.
    pub resolution: usize,
}

impl Default for BranchStyle {
    fn default() -> Self {
        Self {
            radius: DEFAULT_BRANCH_RADIUS,
            resolution: DEFAULT_BRANCH_RESOLUTION,
        }
    }
}

impl BranchStyle {
    /// Rejects non-positive radii and rings with fewer than three vertices.
    pub fn validate(&self) -> GeometryResult<()> {
        if self.radius <= 0.0 || !self.radius.is_finite() {
            return Err(GeometryError::configuration(format!(
                "branch radius must be positive, got {}",
                self.radius
            )));
        }
        if self.resolution < MIN_PROFILE_RESOLUTION {
            return Err(GeometryError::configuration(format!(
                "branch resolution must be at least {MIN_PROFILE_RESOLUTION}, got {}",
                self.resolution
            )));
        }
        Ok(())
    }
}

/// Builds an uncapped tube from `start` to `end`.
///
/// Ring vertices lie in the plane spanned by `normal` and `binormal`.
/// They are interleaved: index `2i` sits on the end ring and `2i + 1`
/// on the start ring at the same angle. Each of the `resolution` sides
/// gets a rung edge, one edge along each ring and one quad.
///
/// # Example
///
/// ```rust
/// use procgen_mesh::turtle::{branch_segment, BranchStyle};
/// use procgen_mesh::Vec3;
///
/// let tube = branch_segment(Vec3::ZERO, Vec3::Z, Vec3::X, Vec3::Y, &BranchStyle::default())?;
/// assert_eq!(tube.vertex_count(), 20);
/// assert_eq!(tube.face_count(), 10);
/// # Ok::<(), procgen_mesh::GeometryError>(())
/// ```
pub fn branch_segment(
    start: Vec3,
    end: Vec3,
    normal: Vec3,
    binormal: Vec3,
    style: &BranchStyle,
) -> GeometryResult<Mesh> {
    style.validate()?;

    let resolution = style.resolution;
    let mut mesh = Mesh::with_capacity(2 * resolution, 3 * resolution, resolution);
    let step = 2.0 * PI / resolution as f64;

    for i in 0..resolution {
        let (sin, cos) = (i as f64 * step).sin_cos();
        let offset = style.radius * (cos * normal + sin * binormal);
        mesh.add_vertex(end + offset);
        mesh.add_vertex(start + offset);
    }

    let ring_len = 2 * resolution as u32;
    for i in 0..resolution as u32 {
        let bottom = 2 * i;
        let top = bottom + 1;
        let next_bottom = (bottom + 2) % ring_len;
        let next_top = (bottom + 3) % ring_len;

        mesh.add_edge(bottom, top);
        mesh.add_edge(bottom, next_bottom);
        mesh.add_edge(top, next_top);
        mesh.add_quad(bottom, next_bottom, next_top, top);
    }

    Ok(mesh)
}
