//! The turtle's local frame.

use crate::error::GeometryResult;
use crate::vector::{Vec3, VectorExt};
use serde::{Deserialize, Serialize};

/// Location plus tangent/normal/binormal axes.
///
/// Frames are plain values: the branch stack stores copies, so a pop
/// restores a frame exactly as it was pushed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Current position.
    pub location: Vec3,
    /// Heading.
    pub tangent: Vec3,
    /// Up direction.
    pub normal: Vec3,
    /// `tangent × normal`.
    pub binormal: Vec3,
}

impl Frame {
    /// Builds a frame with `binormal = tangent × normal`, all three axes
    /// normalized.
    ///
    /// # Errors
    /// [`GeometryError::DivideByZero`](crate::GeometryError::DivideByZero)
    /// when either vector is zero or the two are parallel.
    pub fn new(location: Vec3, tangent: Vec3, normal: Vec3) -> GeometryResult<Self> {
        let tangent = tangent.normalized()?;
        let normal = normal.normalized()?;
        let binormal = tangent.cross(normal).normalized()?;
        Ok(Self {
            location,
            tangent,
            normal,
            binormal,
        })
    }

    /// Rotates normal and binormal about the tangent.
    pub fn rotate_about_tangent(&mut self, delta: f64) -> GeometryResult<()> {
        let (normal, binormal) = rotate_pair(self.normal, self.binormal, delta)?;
        self.normal = normal;
        self.binormal = binormal;
        Ok(())
    }

    /// Rotates tangent and binormal about the normal.
    pub fn rotate_about_normal(&mut self, delta: f64) -> GeometryResult<()> {
        let (tangent, binormal) = rotate_pair(self.tangent, self.binormal, delta)?;
        self.tangent = tangent;
        self.binormal = binormal;
        Ok(())
    }

    /// Rotates tangent and normal about the binormal.
    pub fn rotate_about_binormal(&mut self, delta: f64) -> GeometryResult<()> {
        let (tangent, normal) = rotate_pair(self.tangent, self.normal, delta)?;
        self.tangent = tangent;
        self.normal = normal;
        Ok(())
    }
}

/// 2D rotation of the plane spanned by `u` and `v`, both re-normalized.
fn rotate_pair(u: Vec3, v: Vec3, delta: f64) -> GeometryResult<(Vec3, Vec3)> {
    let (sin, cos) = delta.sin_cos();
    let u_rotated = (cos * u + sin * v).normalized()?;
    let v_rotated = (cos * v - sin * u).normalized()?;
    Ok((u_rotated, v_rotated))
}
