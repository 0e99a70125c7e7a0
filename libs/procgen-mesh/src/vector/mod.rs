//! Vector math shared by the sweep generator and the turtle.
//!
//! `glam::DVec2`/`glam::DVec3` supply the value semantics and operators
//! (add, subtract, scale, negate, dot, cross). [`VectorExt`] adds the
//! operations whose failure mode the generators rely on: normalizing a
//! zero vector is an error, not a NaN.

use crate::error::{GeometryError, GeometryResult};

pub use glam::DVec2 as Vec2;
pub use glam::DVec3 as Vec3;

/// Fallible length-dependent operations for glam vectors.
pub trait VectorExt: Sized + Copy {
    /// Euclidean length.
    fn magnitude(self) -> f64;

    /// Divides the vector by its magnitude.
    ///
    /// # Errors
    /// [`GeometryError::DivideByZero`] when the magnitude is zero, NaN or
    /// infinite.
    ///
    /// # Examples
    /// ```
    /// use procgen_mesh::{Vec3, VectorExt};
    /// let v = Vec3::new(3.0, 0.0, 4.0).normalized().unwrap();
    /// assert!((v.magnitude() - 1.0).abs() < 1e-12);
    /// assert!(Vec3::ZERO.normalized().is_err());
    /// ```
    fn normalized(self) -> GeometryResult<Self>;

    /// Component of `self` along `other`: `n * (self · n)` with
    /// `n = other.normalized()`.
    ///
    /// # Errors
    /// [`GeometryError::DivideByZero`] when `other` has zero magnitude.
    fn projected_on(self, other: Self) -> GeometryResult<Self>;
}

impl VectorExt for Vec2 {
    fn magnitude(self) -> f64 {
        self.length()
    }

    fn normalized(self) -> GeometryResult<Self> {
        let magnitude = self.length();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return Err(GeometryError::DivideByZero);
        }
        Ok(self / magnitude)
    }

    fn projected_on(self, other: Self) -> GeometryResult<Self> {
        let direction = other.normalized()?;
        Ok(direction * self.dot(direction))
    }
}

impl VectorExt for Vec3 {
    fn magnitude(self) -> f64 {
        self.length()
    }

    fn normalized(self) -> GeometryResult<Self> {
        let magnitude = self.length();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return Err(GeometryError::DivideByZero);
        }
        Ok(self / magnitude)
    }

    fn projected_on(self, other: Self) -> GeometryResult<Self> {
        let direction = other.normalized()?;
        Ok(direction * self.dot(direction))
    }
}

/// Point at `radius` along the direction `angle` (radians) from the origin.
///
/// # Examples
/// ```
/// use procgen_mesh::vector::from_polar;
/// let p = from_polar(2.0, 0.0);
/// assert_eq!(p.x, 2.0);
/// ```
pub fn from_polar(radius: f64, angle: f64) -> Vec2 {
    Vec2::new(radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests;
