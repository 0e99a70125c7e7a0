//! Builtin cross-section profiles and profile blending.

use crate::error::{GeometryError, GeometryResult};
use crate::vector::{from_polar, Vec2};
use config::constants::MIN_PROFILE_RESOLUTION;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};

/// Builtin profile families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// Regular polygon on a circle, see [`make_circle`].
    Circle,
    /// Half ellipse, see [`make_semi_oval`].
    SemiOval,
    /// Square with corners on the axes, see [`make_square`].
    Square,
}

impl ProfileKind {
    /// Generates this profile with the given radius and vertex count.
    pub fn generate(self, radius: f64, resolution: usize) -> GeometryResult<Vec<Vec2>> {
        match self {
            Self::Circle => make_circle(radius, resolution),
            Self::SemiOval => make_semi_oval(radius, resolution),
            Self::Square => make_square(radius, resolution),
        }
    }
}

fn check_resolution(profile: &str, resolution: usize) -> GeometryResult<()> {
    if resolution < MIN_PROFILE_RESOLUTION {
        return Err(GeometryError::configuration(format!(
            "{profile} profile needs at least {MIN_PROFILE_RESOLUTION} vertices, got {resolution}"
        )));
    }
    Ok(())
}

/// Regular `n`-gon inscribed in a circle of radius `r`.
///
/// Returns `n + 1` points at angles `0, 2π/n, …, 2π`; the last point
/// repeats the first so the polygon is explicitly closed.
///
/// # Example
///
/// ```rust
/// use procgen_mesh::sweep::make_circle;
///
/// let square = make_circle(1.0, 4).unwrap();
/// assert_eq!(square.len(), 5);
/// ```
pub fn make_circle(r: f64, n: usize) -> GeometryResult<Vec<Vec2>> {
    check_resolution("circle", n)?;
    let theta = 2.0 * PI / n as f64;
    Ok((0..=n).map(|i| from_polar(r, i as f64 * theta)).collect())
}

/// Upper half of an ellipse with semi-axes `r` (x) and `2r` (y), closed
/// by one extra point at `(-r, 0)`.
///
/// Returns `n + 1` points.
pub fn make_semi_oval(r: f64, n: usize) -> GeometryResult<Vec<Vec2>> {
    check_resolution("semi-oval", n)?;
    let theta = PI / n as f64;
    let mut points: Vec<Vec2> = (0..n)
        .map(|i| {
            let angle = i as f64 * theta;
            r * Vec2::new(angle.cos(), 2.0 * angle.sin())
        })
        .collect();
    points.push(Vec2::new(-r, 0.0));
    Ok(points)
}

/// Square with its corners on the coordinate axes at distance `r`.
///
/// Points are spread at equal angles; each angle's distance is corrected
/// for the side (quadrant) it falls on so every point lands on the
/// square's boundary. Returns `n` points, open (no repeated seam point).
pub fn make_square(r: f64, n: usize) -> GeometryResult<Vec<Vec2>> {
    check_resolution("square", n)?;
    let theta = 2.0 * PI / n as f64;
    Ok((0..n)
        .map(|i| {
            let side = (i * 4 / n) as f64;
            let angle = i as f64 * theta;
            let distance = r / SQRT_2 / (angle - side * FRAC_PI_2 - FRAC_PI_4).cos();
            from_polar(distance, angle)
        })
        .collect())
}

/// Linear blend from `start` to `end` at fraction `n / steps`.
///
/// # Errors
/// - [`GeometryError::IndexMismatch`] when the profiles differ in length
/// - Configuration error when `steps` is zero
///
/// # Example
///
/// ```rust
/// use procgen_mesh::sweep::{homotopy, make_circle, make_semi_oval};
///
/// let circle = make_circle(1.0, 12).unwrap();
/// let oval = make_semi_oval(1.0, 12).unwrap();
/// let halfway = homotopy(&circle, &oval, 1, 2).unwrap();
/// assert_eq!(halfway.len(), circle.len());
/// ```
pub fn homotopy(start: &[Vec2], end: &[Vec2], n: usize, steps: usize) -> GeometryResult<Vec<Vec2>> {
    if start.len() != end.len() {
        return Err(GeometryError::index_mismatch(
            "homotopy",
            start.len(),
            end.len(),
        ));
    }
    if steps == 0 {
        return Err(GeometryError::configuration(
            "homotopy needs a positive step count",
        ));
    }

    Ok(blend(start, end, n as f64 / steps as f64))
}

/// Pointwise `s + t * (e - s)`; callers check that the lengths agree.
pub(crate) fn blend(start: &[Vec2], end: &[Vec2], t: f64) -> Vec<Vec2> {
    start
        .iter()
        .zip(end)
        .map(|(s, e)| *s + t * (*e - *s))
        .collect()
}
