//! The coiling axis: a start point, a fixed orthonormal frame and the
//! per-iteration parameters that move rings around it.

use super::param::{AxisParam, GeneratingShape};
use crate::error::{GeometryError, GeometryResult};
use crate::vector::{Vec2, Vec3, VectorExt};
use std::borrow::Cow;

/// Parametrized path that places one cross-section ring per iteration.
///
/// The frame is fixed at construction: the tangent is normalized, the
/// normal is made orthogonal to it (Gram-Schmidt) and the binormal is
/// `normal × tangent`.
///
/// # Example
///
/// ```rust
/// use procgen_mesh::sweep::{make_circle, CoilingAxis};
/// use procgen_mesh::Vec3;
///
/// let mut axis = CoilingAxis::new(Vec3::ZERO, Vec3::Z, Vec3::X, make_circle(1.0, 8)?, 3)?
///     .with_coiling_radius(5.0);
/// assert!(axis.iterate());
/// assert_eq!(axis.current_iteration(), 1);
/// # Ok::<(), procgen_mesh::GeometryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CoilingAxis {
    start_point: Vec3,
    tangent: Vec3,
    normal: Vec3,
    binormal: Vec3,
    displacement: AxisParam,
    coiling_rate: AxisParam,
    coiling_radius: AxisParam,
    scaling_factor: AxisParam,
    generating_shape: GeneratingShape,
    max_iterations: usize,
    current_iteration: usize,
}

impl CoilingAxis {
    /// Creates an axis with zero displacement, zero coiling rate, zero
    /// radius and unit scaling.
    ///
    /// # Errors
    /// - Configuration error when `max_iterations` is zero
    /// - [`GeometryError::DivideByZero`] when the tangent is zero or the
    ///   normal is parallel to it
    pub fn new(
        start_point: Vec3,
        tangent: Vec3,
        normal: Vec3,
        generating_shape: impl Into<GeneratingShape>,
        max_iterations: usize,
    ) -> GeometryResult<Self> {
        if max_iterations == 0 {
            return Err(GeometryError::configuration(
                "coiling axis needs max_iterations > 0",
            ));
        }

        let tangent = tangent.normalized()?;
        let normal = (normal - normal.projected_on(tangent)?).normalized()?;
        let binormal = normal.cross(tangent).normalized()?;

        Ok(Self {
            start_point,
            tangent,
            normal,
            binormal,
            displacement: AxisParam::Constant(0.0),
            coiling_rate: AxisParam::Constant(0.0),
            coiling_radius: AxisParam::Constant(0.0),
            scaling_factor: AxisParam::Constant(1.0),
            generating_shape: generating_shape.into(),
            max_iterations,
            current_iteration: 0,
        })
    }

    /// Sets the axial offset along the tangent.
    pub fn with_displacement(mut self, displacement: impl Into<AxisParam>) -> Self {
        self.displacement = displacement.into();
        self
    }

    /// Sets the rotation angle (radians) of the ring normal.
    pub fn with_coiling_rate(mut self, coiling_rate: impl Into<AxisParam>) -> Self {
        self.coiling_rate = coiling_rate.into();
        self
    }

    /// Sets the distance of ring centers from the axis.
    pub fn with_coiling_radius(mut self, coiling_radius: impl Into<AxisParam>) -> Self {
        self.coiling_radius = coiling_radius.into();
        self
    }

    /// Sets the cross-section scale.
    pub fn with_scaling_factor(mut self, scaling_factor: impl Into<AxisParam>) -> Self {
        self.scaling_factor = scaling_factor.into();
        self
    }

    /// Start point of the axis.
    pub fn start_point(&self) -> Vec3 {
        self.start_point
    }

    /// Unit tangent (constant along the axis).
    pub fn tangent_vector(&self) -> Vec3 {
        self.tangent
    }

    /// Unit binormal of the base frame.
    pub fn binormal(&self) -> Vec3 {
        self.binormal
    }

    /// Iteration the axis currently sits at.
    pub fn current_iteration(&self) -> usize {
        self.current_iteration
    }

    /// Iteration bound.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Point on the axis for the current iteration.
    pub fn axis_position(&self) -> Vec3 {
        self.start_point + self.displacement.at(self.current_iteration) * self.tangent
    }

    /// Base normal rotated by the coiling rate of the current iteration.
    pub fn normal_vector(&self) -> Vec3 {
        let angle = self.coiling_rate.at(self.current_iteration);
        angle.cos() * self.normal + angle.sin() * self.binormal
    }

    /// Coiling radius of the current iteration.
    pub fn radius(&self) -> f64 {
        self.coiling_radius.at(self.current_iteration)
    }

    /// Cross-section scale of the current iteration.
    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor.at(self.current_iteration)
    }

    /// Cross-section profile of the current iteration.
    pub fn generating_shape(&self) -> Cow<'_, [Vec2]> {
        self.generating_shape.at(self.current_iteration)
    }

    /// Advances one iteration; false once the bound is reached.
    pub fn iterate(&mut self) -> bool {
        self.current_iteration += 1;
        self.current_iteration < self.max_iterations
    }

    /// Rewinds to iteration 0 so the axis can be swept again.
    pub fn reset(&mut self) {
        self.current_iteration = 0;
    }
}
