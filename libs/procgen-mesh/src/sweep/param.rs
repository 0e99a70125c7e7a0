//! Per-iteration parameters of a coiling axis.

use crate::vector::Vec2;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type ScalarFn = Arc<dyn Fn(usize) -> f64 + Send + Sync>;
type ShapeFn = Arc<dyn Fn(usize) -> Vec<Vec2> + Send + Sync>;

/// A scalar that is either fixed or a function of the iteration index.
///
/// # Example
///
/// ```rust
/// use procgen_mesh::sweep::AxisParam;
///
/// let radius = AxisParam::from(10.0);
/// let rate = AxisParam::from_fn(|n| n as f64 * 0.5);
/// assert_eq!(radius.at(3), 10.0);
/// assert_eq!(rate.at(3), 1.5);
/// ```
#[derive(Clone)]
pub enum AxisParam {
    /// Same value at every iteration.
    Constant(f64),
    /// Value computed from the iteration index.
    Function(ScalarFn),
}

impl AxisParam {
    /// Wraps a closure of the iteration index.
    pub fn from_fn(f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::Function(Arc::new(f))
    }

    /// Evaluates the parameter at iteration `n`.
    pub fn at(&self, n: usize) -> f64 {
        match self {
            Self::Constant(value) => *value,
            Self::Function(f) => f(n),
        }
    }
}

impl From<f64> for AxisParam {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl fmt::Debug for AxisParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Cross-section profile, fixed or recomputed per iteration.
#[derive(Clone)]
pub enum GeneratingShape {
    /// Same profile at every iteration.
    Fixed(Vec<Vec2>),
    /// Profile computed from the iteration index.
    Function(ShapeFn),
}

impl GeneratingShape {
    /// Wraps a closure of the iteration index.
    pub fn from_fn(f: impl Fn(usize) -> Vec<Vec2> + Send + Sync + 'static) -> Self {
        Self::Function(Arc::new(f))
    }

    /// Profile points for iteration `n`.
    pub fn at(&self, n: usize) -> Cow<'_, [Vec2]> {
        match self {
            Self::Fixed(points) => Cow::Borrowed(points),
            Self::Function(f) => Cow::Owned(f(n)),
        }
    }
}

impl From<Vec<Vec2>> for GeneratingShape {
    fn from(points: Vec<Vec2>) -> Self {
        Self::Fixed(points)
    }
}

impl fmt::Debug for GeneratingShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(points) => write!(f, "Fixed({} points)", points.len()),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}
