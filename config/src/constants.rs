//! # Configuration Constants
//!
//! Centralized constants for the procedural mesh pipeline. Turtle defaults,
//! branch tube sizing, profile resolution bounds and precision values are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Turtle**: Default turn angle and branch length
//! - **Branches**: Tube radius and ring resolution for turtle segments
//! - **Sweep**: Profile resolution and iteration defaults

use std::f64::consts::FRAC_PI_2;
use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when checking frames for orthonormality and when comparing
/// generated vertex positions.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// TURTLE CONSTANTS
// =============================================================================

/// Default turn angle δ applied by every rotation symbol (radians).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_TURN_ANGLE;
///
/// assert_eq!(DEFAULT_TURN_ANGLE.to_degrees().round(), 90.0);
/// ```
pub const DEFAULT_TURN_ANGLE: f64 = FRAC_PI_2;

/// Default distance the turtle advances on `F`.
pub const DEFAULT_BRANCH_LENGTH: f64 = 1.0;

// =============================================================================
// BRANCH CONSTANTS
// =============================================================================

/// Default radius of the hollow tube emitted for each branch segment.
pub const DEFAULT_BRANCH_RADIUS: f64 = 0.1;

/// Default number of vertices in each ring of a branch tube.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_BRANCH_RESOLUTION, MIN_PROFILE_RESOLUTION};
///
/// assert!(DEFAULT_BRANCH_RESOLUTION >= MIN_PROFILE_RESOLUTION);
/// ```
pub const DEFAULT_BRANCH_RESOLUTION: usize = 10;

// =============================================================================
// SWEEP CONSTANTS
// =============================================================================

/// Minimum number of vertices for any generated ring or profile.
///
/// Fewer than three points cannot enclose an area.
pub const MIN_PROFILE_RESOLUTION: usize = 3;

/// Default vertex count for builtin cross-section profiles.
pub const DEFAULT_PROFILE_RESOLUTION: usize = 20;

/// Default number of coiling-axis iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

// =============================================================================
// GENERATION CONFIG
// =============================================================================

/// Validated bundle of the plain configuration values a generation run
/// accepts.
///
/// # Example
///
/// ```rust
/// use config::constants::GenerationConfig;
///
/// let config = GenerationConfig::default();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Upper bound on coiling-axis iterations.
    pub max_iterations: usize,
    /// Distance covered by one turtle `F` step.
    pub branch_length: f64,
    /// Turtle turn angle δ in radians.
    pub turn_angle: f64,
    /// Vertex count for builtin cross-section profiles.
    pub profile_resolution: usize,
    /// Radius of branch tubes.
    pub branch_radius: f64,
    /// Vertices per branch tube ring.
    pub branch_resolution: usize,
}

impl GenerationConfig {
    /// Builds a configuration from the core values, keeping branch tube
    /// defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::{ConfigError, GenerationConfig};
    ///
    /// assert_eq!(
    ///     GenerationConfig::new(0, 1.0, 0.5, 8).unwrap_err(),
    ///     ConfigError::InvalidIterations(0)
    /// );
    /// ```
    pub fn new(
        max_iterations: usize,
        branch_length: f64,
        turn_angle: f64,
        profile_resolution: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            max_iterations,
            branch_length,
            turn_angle,
            profile_resolution,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the branch tube sizing.
    pub fn with_branch(mut self, radius: f64, resolution: usize) -> Result<Self, ConfigError> {
        self.branch_radius = radius;
        self.branch_resolution = resolution;
        self.validate()?;
        Ok(self)
    }

    /// Checks every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidIterations(self.max_iterations));
        }
        if self.branch_length <= 0.0 || !self.branch_length.is_finite() {
            return Err(ConfigError::InvalidBranchLength(self.branch_length));
        }
        if !self.turn_angle.is_finite() {
            return Err(ConfigError::InvalidTurnAngle(self.turn_angle));
        }
        if self.profile_resolution < MIN_PROFILE_RESOLUTION {
            return Err(ConfigError::InvalidResolution(self.profile_resolution));
        }
        if self.branch_radius <= 0.0 || !self.branch_radius.is_finite() {
            return Err(ConfigError::InvalidRadius(self.branch_radius));
        }
        if self.branch_resolution < MIN_PROFILE_RESOLUTION {
            return Err(ConfigError::InvalidResolution(self.branch_resolution));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            branch_length: DEFAULT_BRANCH_LENGTH,
            turn_angle: DEFAULT_TURN_ANGLE,
            profile_resolution: DEFAULT_PROFILE_RESOLUTION,
            branch_radius: DEFAULT_BRANCH_RADIUS,
            branch_resolution: DEFAULT_BRANCH_RESOLUTION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the iteration bound is zero.
    InvalidIterations(usize),
    /// Raised when the branch length is zero, negative or not finite.
    InvalidBranchLength(f64),
    /// Raised when the turn angle is NaN or infinite.
    InvalidTurnAngle(f64),
    /// Raised when a resolution is too small to form a polygon.
    InvalidResolution(usize),
    /// Raised when a radius is zero, negative or not finite.
    InvalidRadius(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidIterations(value) => {
                write!(f, "max_iterations must be > 0: {value}")
            }
            ConfigError::InvalidBranchLength(value) => {
                write!(f, "branch_length must be positive: {value}")
            }
            ConfigError::InvalidTurnAngle(value) => {
                write!(f, "turn_angle must be finite: {value}")
            }
            ConfigError::InvalidResolution(value) => {
                write!(f, "resolution must be >= {MIN_PROFILE_RESOLUTION}: {value}")
            }
            ConfigError::InvalidRadius(value) => {
                write!(f, "radius must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
