//! # Error Types
//!
//! Error types for procedural generation. Every failure aborts the
//! generation run in progress; callers discard any partial buffers.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when operations fail
//! - All failures return explicit errors
//! - Errors include context for debugging

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating procedural geometry.
///
/// ## Example
///
/// ```rust
/// use procgen_mesh::{GeometryError, Vec3, VectorExt};
///
/// match Vec3::ZERO.normalized() {
///     Ok(v) => println!("unit vector {v}"),
///     Err(GeometryError::DivideByZero) => eprintln!("zero-length vector"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A zero-length vector was normalized.
    #[error("Cannot normalize a zero-length vector")]
    DivideByZero,

    /// The turtle met `]` with no saved branch point.
    #[error("Branch stack is empty: ']' has no matching '['")]
    EmptyStack,

    /// Two sequences that must line up index-for-index have different
    /// lengths.
    #[error("Index mismatch in {context}: expected {expected} points, found {found}")]
    IndexMismatch {
        /// Operation that detected the mismatch
        context: String,
        /// Length the operation required
        expected: usize,
        /// Length it received
        found: usize,
    },

    /// A generator received parameters it cannot work with.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the rejected parameter
        message: String,
    },

    /// A validated configuration bundle was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl GeometryError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an index mismatch error.
    pub fn index_mismatch(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::IndexMismatch {
            context: context.into(),
            expected,
            found,
        }
    }

    /// Stable machine-readable name of the error class, used by hosts.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DivideByZero => "divide_by_zero",
            Self::EmptyStack => "empty_stack",
            Self::IndexMismatch { .. } => "index_mismatch",
            Self::Configuration { .. } | Self::InvalidConfig(_) => "configuration",
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for generation operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================
