//! # Config Crate
//!
//! Centralized configuration for the procedural mesh pipeline.
//! All magic numbers and tunable parameters (turn angles, branch sizes,
//! profile resolutions, iteration counts) are defined here so the sweep
//! generator, the L-system turtle and the host binding agree on defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GenerationConfig, DEFAULT_TURN_ANGLE, EPSILON};
//!
//! let config = GenerationConfig::default();
//! assert!((config.turn_angle - DEFAULT_TURN_ANGLE).abs() < EPSILON);
//!
//! let tuned = GenerationConfig::new(40, 0.5, 0.3, 16).expect("valid config");
//! assert_eq!(tuned.profile_resolution, 16);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated**: Parameter bundles are checked once at construction

pub mod constants;

#[cfg(test)]
mod tests;
