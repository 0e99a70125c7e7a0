//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants,
//! generation parameter validation and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_turn_angle_is_right_angle() {
    assert!(approx_equal(DEFAULT_TURN_ANGLE, std::f64::consts::PI / 2.0));
}

#[test]
fn test_branch_defaults() {
    assert_eq!(DEFAULT_BRANCH_RESOLUTION, 10);
    assert!(approx_equal(DEFAULT_BRANCH_RADIUS, 0.1));
    assert!(approx_equal(DEFAULT_BRANCH_LENGTH, 1.0));
}

#[test]
fn test_min_profile_resolution_forms_polygon() {
    // A ring needs at least 3 points to enclose an area
    assert_eq!(MIN_PROFILE_RESOLUTION, 3);
    assert!(DEFAULT_PROFILE_RESOLUTION >= MIN_PROFILE_RESOLUTION);
}

// =============================================================================
// GENERATION CONFIG TESTS
// =============================================================================

#[test]
fn test_default_config_is_valid() {
    let config = GenerationConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    assert_eq!(config.branch_resolution, DEFAULT_BRANCH_RESOLUTION);
}

#[test]
fn test_new_accepts_valid_values() {
    let config = GenerationConfig::new(12, 2.5, 0.4, 8).expect("valid config");
    assert_eq!(config.max_iterations, 12);
    assert!(approx_equal(config.branch_length, 2.5));
    assert!(approx_equal(config.turn_angle, 0.4));
    assert_eq!(config.profile_resolution, 8);
    // Branch sizing keeps its defaults
    assert!(approx_equal(config.branch_radius, DEFAULT_BRANCH_RADIUS));
}

#[test]
fn test_new_rejects_zero_iterations() {
    assert_eq!(
        GenerationConfig::new(0, 1.0, 0.5, 8).unwrap_err(),
        ConfigError::InvalidIterations(0)
    );
}

#[test]
fn test_new_rejects_non_positive_branch_length() {
    assert_eq!(
        GenerationConfig::new(5, 0.0, 0.5, 8).unwrap_err(),
        ConfigError::InvalidBranchLength(0.0)
    );
    assert_eq!(
        GenerationConfig::new(5, -1.0, 0.5, 8).unwrap_err(),
        ConfigError::InvalidBranchLength(-1.0)
    );
    assert!(GenerationConfig::new(5, f64::NAN, 0.5, 8).is_err());
}

#[test]
fn test_new_rejects_non_finite_turn_angle() {
    assert!(matches!(
        GenerationConfig::new(5, 1.0, f64::INFINITY, 8),
        Err(ConfigError::InvalidTurnAngle(_))
    ));
}

#[test]
fn test_new_rejects_small_resolution() {
    assert_eq!(
        GenerationConfig::new(5, 1.0, 0.5, 2).unwrap_err(),
        ConfigError::InvalidResolution(2)
    );
}

#[test]
fn test_with_branch_validates() {
    let config = GenerationConfig::default();
    assert!(config.with_branch(0.25, 6).is_ok());
    assert_eq!(
        config.with_branch(0.0, 6).unwrap_err(),
        ConfigError::InvalidRadius(0.0)
    );
    assert_eq!(
        config.with_branch(0.25, 1).unwrap_err(),
        ConfigError::InvalidResolution(1)
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidIterations(0);
    assert!(err.to_string().contains("max_iterations"));
    let err = ConfigError::InvalidResolution(2);
    assert!(err.to_string().contains(">= 3"));
}

// =============================================================================
// APPROX_EQUAL TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(1.0, 2.0));
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(0.1));
}
