//! # Grammar Engine
//!
//! Stochastic string rewriting (L-systems). The word produced here is the
//! input of the [turtle](crate::turtle).
//!
//! ## Semantics
//!
//! - A [`ProductionRule`] replaces every occurrence of its input symbol
//!   with one of its outputs, chosen uniformly and independently per
//!   occurrence. Other symbols pass through unchanged.
//! - [`LSystem::iterate`] applies **every** rule once per iteration, in
//!   registration order, each to the whole word left by the previous rule.
//!   Rule order therefore changes the result.
//! - The random source is injected, so seeded runs are reproducible.

mod lsystem;
mod rule;


pub use lsystem::LSystem;
pub use rule::ProductionRule;
