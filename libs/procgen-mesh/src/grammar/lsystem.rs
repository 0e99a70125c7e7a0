//! Iterated rewriting of an axiom.

use super::rule::ProductionRule;
use rand::Rng;

/// An axiom plus an ordered list of production rules.
///
/// # Example
///
/// ```rust
/// use procgen_mesh::grammar::{LSystem, ProductionRule};
///
/// let mut system = LSystem::new("F").with_rule(ProductionRule::simple('F', "FF"));
/// assert_eq!(system.iterate(2), "FFFF");
/// assert_eq!(system.iterations(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LSystem {
    axiom: String,
    rules: Vec<ProductionRule>,
    current: String,
    iterations: usize,
}

impl LSystem {
    /// Creates a system with no rules whose word starts as `axiom`.
    pub fn new(axiom: impl Into<String>) -> Self {
        let axiom = axiom.into();
        Self {
            current: axiom.clone(),
            axiom,
            rules: Vec::new(),
            iterations: 0,
        }
    }

    /// Creates a system from an axiom and rules in application order.
    pub fn with_rules(axiom: impl Into<String>, rules: Vec<ProductionRule>) -> Self {
        Self {
            rules,
            ..Self::new(axiom)
        }
    }

    /// Appends a rule; it runs after every rule registered before it.
    pub fn with_rule(mut self, rule: ProductionRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Starting word.
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// Registered rules in application order.
    pub fn rules(&self) -> &[ProductionRule] {
        &self.rules
    }

    /// Word after the iterations run so far.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Number of iterations run since construction or the last reset.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Runs `n` iterations using the thread-local random source.
    pub fn iterate(&mut self, n: usize) -> &str {
        self.iterate_with(n, &mut rand::thread_rng())
    }

    /// Runs `n` iterations drawing output choices from `rng`.
    ///
    /// Each iteration applies every rule once, in order, to the whole
    /// current word.
    pub fn iterate_with<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> &str {
        for _ in 0..n {
            self.iterations += 1;
            for rule in &self.rules {
                self.current = rule.apply(&self.current, rng);
            }
            tracing::trace!(
                iteration = self.iterations,
                length = self.current.len(),
                "l-system iteration"
            );
        }
        &self.current
    }

    /// Restores the axiom and clears the iteration count.
    pub fn reset(&mut self) {
        self.current = self.axiom.clone();
        self.iterations = 0;
    }
}
