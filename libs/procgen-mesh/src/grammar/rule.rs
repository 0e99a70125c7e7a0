//! Single-symbol production rules.

use crate::error::{GeometryError, GeometryResult};
use crate::recipe::RuleSpec;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rewrites one symbol into one of several output strings.
///
/// # Example
///
/// ```rust
/// use procgen_mesh::grammar::ProductionRule;
/// use rand::SeedableRng;
///
/// let rule = ProductionRule::simple('F', "F+F");
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// assert_eq!(rule.apply("F-F", &mut rng), "F+F-F+F");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleSpec")]
pub struct ProductionRule {
    input: char,
    outputs: Vec<String>,
}

impl ProductionRule {
    /// Creates a rule with one or more candidate outputs.
    ///
    /// # Errors
    /// Returns a configuration error when `outputs` is empty.
    pub fn new<S: Into<String>>(
        input: char,
        outputs: impl IntoIterator<Item = S>,
    ) -> GeometryResult<Self> {
        let outputs: Vec<String> = outputs.into_iter().map(Into::into).collect();
        if outputs.is_empty() {
            return Err(GeometryError::configuration(format!(
                "production rule for '{input}' needs at least one output"
            )));
        }
        Ok(Self { input, outputs })
    }

    /// Creates a deterministic rule with a single output.
    pub fn simple(input: char, output: impl Into<String>) -> Self {
        Self {
            input,
            outputs: vec![output.into()],
        }
    }

    /// Symbol this rule rewrites.
    pub fn input(&self) -> char {
        self.input
    }

    /// Candidate replacements.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Number of candidate replacements (always at least one).
    pub fn n_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Rewrites `word` left to right, substituting each occurrence of the
    /// input symbol with an output drawn from `rng`.
    pub fn apply<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String {
        let mut rewritten = String::with_capacity(word.len());
        for symbol in word.chars() {
            if symbol == self.input {
                rewritten.push_str(self.pick(rng));
            } else {
                rewritten.push(symbol);
            }
        }
        rewritten
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        match self.outputs.as_slice() {
            [only] => only.as_str(),
            outputs => outputs[rng.gen_range(0..outputs.len())].as_str(),
        }
    }
}
