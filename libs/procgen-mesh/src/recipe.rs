//! # Recipes
//!
//! Serializable descriptions of complete generation runs. A host passes
//! plain values (usually JSON) instead of building axes and turtles by
//! hand; the presets reproduce the stock shell and Koch curve models.

use crate::error::{GeometryError, GeometryResult};
use crate::grammar::{LSystem, ProductionRule};
use crate::host::{submit, MeshSink, OutputMode};
use crate::mesh::Mesh;
use crate::sweep::{blend, generate_sweep, homotopy, AxisParam, CoilingAxis, GeneratingShape, ProfileKind};
use crate::turtle::{BranchStyle, Turtle};
use crate::vector::Vec3;
use config::constants::{
    GenerationConfig, DEFAULT_BRANCH_LENGTH, DEFAULT_MAX_ITERATIONS, DEFAULT_PROFILE_RESOLUTION,
    DEFAULT_TURN_ANGLE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// =============================================================================
// SWEEP
// =============================================================================

/// Per-iteration scalar parameter in serializable form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParamSpec {
    /// Same value at every iteration.
    Constant {
        /// The value
        value: f64,
    },
    /// `offset + slope * n`
    Linear {
        /// Value at iteration 0
        offset: f64,
        /// Change per iteration
        slope: f64,
    },
}

impl ParamSpec {
    /// Shorthand for [`ParamSpec::Constant`].
    pub fn constant(value: f64) -> Self {
        Self::Constant { value }
    }

    /// Shorthand for a [`ParamSpec::Linear`] through the origin.
    pub fn per_iteration(slope: f64) -> Self {
        Self::Linear { offset: 0.0, slope }
    }

    /// Value at iteration `n`.
    pub fn at(&self, n: usize) -> f64 {
        match *self {
            Self::Constant { value } => value,
            Self::Linear { offset, slope } => offset + slope * n as f64,
        }
    }
}

impl From<ParamSpec> for AxisParam {
    fn from(spec: ParamSpec) -> Self {
        match spec {
            ParamSpec::Constant { value } => AxisParam::Constant(value),
            linear => AxisParam::from_fn(move |n| linear.at(n)),
        }
    }
}

/// Cross-section of a sweep, optionally morphing into a second profile
/// over the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSpec {
    /// Profile family at iteration 0.
    pub kind: ProfileKind,
    /// Profile radius.
    pub radius: f64,
    /// Vertex count passed to the profile generator.
    pub resolution: usize,
    /// Profile the section morphs toward, if any. Iteration `n` blends by
    /// `n / max_iterations`, so the last ring stops one step short of it.
    #[serde(default)]
    pub morph_to: Option<ProfileKind>,
}

impl Default for ProfileSpec {
    fn default() -> Self {
        Self {
            kind: ProfileKind::Circle,
            radius: 1.0,
            resolution: DEFAULT_PROFILE_RESOLUTION,
            morph_to: None,
        }
    }
}

impl ProfileSpec {
    /// Builds the generating shape; a morph blends over `steps` iterations.
    ///
    /// # Errors
    /// - Configuration error for resolutions below three
    /// - [`GeometryError::IndexMismatch`] when the two profiles differ in
    ///   length
    pub fn build(&self, steps: usize) -> GeometryResult<GeneratingShape> {
        let start = self.kind.generate(self.radius, self.resolution)?;
        let Some(target) = self.morph_to else {
            return Ok(start.into());
        };

        let end = target.generate(self.radius, self.resolution)?;
        // Length and step errors surface here, before any ring is emitted
        homotopy(&start, &end, 0, steps)?;
        let steps = steps as f64;
        Ok(GeneratingShape::from_fn(move |n| {
            blend(&start, &end, n as f64 / steps)
        }))
    }
}

/// Complete description of a coiling-axis sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepRecipe {
    /// Axis start point.
    pub start: Vec3,
    /// Axis direction.
    pub tangent: Vec3,
    /// Initial ring normal (orthogonalized against the tangent).
    pub normal: Vec3,
    /// Iteration bound; rings are emitted for `1..max_iterations`.
    pub max_iterations: usize,
    /// Axial offset along the tangent.
    pub displacement: ParamSpec,
    /// Normal rotation angle in radians.
    pub coiling_rate: ParamSpec,
    /// Ring center distance from the axis.
    pub coiling_radius: ParamSpec,
    /// Cross-section scale.
    pub scaling_factor: ParamSpec,
    /// Cross-section profile.
    pub profile: ProfileSpec,
}

impl Default for SweepRecipe {
    fn default() -> Self {
        Self {
            start: Vec3::ZERO,
            tangent: Vec3::Z,
            normal: Vec3::X,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            displacement: ParamSpec::constant(0.0),
            coiling_rate: ParamSpec::constant(0.0),
            coiling_radius: ParamSpec::constant(0.0),
            scaling_factor: ParamSpec::constant(1.0),
            profile: ProfileSpec::default(),
        }
    }
}

impl SweepRecipe {
    /// Spiral shell: a growing half-oval coiled around +Z, ten degrees
    /// per ring.
    pub fn coiled_shell() -> Self {
        Self {
            start: Vec3::ZERO,
            tangent: Vec3::Z,
            normal: Vec3::X,
            max_iterations: 20,
            displacement: ParamSpec::constant(0.0),
            coiling_rate: ParamSpec::per_iteration(PI / 18.0),
            coiling_radius: ParamSpec::constant(10.0),
            scaling_factor: ParamSpec::per_iteration(0.25),
            profile: ProfileSpec {
                kind: ProfileKind::SemiOval,
                radius: 1.0,
                resolution: 20,
                morph_to: None,
            },
        }
    }

    /// Builds a fresh axis at iteration 0.
    pub fn build_axis(&self) -> GeometryResult<CoilingAxis> {
        let shape = self.profile.build(self.max_iterations)?;
        let axis = CoilingAxis::new(
            self.start,
            self.tangent,
            self.normal,
            shape,
            self.max_iterations,
        )?
        .with_displacement(self.displacement)
        .with_coiling_rate(self.coiling_rate)
        .with_coiling_radius(self.coiling_radius)
        .with_scaling_factor(self.scaling_factor);
        Ok(axis)
    }

    /// Runs the sweep.
    pub fn generate(&self) -> GeometryResult<Mesh> {
        let mut axis = self.build_axis()?;
        generate_sweep(&mut axis)
    }

    /// Runs the sweep and hands the mesh to `sink`.
    pub fn submit_to<S: MeshSink>(&self, sink: &mut S) -> GeometryResult<S::Handle> {
        sink.create_mesh(self.generate()?)
    }
}

// =============================================================================
// L-SYSTEM
// =============================================================================

/// Production rule in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Symbol to rewrite.
    pub input: char,
    /// Candidate replacements, picked uniformly.
    pub outputs: Vec<String>,
}

impl RuleSpec {
    /// Single-output rule.
    pub fn simple(input: char, output: impl Into<String>) -> Self {
        Self {
            input,
            outputs: vec![output.into()],
        }
    }
}

impl TryFrom<&RuleSpec> for ProductionRule {
    type Error = GeometryError;

    fn try_from(spec: &RuleSpec) -> GeometryResult<Self> {
        ProductionRule::new(spec.input, spec.outputs.iter().cloned())
    }
}

impl TryFrom<RuleSpec> for ProductionRule {
    type Error = GeometryError;

    fn try_from(spec: RuleSpec) -> GeometryResult<Self> {
        ProductionRule::new(spec.input, spec.outputs)
    }
}

/// Complete description of an L-system expansion and its turtle drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LSystemRecipe {
    /// Starting word.
    pub axiom: String,
    /// Rules in application order.
    pub rules: Vec<RuleSpec>,
    /// Rewriting iterations.
    pub iterations: usize,
    /// Seed for output choices; unseeded runs use the thread RNG.
    pub seed: Option<u64>,
    /// Turtle start location.
    pub origin: Vec3,
    /// Initial heading.
    pub tangent: Vec3,
    /// Initial up direction.
    pub normal: Vec3,
    /// Turn angle δ in radians.
    pub turn_angle: f64,
    /// Length of each `F` step.
    pub branch_length: f64,
    /// Tube cross-section.
    pub branch: BranchStyle,
    /// One mesh per segment or one merged mesh.
    pub output: OutputMode,
}

impl Default for LSystemRecipe {
    fn default() -> Self {
        Self {
            axiom: "F".to_string(),
            rules: Vec::new(),
            iterations: 1,
            seed: None,
            origin: Vec3::ZERO,
            tangent: Vec3::Z,
            normal: Vec3::X,
            turn_angle: DEFAULT_TURN_ANGLE,
            branch_length: DEFAULT_BRANCH_LENGTH,
            branch: BranchStyle::default(),
            output: OutputMode::default(),
        }
    }
}

impl LSystemRecipe {
    /// Quadratic Koch curve drawn with 3D pitch turns.
    pub fn koch_curve_3d(iterations: usize) -> Self {
        Self {
            axiom: "F^F^F^F".to_string(),
            rules: vec![RuleSpec::simple('F', "F^F&F&FF^F^F&F")],
            iterations,
            origin: Vec3::ZERO,
            tangent: Vec3::X,
            normal: Vec3::Y,
            ..Self::default()
        }
    }

    /// Builds the grammar at its axiom.
    pub fn lsystem(&self) -> GeometryResult<LSystem> {
        let rules = self
            .rules
            .iter()
            .map(ProductionRule::try_from)
            .collect::<GeometryResult<Vec<_>>>()?;
        Ok(LSystem::with_rules(self.axiom.clone(), rules))
    }

    /// Builds the turtle at its start frame.
    pub fn turtle(&self) -> GeometryResult<Turtle> {
        let config = GenerationConfig {
            branch_length: self.branch_length,
            turn_angle: self.turn_angle,
            branch_radius: self.branch.radius,
            branch_resolution: self.branch.resolution,
            ..GenerationConfig::default()
        };
        Turtle::from_config(self.origin, self.tangent, self.normal, &config)
    }

    /// Expands the axiom, seeded when [`seed`](Self::seed) is set.
    pub fn expand(&self) -> GeometryResult<String> {
        let mut system = self.lsystem()?;
        let word = match self.seed {
            Some(seed) => system.iterate_with(self.iterations, &mut StdRng::seed_from_u64(seed)),
            None => system.iterate(self.iterations),
        };
        Ok(word.to_string())
    }

    /// Expands and draws, returning one mesh per `F`.
    pub fn generate(&self) -> GeometryResult<Vec<Mesh>> {
        let word = self.expand()?;
        let mut turtle = self.turtle()?;
        turtle.process_word(&word)
    }

    /// Expands, draws and hands the result to `sink` per
    /// [`output`](Self::output).
    pub fn submit_to<S: MeshSink>(&self, sink: &mut S) -> GeometryResult<Vec<S::Handle>> {
        let segments = self.generate()?;
        submit(sink, segments, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MeshCollection;

    #[test]
    fn test_param_spec_values() {
        assert_eq!(ParamSpec::constant(3.0).at(7), 3.0);
        let linear = ParamSpec::Linear {
            offset: 1.0,
            slope: 0.5,
        };
        assert_eq!(linear.at(4), 3.0);
        assert_eq!(AxisParam::from(linear).at(4), 3.0);
    }

    #[test]
    fn test_param_spec_json_shape() {
        let json = serde_json::to_string(&ParamSpec::per_iteration(0.25)).unwrap();
        assert_eq!(json, r#"{"type":"linear","offset":0.0,"slope":0.25}"#);
        let back: ParamSpec = serde_json::from_str(r#"{"type":"constant","value":2.0}"#).unwrap();
        assert_eq!(back, ParamSpec::constant(2.0));
    }

    #[test]
    fn test_sweep_recipe_from_partial_json() {
        let recipe: SweepRecipe = serde_json::from_str(
            r#"{"max_iterations": 5, "profile": {"kind": "square", "radius": 2.0, "resolution": 8}}"#,
        )
        .unwrap();
        assert_eq!(recipe.tangent, Vec3::Z);
        assert_eq!(recipe.profile.morph_to, None);

        let mesh = recipe.generate().unwrap();
        assert_eq!(mesh.vertex_count(), 4 * 8);
        assert_eq!(mesh.face_count(), 3 * 8);
    }

    #[test]
    fn test_coiled_shell_preset() {
        let mesh = SweepRecipe::coiled_shell().generate().unwrap();
        assert_eq!(mesh.vertex_count(), 19 * 21);
        assert_eq!(mesh.face_count(), 18 * 21);
        assert!(mesh.validate());
    }

    #[test]
    fn test_morphing_profile() {
        let recipe = SweepRecipe {
            max_iterations: 6,
            displacement: ParamSpec::per_iteration(1.0),
            profile: ProfileSpec {
                kind: ProfileKind::Circle,
                radius: 1.0,
                resolution: 12,
                morph_to: Some(ProfileKind::SemiOval),
            },
            ..SweepRecipe::default()
        };
        let mesh = recipe.generate().unwrap();
        assert_eq!(mesh.vertex_count(), 5 * 13);
    }

    #[test]
    fn test_morph_blends_by_iteration_fraction() {
        let spec = ProfileSpec {
            kind: ProfileKind::Circle,
            radius: 2.0,
            resolution: 8,
            morph_to: Some(ProfileKind::SemiOval),
        };
        let shape = spec.build(4).unwrap();
        let start = ProfileKind::Circle.generate(2.0, 8).unwrap();
        let end = ProfileKind::SemiOval.generate(2.0, 8).unwrap();
        for n in 0..=4 {
            let expected = homotopy(&start, &end, n, 4).unwrap();
            assert_eq!(shape.at(n).into_owned(), expected);
        }
    }

    #[test]
    fn test_morph_between_unequal_profiles_fails() {
        let spec = ProfileSpec {
            kind: ProfileKind::Circle,
            radius: 1.0,
            resolution: 12,
            morph_to: Some(ProfileKind::Square),
        };
        let err = spec.build(10).unwrap_err();
        assert!(matches!(err, GeometryError::IndexMismatch { .. }));
    }

    #[test]
    fn test_rule_spec_rejects_empty_outputs() {
        let recipe = LSystemRecipe {
            rules: vec![RuleSpec {
                input: 'F',
                outputs: Vec::new(),
            }],
            ..LSystemRecipe::default()
        };
        assert_eq!(recipe.expand().unwrap_err().kind(), "configuration");
    }

    #[test]
    fn test_koch_expansion_length() {
        let recipe = LSystemRecipe::koch_curve_3d(1);
        let word = recipe.expand().unwrap();
        // Four F's each become 14 symbols, three separators remain
        assert_eq!(word.len(), 4 * 14 + 3);
        assert_eq!(word.matches('F').count(), 32);
    }

    #[test]
    fn test_seeded_expansion_is_reproducible() {
        let recipe = LSystemRecipe {
            rules: vec![RuleSpec {
                input: 'F',
                outputs: vec!["F+F".into(), "F-F".into(), "FF".into()],
            }],
            iterations: 4,
            seed: Some(42),
            ..LSystemRecipe::default()
        };
        assert_eq!(recipe.expand().unwrap(), recipe.expand().unwrap());
    }

    #[test]
    fn test_lsystem_submit_modes() {
        let mut recipe = LSystemRecipe {
            rules: vec![RuleSpec::simple('F', "F[+F]F")],
            iterations: 1,
            ..LSystemRecipe::default()
        };

        let mut merged = MeshCollection::new("merged");
        let handles = recipe.submit_to(&mut merged).unwrap();
        assert_eq!(handles.len(), 1);
        assert_eq!(merged.meshes()[0].face_count(), 30);

        recipe.output = OutputMode::PerSegment;
        let mut split = MeshCollection::new("split");
        let handles = recipe.submit_to(&mut split).unwrap();
        assert_eq!(handles.len(), 3);
        assert!(split.meshes().iter().all(|m| m.vertex_count() == 20));
    }

    #[test]
    fn test_invalid_turtle_config_is_reported() {
        let recipe = LSystemRecipe {
            branch_length: -1.0,
            ..LSystemRecipe::default()
        };
        assert!(matches!(
            recipe.generate().unwrap_err(),
            GeometryError::InvalidConfig(_)
        ));
    }
}
