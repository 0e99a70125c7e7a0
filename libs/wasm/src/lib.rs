//! WASM-facing entry points for procedural mesh generation.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every exported function has an `*_internal` twin that
//! returns Rust errors, so native tests never need a JS host.
//!
//! ```
//! let shell = procgen_wasm::coiled_shell_internal().unwrap();
//! assert_eq!(shell.vertex_count(), 19 * 21);
//! ```

use config::constants::DEFAULT_PROFILE_RESOLUTION;
use procgen_mesh::recipe::{LSystemRecipe, SweepRecipe};
use procgen_mesh::primitives;
use procgen_mesh::Mesh;
use wasm_bindgen::prelude::*;

mod diagnostics;
mod mesh_handle;

pub use diagnostics::Diagnostic;
pub use mesh_handle::{MeshHandle, MeshHandleList};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "procgen-wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Returns the default vertex count for builtin cross-section profiles.
///
/// # Examples
/// ```
/// assert!(procgen_wasm::default_profile_resolution() >= 3);
/// ```
#[wasm_bindgen]
pub fn default_profile_resolution() -> u32 {
    u32::try_from(DEFAULT_PROFILE_RESOLUTION).unwrap_or(u32::MAX)
}

/// Runs a sweep described by a JSON `SweepRecipe`.
///
/// Missing fields fall back to a straight circular tube along +Z.
///
/// # Errors
/// Throws a [`Diagnostic`] when the JSON is malformed or generation fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = generate_sweep(JSON.stringify({
/// //   max_iterations: 30,
/// //   coiling_rate: { type: "linear", offset: 0, slope: 0.2 },
/// //   coiling_radius: { type: "constant", value: 5 },
/// // }));
/// ```
#[wasm_bindgen]
pub fn generate_sweep(recipe_json: &str) -> Result<MeshHandle, JsValue> {
    generate_sweep_internal(recipe_json).map_err(JsValue::from)
}

/// Host-only twin of [`generate_sweep`].
pub fn generate_sweep_internal(recipe_json: &str) -> Result<MeshHandle, Diagnostic> {
    let recipe: SweepRecipe = serde_json::from_str(recipe_json)?;
    let mesh = recipe.generate()?;
    Ok(MeshHandle::from(mesh))
}

/// Expands and draws a JSON `LSystemRecipe`.
///
/// Returns one handle per branch segment when the recipe's `output` is
/// `"per_segment"`, otherwise a single merged handle.
///
/// # Errors
/// Throws a [`Diagnostic`] when the JSON is malformed or generation fails,
/// e.g. with kind `"empty_stack"` for an unmatched `]`.
#[wasm_bindgen]
pub fn generate_lsystem(recipe_json: &str) -> Result<MeshHandleList, JsValue> {
    generate_lsystem_internal(recipe_json).map_err(JsValue::from)
}

/// Host-only twin of [`generate_lsystem`].
pub fn generate_lsystem_internal(recipe_json: &str) -> Result<MeshHandleList, Diagnostic> {
    let recipe: LSystemRecipe = serde_json::from_str(recipe_json)?;
    let mut handles = MeshHandleList::default();
    recipe.submit_to(&mut handles)?;
    Ok(handles)
}

/// Expands a JSON `LSystemRecipe` without drawing it.
#[wasm_bindgen]
pub fn expand_lsystem(recipe_json: &str) -> Result<String, JsValue> {
    expand_lsystem_internal(recipe_json).map_err(JsValue::from)
}

/// Host-only twin of [`expand_lsystem`].
pub fn expand_lsystem_internal(recipe_json: &str) -> Result<String, Diagnostic> {
    let recipe: LSystemRecipe = serde_json::from_str(recipe_json)?;
    Ok(recipe.expand()?)
}

/// Generates the stock coiled shell.
#[wasm_bindgen]
pub fn coiled_shell() -> Result<MeshHandle, JsValue> {
    coiled_shell_internal().map_err(JsValue::from)
}

/// Host-only twin of [`coiled_shell`].
pub fn coiled_shell_internal() -> Result<MeshHandle, Diagnostic> {
    let mesh = SweepRecipe::coiled_shell().generate()?;
    Ok(MeshHandle::from(mesh))
}

/// Generates the 3D Koch curve after `iterations` rewrites, merged into
/// one mesh.
#[wasm_bindgen]
pub fn koch_curve(iterations: u32) -> Result<MeshHandle, JsValue> {
    koch_curve_internal(iterations).map_err(JsValue::from)
}

/// Host-only twin of [`koch_curve`].
pub fn koch_curve_internal(iterations: u32) -> Result<MeshHandle, Diagnostic> {
    let recipe = LSystemRecipe::koch_curve_3d(iterations as usize);
    let segments = recipe.generate()?;
    Ok(MeshHandle::from(Mesh::merge_all(&segments)))
}

/// Builds an axis-aligned box centered on the origin.
///
/// # Errors
/// Throws a [`Diagnostic`] of kind `"configuration"` unless every size is
/// positive and finite.
#[wasm_bindgen]
pub fn cuboid(width: f64, height: f64, depth: f64) -> Result<MeshHandle, JsValue> {
    cuboid_internal(width, height, depth).map_err(JsValue::from)
}

/// Host-only twin of [`cuboid`].
pub fn cuboid_internal(width: f64, height: f64, depth: f64) -> Result<MeshHandle, Diagnostic> {
    let mesh = primitives::cuboid(width, height, depth)?;
    Ok(MeshHandle::from(mesh))
}
