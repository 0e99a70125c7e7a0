//! # Turtle Interpreter
//!
//! Walks a symbolic word through space with a local frame and emits one
//! hollow tube per forward step.
//!
//! ## Alphabet
//!
//! | Symbol | Effect |
//! |--------|--------|
//! | `[` | push the current frame |
//! | `]` | pop the saved frame ([`GeometryError::EmptyStack`] if none) |
//! | `+` / `-` | rotate about the tangent by `+δ` / `-δ` |
//! | `&` / `^` | rotate about the normal by `+δ` / `-δ` |
//! | `\` / `/` | rotate about the binormal by `+δ` / `-δ` |
//! | `F` | move forward, emitting a branch segment |
//!
//! Any other symbol is ignored.
//!
//! [`GeometryError::EmptyStack`]: crate::GeometryError::EmptyStack

mod branch;
mod frame;
mod interpreter;


pub use branch::{branch_segment, BranchStyle};
pub use frame::Frame;
pub use interpreter::{Axis, Sense, Turtle, TurtleCommand};
