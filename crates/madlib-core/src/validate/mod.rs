//! Validator - per-type pattern checks over every filler
//!
//! Every filler is evaluated on every run; there is no short-circuit and no
//! state carried between runs.

mod engine;
mod patterns;

pub use engine::{validate_values, FieldVerdict, ValidationReport, Validator};
