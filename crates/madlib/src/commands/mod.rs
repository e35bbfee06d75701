//! CLI command implementations

pub mod check;
pub mod fill;
pub mod form;
pub mod list;
pub mod play;
