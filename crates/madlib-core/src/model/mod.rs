//! Template model - the static description of a madlib
//!
//! A [`MadLib`] is an ordered list of typed [`Filler`] slots plus an ordered
//! list of [`Segment`]s that interleave static text, filler values and
//! paragraph breaks. It is built once (from a builtin variant or a TOML file)
//! and is read-only afterwards.

mod filler;
mod madlib;
mod segment;

pub use filler::{Filler, FillerType};
pub use madlib::MadLib;
pub use segment::Segment;
