// Core modules
pub mod builtin;
pub mod compose;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod session;
pub mod surface;
pub mod validate;

// Re-export commonly used types
pub use builtin::Variant;
pub use error::{MadlibError, Result};
pub use model::{Filler, FillerType, MadLib, Segment};
pub use session::{GenerateOutcome, Outcome, Session};
pub use surface::{memory::MemorySurface, FieldHandle, FieldSpec, FieldState, Surface};
