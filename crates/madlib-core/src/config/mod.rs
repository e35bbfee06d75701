//! Configuration - optional `madlib.toml` and template source selection

pub mod consts;
mod model;
mod source;

pub use model::{find_config, Config, LoadedConfig, OutputConfig, OutputFormat, TemplateConfig};
pub use source::TemplateSource;
