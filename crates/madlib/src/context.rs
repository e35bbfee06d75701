//! Global context for CLI commands

use crate::cli::SourceArgs;
use anyhow::{Context as _, Result};
use madlib_core::MadLib;
use madlib_core::config::{
    LoadedConfig, OutputFormat, TemplateSource,
    consts::file::{ENV_FILE, ENV_VARIANT},
    find_config,
};
use std::env;
use std::path::PathBuf;

/// Config, chosen template source and the loaded madlib
pub struct Context {
    pub config: Option<LoadedConfig>,
    pub source: TemplateSource,
    pub madlib: MadLib,
    pub verbose: bool,
}

impl Context {
    /// Resolve the template source and load the madlib
    ///
    /// Precedence: `--file`, `--variant`, `MADLIB_FILE`, `MADLIB_VARIANT`,
    /// madlib.toml, builtin default.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - madlib.toml exists but cannot be parsed
    /// - MADLIB_VARIANT names an unknown variant
    /// - the chosen madlib cannot be loaded or breaks the madlib contract
    pub fn new(source: &SourceArgs, verbose: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let config = find_config(&current_dir)?;

        let source = resolve_source(source, config.as_ref())?;
        tracing::debug!(source = %source, "loading madlib");

        let madlib = source
            .load()
            .with_context(|| format!("Failed to load madlib from {}", source))?;

        Ok(Self {
            config,
            source,
            madlib,
            verbose,
        })
    }

    /// Whether output should be JSON, from the flag or madlib.toml
    pub fn json_output(&self, flag: bool) -> bool {
        flag || self
            .config
            .as_ref()
            .is_some_and(|c| c.config.output.format == OutputFormat::Json)
    }
}

fn resolve_source(args: &SourceArgs, config: Option<&LoadedConfig>) -> Result<TemplateSource> {
    if let Some(file) = &args.file {
        return Ok(TemplateSource::File(file.clone()));
    }
    if let Some(variant) = args.variant {
        return Ok(TemplateSource::Builtin(variant));
    }
    if let Some(file) = env::var_os(ENV_FILE).filter(|v| !v.is_empty()) {
        return Ok(TemplateSource::File(PathBuf::from(file)));
    }
    if let Ok(name) = env::var(ENV_VARIANT) {
        if !name.is_empty() {
            let variant = name
                .parse()
                .with_context(|| format!("Invalid {}", ENV_VARIANT))?;
            return Ok(TemplateSource::Builtin(variant));
        }
    }
    Ok(config.map(LoadedConfig::template_source).unwrap_or_default())
}
