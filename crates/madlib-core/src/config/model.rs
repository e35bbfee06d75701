use super::consts::file::CONFIG_FILE_NAME;
use super::source::TemplateSource;
use crate::builtin::Variant;
use crate::error::{MadlibError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// madlib.toml schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default)]
    pub variant: Variant,
    /// External madlib file, relative to madlib.toml; wins over `variant`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Read madlib.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| MadlibError::ConfigParseError(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| MadlibError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write madlib.toml
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MadlibError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content)?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if let Some(file) = &self.template.file {
            if file.as_os_str().is_empty() {
                return Err(MadlibError::ConfigInvalidValue {
                    field: "template.file".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A config together with the directory it was found in
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub root: PathBuf,
    pub config: Config,
}

impl LoadedConfig {
    /// Template source named by the config, with `file` resolved against `root`
    pub fn template_source(&self) -> TemplateSource {
        match &self.config.template.file {
            Some(file) => TemplateSource::File(self.root.join(file)),
            None => TemplateSource::Builtin(self.config.template.variant),
        }
    }
}

/// Search `start` and its parents for madlib.toml
pub fn find_config(start: &Path) -> Result<Option<LoadedConfig>> {
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            let config = Config::from_file(&candidate)?;
            return Ok(Some(LoadedConfig {
                root: dir.to_path_buf(),
                config,
            }));
        }
    }
    Ok(None)
}
