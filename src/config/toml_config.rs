use crate::core::ConfigProvider;
use crate::utils::error::{ComposeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub compose_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub dir: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ComposeError::ConfigError {
            message: format!("Invalid TOML config: {e}"),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn compose_file(&self) -> &str {
        &self.input.compose_file
    }

    fn output_dir(&self) -> &str {
        &self.output.dir
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input.compose_file", &self.input.compose_file)?;
        validate_path("input.compose_file", &self.input.compose_file)?;
        validate_path("output.dir", &self.output.dir)?;
        Ok(())
    }
}
