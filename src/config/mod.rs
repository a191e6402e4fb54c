pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "compose2kube"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Convert docker-compose manifests to Kubernetes configs")
)]
pub struct CliConfig {
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "docker-compose.yml", help = "Specify an alternate compose file")
    )]
    pub compose_file: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "output", help = "Kubernetes configs output directory")
    )]
    pub output_dir: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn compose_file(&self) -> &str {
        &self.compose_file
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("compose_file", &self.compose_file)?;
        validate_path("compose_file", &self.compose_file)?;
        validate_path("output_dir", &self.output_dir)?;
        Ok(())
    }
}
