use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::fs;
use anyhow::{Context, Result};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub tracts: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            tracts: PathBuf::from("tracts.txt"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub densities: PathBuf,
    pub min_max: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            densities: PathBuf::from("densities.txt"),
            min_max: PathBuf::from("minMaxDensities.txt"),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML configuration: {:?}", path))?;
        Ok(config)
    }

    /// Like `load_from_file`, but a missing file yields the built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            info!("No config file at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Resolves relative paths against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        for path in [
            &mut self.input.tracts,
            &mut self.output.densities,
            &mut self.output.min_max,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}
