use std::collections::BTreeMap;
use std::path::Path;

use cube_color::ReferencePalette;
use serde::Deserialize;

use crate::error::ConfigurationError;

/// Resolver configuration loaded from YAML.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ResolverConfig {
    /// Swatch overrides: color code or name to hex string
    #[serde(default)]
    pub palette: BTreeMap<String, String>,

    /// Anchor clustering on even cubes
    #[serde(default)]
    pub clustering: ClusteringConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClusteringConfig {
    /// Seed for k-means++ initialization
    #[serde(default)]
    pub seed: u64,

    /// Upper bound on Lloyd iterations
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Independent seedings; the tightest partition wins
    #[serde(default = "default_restarts")]
    pub restarts: usize,
}

fn default_max_iterations() -> usize {
    100
}

fn default_restarts() -> usize {
    10
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_iterations: default_max_iterations(),
            restarts: default_restarts(),
        }
    }
}

impl ResolverConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigurationError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigurationError::Config(e.to_string()))
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::Config(format!("{}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            palette_overrides = config.palette.len(),
            seed = config.clustering.seed,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Default swatches with this config's overrides applied.
    pub fn reference_palette(&self) -> Result<ReferencePalette, ConfigurationError> {
        let overrides = self
            .palette
            .iter()
            .map(|(name, hex)| (name.as_str(), hex.as_str()));
        Ok(ReferencePalette::with_overrides(overrides)?)
    }
}
