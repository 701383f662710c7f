//! Runtime configuration
//!
//! Every section has working defaults; a YAML file overrides the fields it
//! names. Binaries may further override single values from the command
//! line.

use crate::ranking::RankingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the trained snapshot artifact
    pub snapshot_path: PathBuf,
    /// Recommendation response cache capacity
    pub cache_capacity: usize,
    pub http: HttpConfig,
    pub ranking: RankingConfig,
    pub binning: BinningConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("leaserank.snapshot"),
            cache_capacity: 256,
            http: HttpConfig::default(),
            ranking: RankingConfig::default(),
            binning: BinningConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                Ok(serde_yaml::from_str(&raw)?)
            }
            None => Ok(Self::default()),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 5001,
        }
    }
}

/// Discretization settings for the property-value feature
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BinningConfig {
    pub strategy: BinningStrategy,
    /// Target number of final bins
    pub max_bins: usize,
    /// Coarse pre-bin count for the chi-merge path
    pub initial_bins: usize,
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            strategy: BinningStrategy::ChiMerge,
            max_bins: 12,
            initial_bins: 50,
        }
    }
}

/// Which discretization path produces the value bins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinningStrategy {
    /// Supervised chi-square merge against the lessor enterprise type
    ChiMerge,
    /// Unsupervised quantile cuts; faster for bulk retrains
    Quantile,
}
