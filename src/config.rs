//! Run configuration for the benchmark drivers

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Tokens every driver times by default, one of each shape worth comparing.
pub const DEFAULT_TOKENS: [&str; 5] = ["42", "+", "-13", "hello", "-"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Tokens timed one at a time
    pub tokens: Vec<String>,
    /// Timed passes over each token set
    pub iterations: u32,
    pub warmup_iterations: u32,
    /// Size of the generated mixed corpus
    pub corpus_size: usize,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_TOKENS.iter().map(|t| t.to_string()).collect(),
            iterations: 20,
            warmup_iterations: 3,
            corpus_size: 10_000,
            seed: 0x5eed,
        }
    }
}

impl BenchConfig {
    /// Parse a config; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading bench config");
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tokens.is_empty() {
            return Err(Error::InvalidConfig("token list is empty".into()));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidConfig("iterations must be at least 1".into()));
        }
        Ok(())
    }
}
