//! File-based defaults for the command line tool.
//!
//! Rendering options can be kept in a small TOML file and loaded with
//! `--config`; anything given directly on the command line wins over the
//! file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ops::{DiffAlgorithm, Granularity};

/// Rendering defaults, loadable from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
    /// Header label for the "before" side
    pub before_label: String,
    /// Header label for the "after" side
    pub after_label: String,
    /// Unchanged lines shown around each change
    pub context: usize,
    /// Whether to apply ANSI colors
    pub color: bool,
    /// Diff algorithm to use
    pub algorithm: DiffAlgorithm,
    /// Token size to diff at
    pub granularity: Granularity,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            before_label: "(before)".to_string(),
            after_label: "(after)".to_string(),
            context: 2,
            color: true,
            algorithm: DiffAlgorithm::default(),
            granularity: Granularity::default(),
        }
    }
}

impl PrintConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
