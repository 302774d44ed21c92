//! Application configuration

use crate::cli::Cli;
use moodlog_inference::InferenceConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Inference service settings
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Journal storage settings
    #[serde(default)]
    pub journal: JournalConfig,
}

impl AppConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(dir) = &cli.data_dir {
            config.journal.data_dir = dir.clone();
        }

        if !cli.endpoints.is_empty() {
            config.inference.endpoints = cli.endpoints.clone();
        }

        Ok(config)
    }
}

/// Journal storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Directory holding the journal file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("moodlog"))
        .unwrap_or_else(|| PathBuf::from(".moodlog"))
}
