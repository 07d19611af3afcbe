//! Solver configuration (stored in ~/.config/wordladder/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};

const CONFIG_DIR: &str = "wordladder";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WORDLADDER_CONFIG_DIR";

/// Word list read when neither the CLI nor the config names one
pub const DEFAULT_WORD_LIST: &str = "wordlist.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Skip derivatives already present in an entry's list
    #[serde(default = "default_dedupe_edges")]
    pub dedupe_edges: bool,

    /// Word list path used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_list: Option<PathBuf>,
}

fn default_dedupe_edges() -> bool {
    true
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            dedupe_edges: default_dedupe_edges(),
            word_list: None,
        }
    }
}

impl SolverConfig {
    fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    LadderError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| LadderError::io_operation("read config", path.display(), e))?;

        toml::from_str(&content).map_err(|e| LadderError::invalid_config(path, e))
    }

    /// Load the per-user configuration, falling back to defaults when absent
    pub fn load_default() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Resolve the word list path: explicit override, then config, then default
    pub fn resolve_word_list(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.word_list.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORD_LIST))
    }
}
