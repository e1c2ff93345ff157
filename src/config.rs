//! Generator configuration (icons.yaml).
//!
//! Holds the size matrix, shortcut size, label and colour theme. The
//! configuration is read once and passed by reference into the export
//! pipeline; nothing in the renderer reads ambient state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::types::Theme;

/// Default config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "icons.yaml";

/// Primary icon resolutions, in output order.
pub const PRIMARY_SIZES: [i32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Resolution of every shortcut icon.
pub const SHORTCUT_SIZE: i32 = 96;

/// Read-only settings for one generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// One primary icon is written per entry.
    pub primary_sizes: Vec<i32>,

    pub shortcut_size: i32,

    /// Text drawn over the primary icon's central node (two characters at most).
    pub label: String,

    pub theme: Theme,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            primary_sizes: PRIMARY_SIZES.to_vec(),
            shortcut_size: SHORTCUT_SIZE,
            label: "FF".to_string(),
            theme: Theme::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string. An empty document yields defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| IconError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Resolve which config applies: an explicit path, else `icons.yaml`
    /// in `dir` when present, else the built-in defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Ok((Self::load(&candidate)?, Some(candidate)));
        }

        Ok((Self::default(), None))
    }

    /// Render as YAML for `init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| IconError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}
