use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".annolint.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Malformed values (non-integer thresholds, unknown keys) are
    /// rejected outright rather than coerced or defaulted.
    #[error("invalid configuration in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Run configuration, resolved once before analysis starts and passed
/// by value into the checker. There is no global mutable state; two
/// checkers with different configurations can coexist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnnolintConfig {
    /// Maximum allowed annotation nesting depth (TAE001).
    pub max_annotations_complexity: usize,
    /// Maximum allowed flattened annotation length (TAE002).
    pub max_annotations_len: usize,
    /// When true, comment-style annotations are permitted and TAE003
    /// is not checked at all.
    pub enable_old_style_annotations: bool,
}

impl Default for AnnolintConfig {
    fn default() -> Self {
        Self {
            max_annotations_complexity: 3,
            max_annotations_len: 7,
            enable_old_style_annotations: false,
        }
    }
}

impl AnnolintConfig {
    /// Parses a TOML document, failing fast on any malformed value.
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents, path)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Looks for `.annolint.toml` in the given directory. A missing
    /// file is fine; a present-but-invalid file is an error.
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Applies command-line overrides on top of file/default values.
    pub fn with_overrides(
        mut self,
        max_annotations_complexity: Option<usize>,
        max_annotations_len: Option<usize>,
        enable_old_style_annotations: bool,
    ) -> Self {
        if let Some(max) = max_annotations_complexity {
            self.max_annotations_complexity = max;
        }
        if let Some(max) = max_annotations_len {
            self.max_annotations_len = max;
        }
        if enable_old_style_annotations {
            self.enable_old_style_annotations = true;
        }
        self
    }
}
