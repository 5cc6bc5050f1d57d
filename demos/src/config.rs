//! `pathviz.toml` loading.
//!
//! Every key is optional; a missing file yields [`Config::default`].
//!
//! ```toml
//! [grid]
//! scale = 2          # 1 = 5x5, 2 = 40x28, 3 = 100x60
//!
//! [search]
//! heuristic = false
//! diagonals = false
//!
//! [animation]
//! batch_size = 10
//! frame_delay_ms = 10
//!
//! [walls]
//! density = 0.3
//! seed = 42
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File read when no path is given on the command line.
pub const DEFAULT_PATH: &str = "pathviz.toml";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub walls: WallsConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    #[serde(default = "default_scale")]
    pub scale: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default)]
    pub heuristic: bool,
    #[serde(default)]
    pub diagonals: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WallsConfig {
    /// Chance for each free cell to become a wall when scattering.
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

// Default values
fn default_scale() -> u8 { 2 }
fn default_batch_size() -> usize { 10 }
fn default_frame_delay_ms() -> u64 { 10 }
fn default_density() -> f64 { 0.3 }
fn default_seed() -> u64 { 42 }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            frame_delay_ms: default_frame_delay_ms(),
        }
    }
}

impl Default for WallsConfig {
    fn default() -> Self {
        Self {
            density: default_density(),
            seed: default_seed(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            search: SearchConfig::default(),
            animation: AnimationConfig::default(),
            walls: WallsConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced while loading a [`Config`].
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file is not valid TOML or has keys of the wrong type.
    Parse(toml::de::Error),
    /// A value is out of its allowed range.
    Invalid { key: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Parse(e) => write!(f, "invalid config: {e}"),
            Self::Invalid { key, reason } => write!(f, "invalid config value `{key}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file at `path`. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, otherwise [`DEFAULT_PATH`] if it exists,
    /// otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let fallback = Path::new(DEFAULT_PATH);
        if fallback.exists() {
            Self::load(fallback)
        } else {
            log::info!("no {DEFAULT_PATH} found, using defaults");
            Ok(Self::default())
        }
    }

    /// Check value ranges that the TOML types alone do not capture.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=3).contains(&self.grid.scale) {
            return Err(ConfigError::Invalid {
                key: "grid.scale",
                reason: format!("{} is not one of 1, 2, 3", self.grid.scale),
            });
        }
        if self.animation.batch_size == 0 {
            return Err(ConfigError::Invalid {
                key: "animation.batch_size",
                reason: "must be at least 1".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.walls.density) {
            return Err(ConfigError::Invalid {
                key: "walls.density",
                reason: format!("{} is outside [0, 1]", self.walls.density),
            });
        }
        Ok(())
    }
}
