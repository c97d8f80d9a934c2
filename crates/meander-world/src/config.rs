//! World generation configuration.
//!
//! Provides the recognized generation parameters with defaults, TOML file
//! load/save, and validation. Degenerate values are rejected before any
//! carving begins rather than silently corrected.

use meander_common::{ConfigError, Dimensions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// World generation parameters.
///
/// Defaults match the reference terrain: 13×13×2 chunks, one world unit
/// per cell, one revealed cell per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Chunk width in cells (first ground-plane axis); must be at least 1
    pub width: u32,
    /// Chunk height in cells (second ground-plane axis); must be at least 1
    pub height: u32,
    /// Chunk depth in layers; must be at least 1 (1 for pure 2-D terrains)
    pub depth: u32,
    /// World distance per cell; must be positive
    pub spacing: f32,
    /// Seconds between revealed cells; zero reveals a whole path per tick
    pub reveal_interval: f32,
    /// RNG seed for reproducible carving (`None` = seed from entropy)
    pub rng_seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 13,
            height: 13,
            depth: 2,
            spacing: 1.0,
            reveal_interval: 1.0,
            rng_seed: None,
        }
    }
}

impl WorldConfig {
    /// Returns the configured chunk extent.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height, self.depth)
    }

    /// Load configuration from a TOML file.
    /// Returns the default config if the file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match fs::File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    warn!("Failed to read config file: {e}");
                    return Self::default();
                }

                match toml::from_str(&contents) {
                    Ok(config) => {
                        info!("Loaded config from {}", path.display());
                        config
                    },
                    Err(e) => {
                        warn!("Failed to parse config file: {e}");
                        Self::default()
                    },
                }
            },
            Err(e) => {
                warn!("Failed to open config file: {e}");
                Self::default()
            },
        }
    }

    /// Save configuration to a TOML file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validates the configuration.
    ///
    /// A degenerate setup (a zero dimension, non-positive spacing, or a
    /// negative reveal interval) is a configuration error, not something
    /// carving should discover later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dimensions().is_valid() {
            return Err(ConfigError::InvalidDimensions {
                dims: self.dimensions(),
            });
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing {
                spacing: self.spacing,
            });
        }
        if !self.reveal_interval.is_finite() || self.reveal_interval < 0.0 {
            return Err(ConfigError::InvalidInterval {
                interval: self.reveal_interval,
            });
        }
        Ok(())
    }
}
