//! Host-tunable settings for the tank stack.

use std::{fs, path::Path, sync::LazyLock};

use cistern_registry::BUCKET_VOLUME;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/cistern_config.json5");

/// The process-wide config, loaded once on first use.
pub static CISTERN_CONFIG: LazyLock<TankConfig> = LazyLock::new(TankConfig::load_or_create);

/// Error raised while loading or validating the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON5.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Settings for tank entities.
#[derive(Debug, Clone, Deserialize)]
pub struct TankConfig {
    /// Default tank capacity, in buckets.
    pub tank_capacity_buckets: i32,
    /// Whether placing a tank into an existing stack triggers a balance
    /// pass.
    pub balance_on_placement: bool,
}

impl TankConfig {
    /// Loads the config file, writing the default one first if it does
    /// not exist. Falls back to defaults on any error.
    #[must_use]
    pub fn load_or_create() -> Self {
        match Self::try_load_or_create(Path::new("cistern_config.json5")) {
            Ok(config) => config,
            Err(err) => {
                log::error!("failed to load cistern_config.json5, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Loads and validates the config at `path`, creating it from the
    /// packaged default when missing.
    pub fn try_load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config: TankConfig = serde_json5::from_str(&fs::read_to_string(path)?)?;
            config.validate()?;
            Ok(config)
        } else {
            fs::write(path, DEFAULT_CONFIG)?;
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=1024).contains(&self.tank_capacity_buckets) {
            return Err(ConfigError::Invalid(
                "Tank capacity must be in range 1..1024 buckets",
            ));
        }
        Ok(())
    }

    /// The default tank capacity in fluid units.
    #[must_use]
    pub fn tank_capacity(&self) -> i32 {
        self.tank_capacity_buckets * BUCKET_VOLUME
    }
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            tank_capacity_buckets: 16,
            balance_on_placement: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packaged_default_matches_builtin_default() {
        let config: TankConfig =
            serde_json5::from_str(DEFAULT_CONFIG).expect("packaged config parses");
        config.validate().expect("packaged config is valid");

        let builtin = TankConfig::default();
        assert_eq!(config.tank_capacity_buckets, builtin.tank_capacity_buckets);
        assert_eq!(config.balance_on_placement, builtin.balance_on_placement);
        assert_eq!(config.tank_capacity(), 16 * BUCKET_VOLUME);
    }

    #[test]
    fn test_validate_rejects_non_positive_capacity() {
        let config = TankConfig {
            tank_capacity_buckets: 0,
            balance_on_placement: false,
        };
        assert!(config.validate().is_err());
    }
}
