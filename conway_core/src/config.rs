// config.rs - TOML configuration with built-in defaults

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::error::{LifeError, Result};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Upper bound for either dimension on resize.
    pub max_dimension: usize,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    pub tick_period_ms: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SeedingConfig {
    /// Probability of a cell starting alive on random fill.
    pub density: f64,
    /// Fixed RNG seed for reproducible random fills.
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub cell_size: f32,
    pub live_color: [u8; 3],
    pub dead_color: [u8; 3],
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LifeConfig {
    pub grid: GridConfig,
    pub playback: PlaybackConfig,
    pub seeding: SeedingConfig,
    pub display: DisplayConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            max_dimension: 500,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { tick_period_ms: 200 }
    }
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            density: 0.3,
            seed: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            live_color: [0, 200, 0],
            dead_color: [40, 40, 40],
        }
    }
}

impl LifeConfig {
    /// Read `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let grid = &self.grid;
        if grid.max_dimension == 0 {
            return Err(LifeError::validation("max_dimension must be positive"));
        }
        for (name, value) in [("rows", grid.rows), ("cols", grid.cols)] {
            if value == 0 || value > grid.max_dimension {
                return Err(LifeError::validation(format!(
                    "{name} must be between 1 and {}, got {value}",
                    grid.max_dimension
                )));
            }
        }
        if self.playback.tick_period_ms == 0 {
            return Err(LifeError::validation("tick_period_ms must be positive"));
        }
        if !(0.0..=1.0).contains(&self.seeding.density) {
            return Err(LifeError::validation(format!(
                "density must be within [0, 1], got {}",
                self.seeding.density
            )));
        }
        if !(self.display.cell_size > 0.0) {
            return Err(LifeError::validation("cell_size must be positive"));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.playback.tick_period_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_documented_values() {
        let config = LifeConfig::default();
        assert_eq!((config.grid.rows, config.grid.cols), (50, 50));
        assert_eq!(config.tick_period(), Duration::from_millis(200));
        assert_eq!(config.seeding.density, 0.3);
        assert_eq!(config.display.cell_size, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = LifeConfig::from_toml(
            r#"
            [grid]
            rows = 20

            [seeding]
            seed = 99
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.rows, 20);
        assert_eq!(config.grid.cols, 50);
        assert_eq!(config.seeding.seed, Some(99));
        assert_eq!(config.seeding.density, 0.3);
    }

    #[test]
    fn invalid_values_are_rejected() {
        for toml in [
            "[grid]\nrows = 0",
            "[grid]\ncols = 501",
            "[playback]\ntick_period_ms = 0",
            "[seeding]\ndensity = 1.5",
            "[display]\ncell_size = 0.0",
        ] {
            assert!(
                matches!(LifeConfig::from_toml(toml), Err(LifeError::Validation(_))),
                "{toml}"
            );
        }
    }

    #[test]
    fn malformed_toml_is_config_error() {
        assert!(matches!(
            LifeConfig::from_toml("[grid\nrows = 3"),
            Err(LifeError::Config(_))
        ));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = LifeConfig::load("definitely/not/here/conway.toml").unwrap();
        assert_eq!(config, LifeConfig::default());
    }

    #[test]
    fn load_reads_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("conway.toml");
        fs::write(&path, "[grid]\nrows = 12\ncols = 30\n\n[playback]\ntick_period_ms = 50\n")
            .unwrap();

        let config = LifeConfig::load(&path).unwrap();
        assert_eq!((config.grid.rows, config.grid.cols), (12, 30));
        assert_eq!(config.tick_period(), Duration::from_millis(50));
        assert_eq!(config.seeding, SeedingConfig::default());
    }

    #[test]
    fn load_rejects_malformed_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("conway.toml");
        fs::write(&path, "[grid\nrows = 3").unwrap();

        assert!(matches!(LifeConfig::load(&path), Err(LifeError::Config(_))));
    }

    #[test]
    fn load_rejects_invalid_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("conway.toml");
        fs::write(&path, "[seeding]\ndensity = -0.5").unwrap();

        assert!(matches!(LifeConfig::load(&path), Err(LifeError::Validation(_))));
    }

    #[test]
    fn unreadable_path_is_io_error() {
        let tmp = TempDir::new().unwrap();
        // exists, but is a directory
        assert!(matches!(LifeConfig::load(tmp.path()), Err(LifeError::Io(_))));
    }
}
