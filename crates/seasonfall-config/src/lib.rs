//! Configuration for the seasonfall demo.
//!
//! Settings are read from `config.toml` in the platform config directory.
//! Every key is optional; a missing or broken file falls back to defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use seasonfall_core::{PrecipitationMode, Season, SeasonMap, SimulationSettings};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

const APP_NAME: &str = "seasonfall";
const CONFIG_FILE: &str = "config.toml";

/// Largest particle field a config may ask for.
pub const MAX_PARTICLES: usize = 100_000;

/// Error reading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Background image per season. An empty path disables that background.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackgroundPaths {
    pub summer: PathBuf,
    pub rain: PathBuf,
    pub autumn: PathBuf,
    pub winter: PathBuf,
    pub spring: PathBuf,
}

impl Default for BackgroundPaths {
    fn default() -> Self {
        Self {
            summer: PathBuf::from("summer_sky.jpg"),
            rain: PathBuf::new(),
            autumn: PathBuf::from("autumn_sky.jpg"),
            winter: PathBuf::from("winter_sky.jpg"),
            spring: PathBuf::from("spring_sky.jpg"),
        }
    }
}

impl BackgroundPaths {
    /// Configured path for a season, if any.
    pub fn get(&self, season: Season) -> Option<&Path> {
        let path = match season {
            Season::Summer => &self.summer,
            Season::Rain => &self.rain,
            Season::Autumn => &self.autumn,
            Season::Winter => &self.winter,
            Season::Spring => &self.spring,
        };
        (!path.as_os_str().is_empty()).then_some(path.as_path())
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Season shown at start-up.
    pub initial_season: Season,
    /// Number of particles in the field.
    pub particle_count: usize,
    /// Which seasons show particles.
    pub precipitation: PrecipitationMode,
    /// Tick interval in milliseconds.
    pub tick_ms: u64,
    /// Fixed random seed; entropy when absent.
    pub seed: Option<u64>,
    /// Base directory for relative background paths.
    pub asset_dir: PathBuf,
    /// Background images.
    pub backgrounds: BackgroundPaths,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_season: Season::Spring,
            particle_count: 1000,
            precipitation: PrecipitationMode::Drifting,
            tick_ms: 16,
            seed: None,
            asset_dir: PathBuf::from("."),
            backgrounds: BackgroundPaths::default(),
        }
    }
}

impl Config {
    /// Location of the config file, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            warn!("no config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        Self::load_or_default(&path)
    }

    /// Load from an explicit file; a broken file is logged and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(err) => {
                warn!(error = %err, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Load from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Simulation parameters; the particle count is kept within 1..=[`MAX_PARTICLES`].
    pub fn settings(&self) -> SimulationSettings {
        if self.particle_count > MAX_PARTICLES {
            warn!(
                requested = self.particle_count,
                max = MAX_PARTICLES,
                "particle_count too large, clamping"
            );
        }
        SimulationSettings {
            initial_season: self.initial_season,
            particle_count: self.particle_count.clamp(1, MAX_PARTICLES),
            precipitation: self.precipitation,
        }
    }

    /// Tick interval; at least one millisecond.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Background paths resolved against [`Config::asset_dir`].
    pub fn background_paths(&self) -> SeasonMap<Option<PathBuf>> {
        SeasonMap::from_fn(|season| {
            self.backgrounds
                .get(season)
                .map(|path| self.asset_dir.join(path))
        })
    }
}

/// Directory for the log file; the working directory when the platform has none.
pub fn log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.settings(), SimulationSettings::default());
        assert_eq!(config.tick_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml(
            r#"
            initial_season = "winter"
            particle_count = 500
            precipitation = "classic"
            tick_ms = 33
            seed = 7
            asset_dir = "assets"

            [backgrounds]
            rain = "rain_sky.png"
            summer = ""
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_season, Season::Winter);
        assert_eq!(config.particle_count, 500);
        assert_eq!(config.precipitation, PrecipitationMode::Classic);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.tick_interval(), Duration::from_millis(33));

        let paths = config.background_paths();
        assert_eq!(paths[Season::Summer], None);
        assert_eq!(
            paths[Season::Rain],
            Some(Path::new("assets").join("rain_sky.png"))
        );
        // Unlisted seasons keep their default image.
        assert_eq!(
            paths[Season::Winter],
            Some(Path::new("assets").join("winter_sky.jpg"))
        );
    }

    #[test]
    fn test_default_backgrounds_skip_rain() {
        let paths = Config::default().background_paths();
        assert_eq!(paths[Season::Rain], None);
        assert_eq!(
            paths[Season::Autumn],
            Some(Path::new(".").join("autumn_sky.jpg"))
        );
    }

    #[test]
    fn test_degenerate_values_are_clamped() {
        let config = Config::from_toml("particle_count = 0\ntick_ms = 0").unwrap();
        assert_eq!(config.settings().particle_count, 1);
        assert_eq!(config.tick_interval(), Duration::from_millis(1));

        let config = Config::from_toml("particle_count = 9223372036854775807").unwrap();
        assert_eq!(config.settings().particle_count, MAX_PARTICLES);
    }

    #[test]
    fn test_unknown_season_is_a_parse_error() {
        assert!(Config::from_toml("initial_season = \"monsoon\"").is_err());
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = Config::load_from(Path::new("/definitely/not/here/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join(format!("seasonfall-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let broken = dir.join("broken.toml");
        fs::write(&broken, "particle_count = [not toml").unwrap();
        let valid = dir.join("valid.toml");
        fs::write(&valid, "initial_season = \"rain\"").unwrap();

        let fallback = Config::load_or_default(&broken);
        let loaded = Config::load_or_default(&valid);
        let missing = Config::load_or_default(&dir.join("absent.toml"));
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(fallback, Config::default());
        assert_eq!(loaded.initial_season, Season::Rain);
        assert_eq!(missing, Config::default());
    }
}
