use craftkit_world::spawn::SPAWN_CHUNK_RADIUS;
use log::warn;
use logging::LoggingConfig;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use std::{
    fs, io,
    num::NonZeroU8,
    path::{Path, PathBuf},
};

pub mod logging;

const CONFIG_ROOT_FOLDER: &str = "config/";

/// Largest spawn chunk radius the game accepts.
pub const MAX_SPAWN_CHUNK_RADIUS: i32 = 32;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't create config folder {path:?}: {source}")]
    CreateFolder { path: PathBuf, source: io::Error },
    #[error("couldn't read configuration file at {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error(
        "couldn't parse config at {path:?}. Reason: {message}. This is probably caused by a config update; just delete the old config"
    )]
    Parse { path: PathBuf, message: String },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Tweaks to the tool itself rather than to the modelled world.
#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
#[serde(default)]
pub struct AdvancedConfiguration {
    pub logging: LoggingConfig,
}

/// The world the calculators describe when no values are given on the command line.
///
/// The configuration should match vanilla by default.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct BasicConfiguration {
    /// The world seed, as typed into the world creation screen. Empty picks a random seed.
    pub seed: String,
    /// World spawn block x.
    pub spawn_x: i32,
    /// World spawn block z.
    pub spawn_z: i32,
    /// Radius in chunks of the spawn chunk square.
    pub spawn_chunk_radius: i32,
    /// Radius in chunks searched around a position for slime chunks.
    pub slime_scan_radius: NonZeroU8,
}

impl Default for BasicConfiguration {
    fn default() -> Self {
        Self {
            seed: String::new(),
            spawn_x: 0,
            spawn_z: 0,
            spawn_chunk_radius: SPAWN_CHUNK_RADIUS,
            slime_scan_radius: NonZeroU8::new(8).unwrap_or(NonZeroU8::MIN),
        }
    }
}

/// Both configuration files, loaded from `<exec_dir>/config/`.
#[derive(Default, Debug)]
pub struct Configuration {
    pub basic: BasicConfiguration,
    pub advanced: AdvancedConfiguration,
}

impl Configuration {
    pub fn load(exec_dir: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            basic: BasicConfiguration::load(exec_dir)?,
            advanced: AdvancedConfiguration::load(exec_dir)?,
        })
    }
}

pub trait LoadConfiguration {
    fn load(exec_dir: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config_dir = exec_dir.join(CONFIG_ROOT_FOLDER);
        if !config_dir.exists() {
            log::debug!("creating new config root folder");
            fs::create_dir_all(&config_dir).map_err(|source| ConfigError::CreateFolder {
                path: config_dir.clone(),
                source,
            })?;
        }
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;

            toml::from_str(&file_content).map_err(|err| ConfigError::Parse {
                path: path.clone(),
                message: err.message().to_string(),
            })?
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(&path, serialized) {
                        warn!("Couldn't write default config to {:?}. Reason: {}", &path, err);
                    }
                }
                Err(err) => warn!("Couldn't serialize default config: {err}"),
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadConfiguration for AdvancedConfiguration {
    fn get_path() -> &'static Path {
        Path::new("features.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

impl LoadConfiguration for BasicConfiguration {
    fn get_path() -> &'static Path {
        Path::new("configuration.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=MAX_SPAWN_CHUNK_RADIUS).contains(&self.spawn_chunk_radius) {
            return Err(ConfigError::Invalid(format!(
                "spawn chunk radius must be between 0 and {MAX_SPAWN_CHUNK_RADIUS}, got {}",
                self.spawn_chunk_radius
            )));
        }
        if self.slime_scan_radius.get() > 64 {
            return Err(ConfigError::Invalid(
                "slime scan radius must be at most 64".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use log::LevelFilter;

    use super::*;

    #[test]
    fn writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Configuration::load(dir.path()).unwrap();
        assert_eq!(config.basic, BasicConfiguration::default());
        assert_eq!(config.advanced, AdvancedConfiguration::default());

        assert!(dir.path().join("config/configuration.toml").exists());
        assert!(dir.path().join("config/features.toml").exists());

        // The written defaults load back unchanged
        let reloaded = Configuration::load(dir.path()).unwrap();
        assert_eq!(reloaded.basic, config.basic);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("config")).unwrap();
        fs::write(
            dir.path().join("config/configuration.toml"),
            "seed = \"glacier\"\nspawn_x = -120\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("config/features.toml"),
            "[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = Configuration::load(dir.path()).unwrap();
        assert_eq!(config.basic.seed, "glacier");
        assert_eq!(config.basic.spawn_x, -120);
        assert_eq!(config.basic.spawn_z, 0);
        assert_eq!(config.basic.spawn_chunk_radius, SPAWN_CHUNK_RADIUS);
        assert_eq!(config.advanced.logging.level, LevelFilter::Debug);
        assert!(config.advanced.logging.enabled);
    }

    #[test]
    fn rejects_bad_radius() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("config")).unwrap();
        fs::write(
            dir.path().join("config/configuration.toml"),
            "spawn_chunk_radius = 40\n",
        )
        .unwrap();

        let err = BasicConfiguration::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("config")).unwrap();
        fs::write(dir.path().join("config/configuration.toml"), "spawn_x = [").unwrap();

        let err = BasicConfiguration::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
