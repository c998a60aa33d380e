pub mod physics;
pub mod simulation;

pub use physics::PhysicsConfig;
pub use simulation::{NarrationConfig, SimulationConfig, TutorialConfig};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::resources::FlightParameters;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid trainer configuration: {0}")]
    Validation(String),
}

/// Complete trainer configuration, loadable from YAML.
///
/// Every section is optional in the file; missing sections fall back to their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub parameters: FlightParameters,
    pub physics: PhysicsConfig,
    pub tutorial: TutorialConfig,
    pub narration: NarrationConfig,
    pub simulation: SimulationConfig,
}

impl TrainerConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// `<config dir>/liftoff/trainer.yaml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("liftoff").join("trainer.yaml"))
    }

    /// Loads the config at the default path, or the defaults when no file exists there.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate().map_err(ConfigError::Validation)?;

        if let Some(parameter) = self.parameters.non_finite().first() {
            return Err(ConfigError::Validation(format!(
                "parameters: {} must be finite",
                parameter
            )));
        }

        if !(self.simulation.tick_rate > 0.0) || !self.simulation.tick_rate.is_finite() {
            return Err(ConfigError::Validation(format!(
                "simulation.tick_rate must be > 0, got {}",
                self.simulation.tick_rate
            )));
        }
        if !(self.tutorial.advance_delay >= 0.0) {
            return Err(ConfigError::Validation(format!(
                "tutorial.advance_delay must be >= 0, got {}",
                self.tutorial.advance_delay
            )));
        }
        if !(self.narration.cooldown >= 0.0) {
            return Err(ConfigError::Validation(format!(
                "narration.cooldown must be >= 0, got {}",
                self.narration.cooldown
            )));
        }
        Ok(())
    }
}
