use std::path::PathBuf;

use gpulabel::constants::config::DEFAULT_CONF_FILE;
use gpulabel::debug;
use gpulabel::{config::MainConfig, error::*};

use crate::directories::PROJECT_DIRS;

#[derive(Debug)]
pub struct BootStrap {
    config: MainConfig,
}

impl BootStrap {
    /// Loads the main configuration, from the given file if any or from the
    /// default location otherwise.
    ///
    /// # Arguments
    /// * `config_override` - The configuration file supplied in the command line
    ///
    /// # Returns
    /// A `Result` containing the bootstrap holding the configuration.
    pub fn new(config_override: Option<&str>) -> Result<Self> {
        let config_file = BootStrap::config_file(config_override)?;
        debug!("Using configuration file {}", config_file.to_string_lossy());
        Ok(BootStrap {
            config: MainConfig::load(&config_file)?,
        })
    }

    /// Retrieves the configuration file using the following order :
    ///
    /// - The path supplied with --config (environment variables and ~ expanded)
    /// - gpulabel.toml inside the directory from PROJECT_DIRS
    ///
    /// # Errors
    /// Returns an error if the path cannot be interpolated or no config directory exists
    fn config_file(config_override: Option<&str>) -> Result<PathBuf> {
        if let Some(path) = config_override {
            return match shellexpand::full(path) {
                Ok(expanded) => Ok(PathBuf::from(expanded.as_ref())),
                Err(e) => Err(Error::InterpolationError {
                    cause: e.to_string(),
                }),
            };
        }

        PROJECT_DIRS
            .as_ref()
            .map(|dirs| dirs.config_dir().join(DEFAULT_CONF_FILE))
            .ok_or_else(|| Error::ConfigError("Could not get home directory".to_string()))
    }

    pub fn get_config(&self) -> &MainConfig {
        &self.config
    }
}
