use std::fs::File;
use std::io::Read;
use std::path::Path;

use nu_ansi_term::Color::Yellow;
use serde::Deserialize;

use crate::constants::template::{DEFAULT_PRESETS, DEFAULT_TEMPLATE};
use crate::error::*;
use crate::{debug, log};

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct MainConfig {
    pub format: FormatConfig,
}

/// Settings of the chart label
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct FormatConfig {
    /// Template rendered on every update
    pub template: String,
    /// Whether the label is rendered at all
    pub enabled: bool,
    /// Ready-made templates offered for selection
    pub presets: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> FormatConfig {
        FormatConfig {
            template: DEFAULT_TEMPLATE.to_string(),
            enabled: true,
            presets: DEFAULT_PRESETS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl MainConfig {
    /// Loads the configuration from the given file.
    ///
    /// A missing file is not an error: the default configuration is returned.
    ///
    /// # Arguments
    /// * `file_path` - The path to the TOML configuration file
    ///
    /// # Returns
    /// The parsed configuration
    ///
    /// # Errors
    /// Returns `ConfigReadError` when the file cannot be read and `SerdeTomlError`
    /// when it is not valid TOML.
    ///
    /// # Examples
    /// ```
    /// use std::fs;
    /// use gpulabel::config::MainConfig;
    ///
    /// let temp_dir = tempfile::tempdir().unwrap();
    /// let config_file = temp_dir.path().join("gpulabel.toml");
    /// fs::write(&config_file, "[format]\ntemplate = \"$g%\"\n").unwrap();
    ///
    /// let config = MainConfig::load(&config_file).unwrap();
    /// assert_eq!(config.format.template, "$g%");
    /// assert!(config.format.enabled);
    /// ```
    pub fn load(file_path: &Path) -> Result<Self> {
        let file = file_path.to_string_lossy().to_string();
        let toml_data = match parse(file_path) {
            Ok(data) => data,
            Err(Error::Io(e)) if e.kind() == ::std::io::ErrorKind::NotFound => {
                debug!("Configuration file {} not found, using defaults", file);
                return Ok(MainConfig::default());
            }
            Err(Error::Io(e)) => {
                return Err(Error::ConfigReadError {
                    file,
                    cause: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        debug!("Configuration loaded from {}", file);
        MainConfig::from_toml(&toml_data, &file)
    }

    /// Parses the configuration from TOML text
    ///
    /// # Arguments
    /// * `toml_data` - The configuration contents
    /// * `file` - The name reported in errors
    pub fn from_toml(toml_data: &str, file: &str) -> Result<Self> {
        toml::from_str::<MainConfig>(toml_data).map_err(|e| Error::SerdeTomlError {
            file: file.to_string(),
            cause: log::debug_message(
                e.to_string(),
                Yellow.paint(format!("\n[Config path] {}", file)).to_string(),
            ),
        })
    }

    /// Retrieves a preset by its index
    ///
    /// # Errors
    /// Returns `PresetNotFound` when the index is out of range.
    pub fn preset(&self, index: usize) -> Result<&str> {
        self.format
            .presets
            .get(index)
            .map(|p| p.as_str())
            .ok_or(Error::PresetNotFound {
                index,
                available: self.format.presets.len(),
            })
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}
