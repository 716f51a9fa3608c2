use std::{fs::File, io::BufReader, path::PathBuf};

use home::home_dir;
use serde::{Deserialize, Serialize};

use tablily::{Instrument, TablilyError};

/// Local defaults, every field can be overridden on the command line
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    instrument: Option<Instrument>,
    template: Option<PathBuf>,
    default_string: Option<u32>,
    default_duration: Option<u32>,
}

impl Config {
    // folder placed in $HOME directory
    const FOLDER: &'static str = ".tablily";

    pub const fn instrument(&self) -> Option<Instrument> {
        self.instrument
    }

    pub fn template(&self) -> Option<PathBuf> {
        self.template.clone()
    }

    pub const fn default_string(&self) -> Option<u32> {
        self.default_string
    }

    pub const fn default_duration(&self) -> Option<u32> {
        self.default_duration
    }

    fn get_path() -> Result<PathBuf, TablilyError> {
        let home = home_dir().ok_or_else(|| {
            TablilyError::ConfigError("Could not find home directory".to_string())
        })?;
        Ok(home.join(Self::FOLDER).join("config.json"))
    }

    /// Defaults when no config file exists
    pub fn read_config() -> Result<Self, TablilyError> {
        let config_path = Self::get_path()?;
        if !config_path.exists() {
            log::debug!("No local configuration at {config_path:?}");
            return Ok(Self::default());
        }
        log::info!("Reading local configuration {config_path:?}");
        let file = File::open(config_path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, TablilyError> {
        serde_json::from_reader(reader).map_err(|err| {
            TablilyError::ConfigError(format!("Could not read local configuration {err:}"))
        })
    }
}
