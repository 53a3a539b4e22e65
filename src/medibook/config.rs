use crate::error::{MediBookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SENDER: &str = "demo@hospital.com";
const DEFAULT_CLINIC_NAME: &str = "MediBook";

/// Configuration for medibook, stored in config.json.
///
/// The sender address is only used by the console notifier to label the
/// simulated confirmation; no credentials are needed because real delivery
/// is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediBookConfig {
    /// Address confirmations appear to come from
    #[serde(default = "default_sender")]
    pub sender_email: String,

    /// Clinic name shown in the banner and confirmation signature
    #[serde(default = "default_clinic_name")]
    pub clinic_name: String,
}

fn default_sender() -> String {
    DEFAULT_SENDER.to_string()
}

fn default_clinic_name() -> String {
    DEFAULT_CLINIC_NAME.to_string()
}

impl Default for MediBookConfig {
    fn default() -> Self {
        Self {
            sender_email: default_sender(),
            clinic_name: default_clinic_name(),
        }
    }
}

impl MediBookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MediBookError::Io)?;
        let config: MediBookConfig =
            serde_json::from_str(&content).map_err(MediBookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MediBookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MediBookError::Serialization)?;
        fs::write(config_path, content).map_err(MediBookError::Io)?;
        Ok(())
    }
}
