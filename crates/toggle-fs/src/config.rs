//! Marker profile configuration loading

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::path::Path;
use toggle_engine::MarkerProfile;

use crate::{Error, Result, io};

/// Contents of a `--config` file.
///
/// ```toml
/// [[profile]]
/// name = "actions"
/// pattern = '^(?P<name>[\w-]+):\s*$'
/// indent = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleConfig {
    #[serde(default, rename = "profile")]
    pub profiles: Vec<MarkerProfile>,
}

/// Format-agnostic configuration loading.
///
/// Format is detected from file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = io::read_text(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }
}

/// Load the marker profiles declared in a config file.
pub fn load_profiles(path: &Path) -> Result<Vec<MarkerProfile>> {
    let config: ToggleConfig = ConfigStore::new().load(path)?;
    tracing::debug!(?path, profiles = config.profiles.len(), "Loaded profile config");
    Ok(config.profiles)
}
