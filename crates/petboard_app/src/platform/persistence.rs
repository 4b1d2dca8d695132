//! Configuration store: the persisted API base URL.

use std::fs;
use std::path::PathBuf;

use petboard_core::normalize_api_base;
use petboard_engine::AtomicFileWriter;
use petboard_logging::{app_error, app_info, app_warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = ".petboard_config.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedConfig {
    api_base: String,
}

/// Reads and writes the API base URL in `{dir}/.petboard_config.ron`.
///
/// `get` never fails: a missing, unreadable or unparsable file falls back
/// to the built-in default. The value is stored and returned with trailing
/// slashes stripped; no URL shape validation happens here.
pub(crate) struct ApiBaseStore {
    dir: PathBuf,
}

impl ApiBaseStore {
    pub(crate) fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub(crate) fn get(&self) -> String {
        let path = self.dir.join(CONFIG_FILENAME);
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return normalize_api_base("");
            }
            Err(err) => {
                app_warn!("Failed to read config from {:?}: {}", path, err);
                return normalize_api_base("");
            }
        };

        match ron::from_str::<PersistedConfig>(&content) {
            Ok(config) => normalize_api_base(&config.api_base),
            Err(err) => {
                app_warn!("Failed to parse config from {:?}: {}", path, err);
                normalize_api_base("")
            }
        }
    }

    pub(crate) fn set(&self, url: &str) {
        let config = PersistedConfig {
            api_base: normalize_api_base(url),
        };

        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&config, pretty) {
            Ok(text) => text,
            Err(err) => {
                app_error!("Failed to serialize config: {}", err);
                return;
            }
        };

        let writer = AtomicFileWriter::new(self.dir.clone());
        match writer.write(CONFIG_FILENAME, &content) {
            Ok(path) => app_info!("Saved API base to {:?}", path),
            Err(err) => app_error!("Failed to write config to {:?}: {}", self.dir, err),
        }
    }
}
