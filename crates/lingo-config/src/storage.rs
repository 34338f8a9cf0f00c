use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Versioned slot name; incompatible older formats simply read as absent.
pub const HISTORY_KEY: &str = "translation_history_v2";

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lingo")
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("LINGO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Self { data_dir }
    }

    /// Location of the persisted history slot.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(format!("{HISTORY_KEY}.json"))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}
