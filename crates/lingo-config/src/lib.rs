use serde::{Deserialize, Serialize};

use self::storage::StorageConfig;
use self::translator::TranslatorConfig;

pub mod storage;
pub mod translator;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Build the runtime configuration, honoring `LINGO_*` env overrides.
    pub fn new() -> Self {
        Config {
            translator: TranslatorConfig::new(),
            storage: StorageConfig::new(),
        }
    }
}
