use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

fn default_from_lang() -> String {
    "en".to_string()
}

fn default_to_lang() -> String {
    "es".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let api_url = env::var("LINGO_API_URL").unwrap_or_else(|_| default_api_url());
        let from_lang = env::var("LINGO_FROM_LANG").unwrap_or_else(|_| default_from_lang());
        let to_lang = env::var("LINGO_TO_LANG").unwrap_or_else(|_| default_to_lang());

        Self {
            api_url,
            from_lang,
            to_lang,
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
        }
    }
}
