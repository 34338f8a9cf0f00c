use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed translation. Immutable once created; the history keeps
/// records newest-first.
///
/// Serialized with the camelCase key names the persisted slot has always
/// used (`fromLang`, `toLang`, `date`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub id: Uuid,
    pub original: String,
    pub translated: String,
    pub from_lang: String,
    pub to_lang: String,
    pub date: DateTime<Utc>,
}

impl TranslationRecord {
    pub fn new(
        original: impl Into<String>,
        translated: impl Into<String>,
        from_lang: impl Into<String>,
        to_lang: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            original: original.into(),
            translated: translated.into(),
            from_lang: from_lang.into(),
            to_lang: to_lang.into(),
            date: Utc::now(),
        }
    }
}
