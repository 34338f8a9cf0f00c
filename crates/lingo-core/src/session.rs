use std::sync::Arc;

use lingo_translator::{TranslateError, Translation, Translator};
use lingo_types::{SessionSnapshot, TranslationRecord};

use crate::store::HistoryStore;

/// The one message every failed attempt surfaces; causes stay in the logs.
pub const TRANSLATION_FAILED_MSG: &str = "Translation failed. Please try again.";

/// Input captured when a request leaves the Idle state. Holding the job is
/// holding the single in-flight slot.
#[derive(Debug)]
pub struct TranslateJob {
    pub text: String,
    pub from: String,
    pub to: String,
}

/// Translation session: current input/output, selected language pair, and
/// the persisted history. Constructed once per run; all mutation happens on
/// one execution context, the network call being the only suspension point.
pub struct Session {
    input_text: String,
    output_text: String,
    from_lang: String,
    to_lang: String,
    history: Vec<TranslationRecord>,
    is_loading: bool,
    last_error: Option<String>,
    store: Arc<dyn HistoryStore>,
}

impl Session {
    /// Build a session around its persistence collaborator; history is
    /// restored from the store immediately.
    pub fn new(
        store: Arc<dyn HistoryStore>,
        from_lang: impl Into<String>,
        to_lang: impl Into<String>,
    ) -> Self {
        let history = store.load();

        Self {
            input_text: String::new(),
            output_text: String::new(),
            from_lang: from_lang.into(),
            to_lang: to_lang.into(),
            history,
            is_loading: false,
            last_error: None,
            store,
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    pub fn from_lang(&self) -> &str {
        &self.from_lang
    }

    pub fn set_from_lang(&mut self, code: impl Into<String>) {
        self.from_lang = code.into();
    }

    pub fn to_lang(&self) -> &str {
        &self.to_lang
    }

    pub fn set_to_lang(&mut self, code: impl Into<String>) {
        self.to_lang = code.into();
    }

    /// Newest-first.
    pub fn history(&self) -> &[TranslationRecord] {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Pull-based view for observers; published by the shell after every
    /// mutating operation.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            input_text: self.input_text.clone(),
            output_text: self.output_text.clone(),
            from_lang: self.from_lang.clone(),
            to_lang: self.to_lang.clone(),
            history: self.history.clone(),
            is_loading: self.is_loading,
            last_error: self.last_error.clone(),
        }
    }

    /// Exchange the language pair. A non-empty output is promoted into the
    /// input so the next translate runs the result back the other way.
    pub fn swap_languages(&mut self) {
        std::mem::swap(&mut self.from_lang, &mut self.to_lang);

        if !self.output_text.is_empty() {
            self.input_text = std::mem::take(&mut self.output_text);
        }
    }

    /// Leave Idle: claim the in-flight slot and capture the request input.
    ///
    /// Returns `None` without any state change when the trimmed input is
    /// empty, or when a request is already outstanding — overlapping calls
    /// are rejected, not queued.
    pub fn begin_translate(&mut self) -> Option<TranslateJob> {
        let text = self.input_text.trim();
        if text.is_empty() {
            return None;
        }

        if self.is_loading {
            tracing::debug!("translate requested while one is in flight, rejecting");
            return None;
        }

        self.is_loading = true;
        self.last_error = None;

        Some(TranslateJob {
            text: text.to_string(),
            from: self.from_lang.clone(),
            to: self.to_lang.clone(),
        })
    }

    /// Re-enter Idle with either the translated output or the fixed failure
    /// message. A successful attempt is recorded at the head of the history
    /// and the slot rewritten, best-effort.
    pub fn complete_translate(
        &mut self,
        job: TranslateJob,
        result: Result<Translation, TranslateError>,
    ) {
        match result {
            Ok(translation) => {
                self.output_text = translation.text.clone();

                let record =
                    TranslationRecord::new(job.text, translation.text, job.from, job.to);
                self.history.insert(0, record);

                if let Err(e) = self.store.save(&self.history) {
                    tracing::warn!("failed to persist history: {e}");
                }
            }
            Err(e) => {
                tracing::warn!("translation failed: {e}");
                self.last_error = Some(TRANSLATION_FAILED_MSG.to_string());
            }
        }

        self.is_loading = false;
    }

    /// Run one full translate pass against the given client.
    pub async fn translate(&mut self, translator: &dyn Translator) {
        let Some(job) = self.begin_translate() else {
            return;
        };

        let result = translator.translate(&job.text, &job.from, &job.to).await;
        self.complete_translate(job, result);
    }

    /// Drop all records and erase the persisted slot itself. Idempotent.
    pub fn clear_history(&mut self) {
        self.history.clear();

        if let Err(e) = self.store.clear() {
            tracing::warn!("failed to clear persisted history: {e}");
        }
    }
}
