use std::sync::{Arc, Mutex};

use lingo_translator::{ProviderMetadata, TranslateError, Translation, Translator};
use lingo_types::TranslationRecord;

use crate::session::{Session, TRANSLATION_FAILED_MSG};
use crate::store::{HistoryStore, StoreError};

/// In-memory slot; `None` models the absent key.
#[derive(Default)]
struct MemoryStore {
    slot: Mutex<Option<Vec<TranslationRecord>>>,
}

impl MemoryStore {
    fn with_records(records: Vec<TranslationRecord>) -> Self {
        Self {
            slot: Mutex::new(Some(records)),
        }
    }

    fn slot(&self) -> Option<Vec<TranslationRecord>> {
        self.slot.lock().unwrap().clone()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Vec<TranslationRecord> {
        self.slot.lock().unwrap().clone().unwrap_or_default()
    }

    fn save(&self, history: &[TranslationRecord]) -> Result<(), StoreError> {
        *self.slot.lock().unwrap() = Some(history.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

/// Scripted provider that records what it was asked to translate.
struct FakeTranslator {
    reply: Result<String, u16>,
    requests: Mutex<Vec<String>>,
}

impl FakeTranslator {
    fn ok(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        self.requests.lock().unwrap().push(text.to_string());

        match &self.reply {
            Ok(translated) => Ok(Translation {
                text: translated.clone(),
                from: from.to_string(),
                to: to.to_string(),
                provider: "fake".to_string(),
            }),
            Err(status) => Err(TranslateError::BadStatus(*status)),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

fn session_with(store: Arc<MemoryStore>) -> Session {
    Session::new(store, "en", "es")
}

#[tokio::test]
async fn empty_input_is_a_noop() {
    let store = Arc::new(MemoryStore::default());
    let mut session = session_with(store.clone());
    let translator = FakeTranslator::ok("hola");

    session.set_input_text("   \n\t");
    session.translate(&translator).await;

    assert!(translator.requests().is_empty());
    assert!(!session.is_loading());
    assert!(session.history().is_empty());
    assert_eq!(session.last_error(), None);
    assert_eq!(session.output_text(), "");
    assert_eq!(store.slot(), None);
}

#[tokio::test]
async fn successful_translate_updates_output_and_history() {
    let store = Arc::new(MemoryStore::default());
    let mut session = session_with(store.clone());
    let translator = FakeTranslator::ok("hola");

    session.set_input_text("hello");
    session.translate(&translator).await;

    assert_eq!(session.output_text(), "hola");
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].original, "hello");
    assert_eq!(session.history()[0].translated, "hola");
    assert_eq!(session.history()[0].from_lang, "en");
    assert_eq!(session.history()[0].to_lang, "es");
    assert!(!session.is_loading());
    assert_eq!(session.last_error(), None);

    let persisted = store.slot().expect("history should be persisted");
    assert_eq!(persisted, session.history());
}

#[tokio::test]
async fn input_is_trimmed_before_request_and_record() {
    let store = Arc::new(MemoryStore::default());
    let mut session = session_with(store);
    let translator = FakeTranslator::ok("hola");

    session.set_input_text("  hello \n");
    session.translate(&translator).await;

    assert_eq!(translator.requests(), vec!["hello".to_string()]);
    assert_eq!(session.history()[0].original, "hello");
}

#[tokio::test]
async fn failed_translate_sets_fixed_message_and_keeps_state() {
    let store = Arc::new(MemoryStore::default());
    let mut session = session_with(store.clone());

    session.set_input_text("hello");
    session.translate(&FakeTranslator::ok("hola")).await;

    session.set_input_text("world");
    session.translate(&FakeTranslator::failing(500)).await;

    // output keeps the previous result, history gains nothing
    assert_eq!(session.output_text(), "hola");
    assert_eq!(session.last_error(), Some(TRANSLATION_FAILED_MSG));
    assert_eq!(session.history().len(), 1);
    assert!(!session.is_loading());
    assert_eq!(store.slot().unwrap().len(), 1);
}

#[tokio::test]
async fn fresh_attempt_clears_previous_error() {
    let store = Arc::new(MemoryStore::default());
    let mut session = session_with(store);

    session.set_input_text("hello");
    session.translate(&FakeTranslator::failing(500)).await;
    assert_eq!(session.last_error(), Some(TRANSLATION_FAILED_MSG));

    session.translate(&FakeTranslator::ok("hola")).await;
    assert_eq!(session.last_error(), None);
    assert_eq!(session.output_text(), "hola");
}

#[tokio::test]
async fn overlapping_translate_is_rejected() {
    let store = Arc::new(MemoryStore::default());
    let mut session = session_with(store);
    session.set_input_text("hello");

    let job = session.begin_translate().expect("first call claims the slot");
    assert!(session.is_loading());
    assert!(session.begin_translate().is_none());

    let translator = FakeTranslator::ok("hola");
    let result = translator.translate(&job.text, &job.from, &job.to).await;
    session.complete_translate(job, result);

    assert!(!session.is_loading());
    // slot is free again after completion
    assert!(session.begin_translate().is_some());
}

#[tokio::test]
async fn history_is_restored_at_construction() {
    let records = vec![
        TranslationRecord::new("hi", "hola", "en", "es"),
        TranslationRecord::new("bye", "adios", "en", "es"),
    ];
    let store = Arc::new(MemoryStore::with_records(records.clone()));

    let session = session_with(store);

    assert_eq!(session.history(), records.as_slice());
}

#[tokio::test]
async fn new_records_are_prepended() {
    let store = Arc::new(MemoryStore::with_records(vec![TranslationRecord::new(
        "old", "viejo", "en", "es",
    )]));
    let mut session = session_with(store);

    session.set_input_text("new");
    session.translate(&FakeTranslator::ok("nuevo")).await;

    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[0].original, "new");
    assert_eq!(session.history()[1].original, "old");
}

#[test]
fn swap_languages_is_its_own_inverse() {
    let store = Arc::new(MemoryStore::default());
    let mut session = session_with(store);

    session.swap_languages();
    assert_eq!(session.from_lang(), "es");
    assert_eq!(session.to_lang(), "en");

    session.swap_languages();
    assert_eq!(session.from_lang(), "en");
    assert_eq!(session.to_lang(), "es");
}

#[tokio::test]
async fn swap_promotes_output_into_input() {
    let store = Arc::new(MemoryStore::default());
    let mut session = session_with(store);

    session.set_input_text("hello");
    session.translate(&FakeTranslator::ok("hola")).await;

    session.swap_languages();

    assert_eq!(session.input_text(), "hola");
    assert_eq!(session.output_text(), "");
    assert_eq!(session.from_lang(), "es");
    assert_eq!(session.to_lang(), "en");
}

#[tokio::test]
async fn clear_history_is_idempotent() {
    let store = Arc::new(MemoryStore::default());
    let mut session = session_with(store.clone());

    session.set_input_text("hello");
    session.translate(&FakeTranslator::ok("hola")).await;
    assert!(store.slot().is_some());

    session.clear_history();
    assert!(session.history().is_empty());
    assert_eq!(store.slot(), None);

    session.clear_history();
    assert!(session.history().is_empty());
    assert_eq!(store.slot(), None);
}

#[test]
fn snapshot_reflects_observable_fields() {
    let store = Arc::new(MemoryStore::default());
    let mut session = session_with(store);
    session.set_input_text("hello");

    let snapshot = session.snapshot();

    assert_eq!(snapshot.input_text, "hello");
    assert_eq!(snapshot.from_lang, "en");
    assert_eq!(snapshot.to_lang, "es");
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.last_error, None);
    assert!(snapshot.history.is_empty());
}
