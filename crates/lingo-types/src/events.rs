use crate::record::TranslationRecord;

/// Events between the console shell and the session loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // Commands from the presentation layer
    InputChanged(String),
    FromLangSelected(String),
    ToLangSelected(String),
    SwapLanguages,
    TranslateRequested,
    ClearHistory,
    ShowHistory,
    ShowLanguages,
    Shutdown,
    // Notification back to the presentation layer
    SessionChanged(SessionSnapshot),
}

/// Read-only view of the session, published after every mutating operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub input_text: String,
    pub output_text: String,
    pub from_lang: String,
    pub to_lang: String,
    pub history: Vec<TranslationRecord>,
    pub is_loading: bool,
    pub last_error: Option<String>,
}
