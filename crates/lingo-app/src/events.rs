use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lingo_core::session::Session;
use lingo_core::store::FileHistoryStore;
use lingo_translator::{MyMemoryTranslator, Translator};
use lingo_types::AppEvent;

use crate::state::AppState;

/// App's main loop: owns the session, reacts to shell commands, and
/// publishes a snapshot after every mutating operation.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Build the session and its collaborators from config
    let (translator, mut session) = {
        let config = state.config.read().await;
        let translator = MyMemoryTranslator::new(config.translator.api_url.clone());
        let store = Arc::new(FileHistoryStore::new(config.storage.history_path()));
        let session = Session::new(
            store,
            config.translator.from_lang.clone(),
            config.translator.to_lang.clone(),
        );
        (translator, session)
    };

    tracing::info!(
        "session ready, provider: {}",
        translator.metadata().name
    );
    app_to_ui_tx
        .send(AppEvent::SessionChanged(session.snapshot()))
        .await?;

    loop {
        let event = ui_to_app_rx.recv().await?;

        if !handle_event(&mut session, &translator, &app_to_ui_tx, event).await? {
            return Ok(());
        }
    }
}

/// Returns `false` once the loop should stop.
async fn handle_event(
    session: &mut Session,
    translator: &dyn Translator,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::InputChanged(text) => {
            session.set_input_text(text);
        }
        AppEvent::FromLangSelected(code) => {
            if !lingo_types::languages::is_supported(&code) {
                tracing::warn!("unknown language code: {code}");
            }
            session.set_from_lang(code);
        }
        AppEvent::ToLangSelected(code) => {
            if !lingo_types::languages::is_supported(&code) {
                tracing::warn!("unknown language code: {code}");
            }
            session.set_to_lang(code);
        }
        AppEvent::SwapLanguages => {
            session.swap_languages();
        }
        AppEvent::TranslateRequested => {
            // Split begin/complete so the loading flag is observable while
            // the request is in flight.
            if let Some(job) = session.begin_translate() {
                app_to_ui_tx
                    .send(AppEvent::SessionChanged(session.snapshot()))
                    .await?;

                let result = translator.translate(&job.text, &job.from, &job.to).await;
                session.complete_translate(job, result);
            }
        }
        AppEvent::ClearHistory => {
            session.clear_history();
        }
        AppEvent::ShowHistory | AppEvent::ShowLanguages => {
            // rendered from the UI side's latest snapshot
            app_to_ui_tx.send(event).await?;
            return Ok(true);
        }
        AppEvent::Shutdown => {
            return Ok(false);
        }
        AppEvent::SessionChanged(_) => {
            // UI-bound notification, nothing to do here
            return Ok(true);
        }
    }

    app_to_ui_tx
        .send(AppEvent::SessionChanged(session.snapshot()))
        .await?;
    Ok(true)
}
