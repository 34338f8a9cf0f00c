use kanal::AsyncReceiver;
use lingo_types::languages::name_for;
use lingo_types::{AppEvent, LANGUAGES, SessionSnapshot, TranslationRecord};

/// Renderer: consumes session snapshots and prints the observable state.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    println!("lingo — type text to translate it");
    println!("commands: :swap :from <code> :to <code> :history :langs :clear :quit");

    let mut latest = SessionSnapshot::default();

    loop {
        let event = app_to_ui_rx.recv().await?;

        match event {
            AppEvent::SessionChanged(snapshot) => {
                render(&snapshot, &latest);
                latest = snapshot;
            }
            AppEvent::ShowHistory => render_history(&latest.history),
            AppEvent::ShowLanguages => render_languages(),
            _ => {}
        }
    }
}

fn render(snapshot: &SessionSnapshot, previous: &SessionSnapshot) {
    if snapshot.is_loading {
        println!(
            "[{} -> {}] translating...",
            snapshot.from_lang, snapshot.to_lang
        );
        return;
    }

    if let Some(error) = &snapshot.last_error {
        println!("{error}");
        return;
    }

    if !snapshot.output_text.is_empty() && snapshot.output_text != previous.output_text {
        println!(
            "[{} -> {}] {}",
            snapshot.from_lang, snapshot.to_lang, snapshot.output_text
        );
    }

    if snapshot.from_lang != previous.from_lang || snapshot.to_lang != previous.to_lang {
        println!(
            "languages: {} -> {}",
            name_for(&snapshot.from_lang).unwrap_or(&snapshot.from_lang),
            name_for(&snapshot.to_lang).unwrap_or(&snapshot.to_lang)
        );
    }
}

fn render_history(history: &[TranslationRecord]) {
    if history.is_empty() {
        println!("No saved translations yet.");
        return;
    }

    for record in history {
        println!(
            "{} [{} -> {}] {} => {}",
            record.date.format("%Y-%m-%d %H:%M"),
            record.from_lang,
            record.to_lang,
            record.original,
            record.translated
        );
    }
}

fn render_languages() {
    for lang in LANGUAGES {
        println!("{:<6} {}", lang.code, lang.name);
    }
}
