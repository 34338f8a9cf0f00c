use kanal::AsyncSender;
use lingo_types::AppEvent;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Reads shell commands from stdin and forwards them as events.
pub async fn stdin_io(
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel_token: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => return Ok(()),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    ui_to_app_tx.send(AppEvent::Shutdown).await?;
                    return Ok(());
                };

                for event in parse_command(&line) {
                    ui_to_app_tx.send(event).await?;
                }
            }
        }
    }
}

/// Map one input line to session events. Plain text sets the input and
/// requests a translation in one go.
pub fn parse_command(line: &str) -> Vec<AppEvent> {
    let line = line.trim();

    match line {
        "" => Vec::new(),
        ":swap" => vec![AppEvent::SwapLanguages],
        ":clear" => vec![AppEvent::ClearHistory],
        ":history" => vec![AppEvent::ShowHistory],
        ":langs" => vec![AppEvent::ShowLanguages],
        ":quit" | ":q" => vec![AppEvent::Shutdown],
        _ => {
            if let Some(code) = line.strip_prefix(":from ") {
                vec![AppEvent::FromLangSelected(code.trim().to_string())]
            } else if let Some(code) = line.strip_prefix(":to ") {
                vec![AppEvent::ToLangSelected(code.trim().to_string())]
            } else {
                vec![
                    AppEvent::InputChanged(line.to_string()),
                    AppEvent::TranslateRequested,
                ]
            }
        }
    }
}
