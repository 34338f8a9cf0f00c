use std::future::Future;
use std::sync::Arc;

use clap::Parser;
use lingo_config::Config;
use lingo_core::session::Session;
use lingo_core::store::FileHistoryStore;
use lingo_translator::MyMemoryTranslator;
use tokio::signal;

mod controller;
mod events;
mod io;
mod state;
mod ui;


use self::controller::AppController;
use self::state::AppState;

/// Console front end for the lingo translation session.
#[derive(Parser)]
#[command(name = "lingo", about = "Translate text via the MyMemory web API")]
struct Args {
    /// Translate this text once and exit instead of starting the shell
    text: Option<String>,

    /// Source language code (e.g. en)
    #[arg(long)]
    from: Option<String>,

    /// Target language code (e.g. es)
    #[arg(long)]
    to: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::new();
    if let Some(from) = args.from {
        config.translator.from_lang = from;
    }
    if let Some(to) = args.to {
        config.translator.to_lang = to;
    }

    if let Some(text) = args.text {
        return translate_once(&config, text).await;
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    run(controller, shutdown).await;
    Ok(())
}

pub async fn run(controller: AppController, shutdown: impl Future<Output = ()>) {
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::debug!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }
}

/// One-shot mode: translate a single argument and print the result.
async fn translate_once(config: &Config, text: String) -> anyhow::Result<()> {
    let store = Arc::new(FileHistoryStore::new(config.storage.history_path()));
    let translator = MyMemoryTranslator::new(config.translator.api_url.clone());
    let mut session = Session::new(
        store,
        config.translator.from_lang.clone(),
        config.translator.to_lang.clone(),
    );

    session.set_input_text(text);
    session.translate(&translator).await;

    if let Some(error) = session.last_error() {
        anyhow::bail!("{error}");
    }

    println!("{}", session.output_text());
    Ok(())
}
