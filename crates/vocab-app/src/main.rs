use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod profile;
mod section;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use controller::AppController;
use events::lookup::run_lookup;
use state::AppState;

/// WWWJDIC vocabulary with Forvo pronunciations for a kanji
#[derive(Parser, Debug)]
#[command(name = "vocab-beyond", version)]
struct Args {
    /// Settings file (JSON); defaults to $VOCAB_BEYOND_SETTINGS
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Kanji to look up; reads selections from stdin when omitted
    kanji: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    init_tracing(args.log_json);

    let settings_path = profile::settings_path(args.settings);
    let config = profile::load_config(settings_path.as_deref())?;
    let state = Arc::new(AppState::new(config, settings_path));

    if !args.kanji.is_empty() {
        for kanji in args.kanji {
            if let Some(text) = run_lookup(state.clone(), kanji).await? {
                println!("{text}");
            }
        }
        return Ok(());
    }

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();
    controller.watch_stdin();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        _ = async {
            while let Some(result) = tasks.join_next().await {
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::error!("task exited with error: {e:#}"),
                    Err(e) => tracing::error!("task panicked: {e}"),
                }
            }
        } => {}
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
