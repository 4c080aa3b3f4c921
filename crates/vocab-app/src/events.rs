use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use vocab_core::types::AppEvent;

use crate::profile;
use crate::state::AppState;

pub mod lookup;

use lookup::{Cycle, begin_lookup, finish_lookup};

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lookups = JoinSet::new();

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            Some(result) = lookups.join_next(), if !lookups.is_empty() => {
                if let Err(e) = result {
                    tracing::error!("lookup task panicked: {e}");
                }
                continue;
            }
            event = input_rx.recv() => event?,
        };

        tracing::debug!("[EVENT_LOOP] EVENT RECEIVED: {:?}", event);
        match event {
            AppEvent::KanjiSelected(kanji) => {
                // Section is claimed in arrival order, before the lookup is spawned
                if let Some(cycle) = begin_lookup(&state, &kanji).await {
                    lookups.spawn(lookup_task(state.clone(), cycle, app_to_ui_tx.clone()));
                }
            }
            AppEvent::ReloadSettings => {
                if let Err(e) = profile::reload(&state).await {
                    tracing::error!("Settings reload failed, keeping previous settings: {e:#}");
                    continue;
                }

                let current = state.section.lock().await.kanji().map(str::to_string);
                if let Some(kanji) = current
                    && let Some(cycle) = begin_lookup(&state, &kanji).await
                {
                    lookups.spawn(lookup_task(state.clone(), cycle, app_to_ui_tx.clone()));
                }
            }
            AppEvent::ShowSection(_) => {
                // UI-only event, ignore in backend
            }
            AppEvent::Shutdown => {
                tracing::info!("[EVENT_LOOP] Shutdown requested, finishing in-flight lookups");
                while let Some(result) = lookups.join_next().await {
                    if let Err(e) = result {
                        tracing::error!("lookup task panicked: {e}");
                    }
                }
                cancel.cancel();
                break;
            }
        }
    }

    Ok(())
}

/// One lookup cycle. Superseded cycles finish silently.
async fn lookup_task(state: Arc<AppState>, cycle: Cycle, app_to_ui_tx: AsyncSender<AppEvent>) {
    let kanji = cycle.kanji().to_string();
    match finish_lookup(state, cycle).await {
        Ok(Some(text)) => {
            if let Err(e) = app_to_ui_tx.send(AppEvent::ShowSection(text)).await {
                tracing::error!("Failed to send section for {kanji}: {e}");
            }
        }
        Ok(None) => tracing::debug!("Lookup for {kanji} produced no output"),
        Err(e) => tracing::error!("Lookup for {kanji} failed: {e:#}"),
    }
}
