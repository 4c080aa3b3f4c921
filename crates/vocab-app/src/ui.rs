use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use vocab_core::types::AppEvent;

/// Prints rendered sections to stdout until shutdown, then drains whatever
/// is still queued.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            biased;
            event = app_to_ui_rx.recv() => show(event?),
            _ = cancel.cancelled() => break,
        }
    }

    while let Ok(Some(event)) = app_to_ui_rx.try_recv() {
        show(event);
    }

    Ok(())
}

fn show(event: AppEvent) {
    if let AppEvent::ShowSection(text) = event {
        println!("{text}");
    }
}
