use std::io::{self, BufRead};
use std::thread;

use kanal::Sender;
use vocab_core::types::AppEvent;

/// Map one input line to an event. Blank lines are ignored.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    match line.trim() {
        "" => None,
        ":quit" | ":q" => Some(AppEvent::Shutdown),
        ":reload" => Some(AppEvent::ReloadSettings),
        kanji => Some(AppEvent::KanjiSelected(kanji.to_string())),
    }
}

/// Read kanji selections from stdin on a dedicated std thread, which is
/// left blocked on exit. End of input requests shutdown.
pub fn spawn_stdin_watcher(event_tx: Sender<AppEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        if atty::is(atty::Stream::Stdin) {
            eprintln!("Enter a kanji to look it up (:reload to re-read settings, :quit to exit)");
        }

        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Failed to read stdin: {e}");
                    break;
                }
            };

            let Some(event) = parse_command(&line) else {
                continue;
            };
            let shutdown = event == AppEvent::Shutdown;

            if event_tx.send(event).is_err() || shutdown {
                return;
            }
        }

        tracing::debug!("stdin closed");
        let _ = event_tx.send(AppEvent::Shutdown);
    })
}
