//! Input reading and cleaning

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;

/// Lowercases `text` and splits it on whitespace.
///
/// Blank input yields an empty vector.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

// == Line Reader ==
/// Reads lines from `reader` on a dedicated OS thread and forwards them.
///
/// The channel closes at end of input or after the first read error. The
/// thread is detached: a read still blocked when the receiver is dropped
/// does not hold up runtime shutdown or process exit.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);

    thread::spawn(move || {
        for line in reader.lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() || failed {
                break;
            }
        }
    });

    rx
}
