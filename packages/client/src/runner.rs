//! Interactive terminal loop.

use std::thread;

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

use crate::{error::ClientError, session};

/// Connect to the relay and chat from the terminal until Ctrl+C / Ctrl+D
/// or until the relay goes away.
pub async fn run_client(url: &str) -> Result<(), ClientError> {
    let mut session = session::connect(url).await?;

    // rustyline blocks, so it gets its own thread; the runtime never waits on it
    let (line_tx, mut line_rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        if let Err(e) = read_lines(line_tx) {
            tracing::error!("{}", e);
        }
    });

    loop {
        tokio::select! {
            entry = session.next_entry() => match entry {
                Some(entry) => println!("{entry}"),
                None => break,
            },
            line = line_rx.recv() => match line {
                Some(line) => session.submit(line)?,
                None => break,
            },
        }
    }

    session.close().await
}

fn read_lines(lines: mpsc::UnboundedSender<String>) -> Result<(), ClientError> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if lines.send(line).is_err() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
