//! Shell session loop
//!
//! Input is read on a plain OS thread and handed to the async loop over a
//! channel, so a pending read never holds up shutdown.

use std::future::Future;
use std::io::{self, BufRead, BufReader, Read};
use std::thread;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::debug;

use crate::cache::Cache;
use crate::shell::{execute, Command};

/// Lines buffered between the reader thread and the session loop.
const LINE_BUFFER: usize = 16;

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Input reached end of file
    Eof,
    /// The user typed `quit`
    Quit,
    /// The shutdown future completed first
    Shutdown,
}

/// Starts a detached thread that reads `reader` line by line.
///
/// The channel closes when input ends, fails, or the receiver is dropped.
/// A thread still blocked in `read` does not keep the process alive once
/// `main` returns.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<io::Result<String>>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::spawn(move || {
        for line in BufReader::new(reader).lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() || failed {
                break;
            }
        }
        debug!("Line reader finished");
    });

    rx
}

/// Executes incoming lines against `cache` until input ends, `quit` is
/// read, or `shutdown` completes. Each reply is written to `out` followed
/// by a newline.
pub async fn run_session<W, S>(
    cache: &Cache,
    lines: &mut mpsc::Receiver<io::Result<String>>,
    out: &mut W,
    shutdown: S,
) -> io::Result<SessionEnd>
where
    W: AsyncWrite + Unpin,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            line = lines.recv() => line,
            _ = &mut shutdown => return Ok(SessionEnd::Shutdown),
        };

        let Some(line) = line else {
            return Ok(SessionEnd::Eof);
        };

        let reply = match Command::parse(&line?) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => return Ok(SessionEnd::Quit),
            Ok(Some(command)) => execute(cache, command),
            Err(e) => format!("(error) {}", e),
        };

        out.write_all(reply.as_bytes()).await?;
        out.write_all(b"\n").await?;
        out.flush().await?;
    }
}
