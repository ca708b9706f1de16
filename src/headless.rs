//! Headless runner: drives the simulated pipeline without a terminal UI and
//! streams log entries as JSON lines.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::ConsoleError;
use crate::store::{Action, Store};

/// Longest single sleep, so a stop request is noticed promptly.
const MAX_WAIT: Duration = Duration::from_millis(100);

/// Connects, starts the pipeline and runs until `ticks` simulator ticks were
/// applied or `stop` is set. Every log entry appended along the way is
/// written to `out` as one JSON object per line.
///
/// Returns the number of simulator ticks applied.
pub fn run_headless<W: Write>(
    store: &mut Store,
    ticks: u64,
    stop: &AtomicBool,
    out: &mut W,
) -> Result<u64, ConsoleError> {
    let mut cursor = store.log().last_id();
    let first_tick = store.ticks();

    let aws_enabled = store.aws_enabled();
    store.dispatch(Action::Connect { aws_enabled }, Instant::now())?;
    store.dispatch(Action::StartRun, Instant::now())?;
    cursor = flush(store, cursor, out)?;
    info!(ticks, "headless run started");

    while store.ticks() - first_tick < ticks && !stop.load(Ordering::SeqCst) {
        let now = Instant::now();
        match store.next_deadline() {
            Some(deadline) if deadline > now => {
                thread::sleep((deadline - now).min(MAX_WAIT));
            }
            Some(_) => {
                store.fire_due(now);
                cursor = flush(store, cursor, out)?;
            }
            None => break,
        }
    }

    let applied = store.ticks() - first_tick;
    store.dispatch(Action::PauseRun, Instant::now())?;
    flush(store, cursor, out)?;
    debug!(applied, "headless run finished");
    Ok(applied)
}

/// Writes entries newer than `cursor`; returns the new cursor.
fn flush<W: Write>(store: &Store, cursor: u64, out: &mut W) -> Result<u64, ConsoleError> {
    let mut last = cursor;
    for entry in store.log().since(cursor) {
        let line = serde_json::to_string(entry).map_err(|e| ConsoleError::Io(e.to_string()))?;
        writeln!(out, "{}", line)?;
        last = entry.id;
    }
    out.flush()?;
    Ok(last)
}
