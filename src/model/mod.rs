//! Data model shared by the store, simulator and TUI.
//!
//! - `log` - append-only migration log
//! - `telemetry` - node metrics samples and their bounded history
//! - `session` - connection / run / traffic-route flags
//! - `dead_letter` - static sample of failed pipeline events

mod dead_letter;
mod log;
mod session;
mod telemetry;

pub use dead_letter::{DeadLetter, sample_dead_letters};
pub use log::{EventLog, LogEntry, LogKind};
pub use session::{Session, TrafficRoute};
pub use telemetry::{TelemetryHistory, TelemetrySample};
