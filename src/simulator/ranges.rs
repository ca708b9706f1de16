//! Value ranges for simulated telemetry.

use std::ops::Range;

use crate::error::ConsoleError;

/// Half-open ranges each telemetry field is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryRanges {
    /// Percent.
    pub cpu: Range<u8>,
    /// Percent.
    pub memory: Range<u8>,
    /// Messages per second.
    pub throughput: Range<u32>,
    /// Milliseconds.
    pub latency: Range<u32>,
    /// Percent.
    pub upload: Range<u8>,
}

impl Default for TelemetryRanges {
    fn default() -> Self {
        Self {
            cpu: 20..50,
            memory: 40..60,
            throughput: 1000..1500,
            latency: 5..55,
            upload: 30..70,
        }
    }
}

impl TelemetryRanges {
    /// Checks that every range is non-empty and percentages stay within 0-100.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        check_percent("cpu", &self.cpu)?;
        check_percent("memory", &self.memory)?;
        check_percent("upload", &self.upload)?;
        if self.throughput.is_empty() {
            return Err(empty("throughput"));
        }
        if self.latency.is_empty() {
            return Err(empty("latency"));
        }
        Ok(())
    }
}

fn check_percent(field: &str, range: &Range<u8>) -> Result<(), ConsoleError> {
    if range.is_empty() {
        return Err(empty(field));
    }
    if range.end > 101 {
        return Err(ConsoleError::InvalidConfig(format!(
            "{} range {}..{} exceeds 100%",
            field, range.start, range.end
        )));
    }
    Ok(())
}

fn empty(field: &str) -> ConsoleError {
    ConsoleError::InvalidConfig(format!("{} range is empty", field))
}
