//! Runtime configuration for the store and its timers.

use std::time::Duration;

use crate::error::ConsoleError;
use crate::model::TelemetryHistory;
use crate::simulator::{TelemetryRanges, default_catalog};

/// Simulated row feed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Rows generated per feed.
    pub total_rows: usize,
    /// Rows revealed per tick.
    pub rows_per_tick: usize,
    pub interval: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            total_rows: 1000,
            rows_per_tick: 5,
            interval: Duration::from_millis(50),
        }
    }
}

/// Everything the store needs to run the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Simulator period.
    pub tick_interval: Duration,
    /// Telemetry samples kept for charting.
    pub history_capacity: usize,
    pub feed: FeedConfig,
    pub ranges: TelemetryRanges,
    pub catalog: Vec<String>,
    /// Fixed RNG seed; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1500),
            history_capacity: TelemetryHistory::DEFAULT_CAPACITY,
            feed: FeedConfig::default(),
            ranges: TelemetryRanges::default(),
            catalog: default_catalog(),
            seed: None,
        }
    }
}

impl ConsoleConfig {
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.tick_interval.is_zero() {
            return Err(ConsoleError::InvalidConfig(
                "tick interval must be positive".to_string(),
            ));
        }
        if self.history_capacity == 0 {
            return Err(ConsoleError::InvalidConfig(
                "history capacity must be at least 1".to_string(),
            ));
        }
        if self.feed.interval.is_zero() {
            return Err(ConsoleError::InvalidConfig(
                "feed interval must be positive".to_string(),
            ));
        }
        if self.feed.rows_per_tick == 0 {
            return Err(ConsoleError::InvalidConfig(
                "feed batch must be at least 1 row".to_string(),
            ));
        }
        if self.catalog.is_empty() {
            return Err(ConsoleError::InvalidConfig(
                "simulator message catalog is empty".to_string(),
            ));
        }
        self.ranges.validate()
    }
}
