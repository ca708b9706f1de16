//! Node metrics samples and their bounded trailing history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// One telemetry reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetrySample {
    /// CPU usage, percent (0-100).
    pub cpu: u8,
    /// Memory usage, percent (0-100).
    pub memory: u8,
    /// Messages per second.
    pub throughput: u32,
    /// Milliseconds.
    pub latency: u32,
    /// S3 upload progress, percent (0-100). Only shown with cloud replication.
    pub upload: u8,
}

impl TelemetrySample {
    /// Reading shown while the pipeline is not running.
    pub const IDLE: TelemetrySample = TelemetrySample {
        cpu: 5,
        memory: 15,
        throughput: 0,
        latency: 0,
        upload: 0,
    };
}

impl Default for TelemetrySample {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Fixed-capacity FIFO of recent samples, oldest first.
#[derive(Debug, Clone)]
pub struct TelemetryHistory {
    samples: VecDeque<TelemetrySample>,
    capacity: usize,
}

impl TelemetryHistory {
    /// Default number of retained samples.
    pub const DEFAULT_CAPACITY: usize = 20;

    /// Creates an empty history. A zero capacity is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a sample, evicting the oldest ones beyond capacity.
    pub fn push(&mut self, sample: TelemetrySample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &TelemetrySample> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&TelemetrySample> {
        self.samples.back()
    }

    /// Throughput values for sparkline rendering.
    pub fn throughput_series(&self) -> Vec<u64> {
        self.samples.iter().map(|s| s.throughput as u64).collect()
    }

    /// Latency values for sparkline rendering.
    pub fn latency_series(&self) -> Vec<u64> {
        self.samples.iter().map(|s| s.latency as u64).collect()
    }
}

impl Default for TelemetryHistory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: u32) -> TelemetrySample {
        TelemetrySample {
            cpu: 20,
            memory: 40,
            throughput: n,
            latency: 5,
            upload: 30,
        }
    }

    #[test]
    fn test_history_keeps_most_recent_in_order() {
        let mut history = TelemetryHistory::new(20);
        for n in 0..57 {
            history.push(sample(n));
            assert!(history.len() <= 20);
        }
        let kept: Vec<u32> = history.iter().map(|s| s.throughput).collect();
        let expected: Vec<u32> = (37..57).collect();
        assert_eq!(kept, expected);
        assert_eq!(history.latest().map(|s| s.throughput), Some(56));
    }

    #[test]
    fn test_history_below_capacity() {
        let mut history = TelemetryHistory::default();
        history.push(sample(1));
        history.push(sample(2));
        assert_eq!(history.throughput_series(), vec![1, 2]);
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut history = TelemetryHistory::new(0);
        history.push(sample(1));
        history.push(sample(2));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.throughput_series(), vec![2]);
    }
}
