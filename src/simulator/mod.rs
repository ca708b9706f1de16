//! Pipeline simulator: produces one log message and one telemetry sample per tick.
//!
//! There is no real pipeline behind it. Messages are picked uniformly from a
//! static catalog and every telemetry field is an independent uniform draw
//! from its configured range.

mod catalog;
mod ranges;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::ConsoleError;
use crate::model::TelemetrySample;

pub use catalog::default_catalog;
pub use ranges::TelemetryRanges;

/// Output of a single simulator tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedTick {
    pub message: String,
    pub sample: TelemetrySample,
}

/// Random log/telemetry generator.
#[derive(Debug, Clone)]
pub struct Simulator<R = StdRng> {
    catalog: Vec<String>,
    ranges: TelemetryRanges,
    rng: R,
}

impl<R: Rng> Simulator<R> {
    /// Creates a simulator. Fails on an empty catalog or invalid ranges.
    pub fn new(catalog: Vec<String>, ranges: TelemetryRanges, rng: R) -> Result<Self, ConsoleError> {
        if catalog.is_empty() {
            return Err(ConsoleError::InvalidConfig(
                "simulator message catalog is empty".to_string(),
            ));
        }
        ranges.validate()?;
        Ok(Self {
            catalog,
            ranges,
            rng,
        })
    }

    /// Picks the next pipeline-stage message.
    pub fn next_message(&mut self) -> &str {
        let idx = self.rng.gen_range(0..self.catalog.len());
        &self.catalog[idx]
    }

    /// Draws a new telemetry sample.
    pub fn sample(&mut self) -> TelemetrySample {
        TelemetrySample {
            cpu: self.rng.gen_range(self.ranges.cpu.clone()),
            memory: self.rng.gen_range(self.ranges.memory.clone()),
            throughput: self.rng.gen_range(self.ranges.throughput.clone()),
            latency: self.rng.gen_range(self.ranges.latency.clone()),
            upload: self.rng.gen_range(self.ranges.upload.clone()),
        }
    }

    /// Produces one message and one sample.
    pub fn tick(&mut self) -> SimulatedTick {
        let message = self.next_message().to_string();
        let sample = self.sample();
        SimulatedTick { message, sample }
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn ranges(&self) -> &TelemetryRanges {
        &self.ranges
    }

    /// Random source, shared with other simulated content.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
