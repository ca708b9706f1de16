//! Session flags.

use serde::{Deserialize, Serialize};

/// Endpoint highlighted as the live target (blue/green routing).
///
/// Purely cosmetic: no data flows anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrafficRoute {
    #[default]
    Source,
    Target,
}

impl TrafficRoute {
    pub fn flipped(self) -> Self {
        match self {
            TrafficRoute::Source => TrafficRoute::Target,
            TrafficRoute::Target => TrafficRoute::Source,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrafficRoute::Source => "SOURCE",
            TrafficRoute::Target => "TARGET",
        }
    }

    /// Endpoint name for the route.
    pub fn endpoint(&self) -> &'static str {
        match self {
            TrafficRoute::Source => "PostgreSQL (blue)",
            TrafficRoute::Target => "MongoDB (green)",
        }
    }
}

/// Connection and run state. `running` implies `connected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub connected: bool,
    pub running: bool,
    pub route: TrafficRoute,
}

impl Session {
    /// True when the simulated pipeline should be producing events.
    pub fn is_active(&self) -> bool {
        self.connected && self.running
    }
}
