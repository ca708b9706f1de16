//! Simulated live row feed for table and view tabs.
//!
//! A feed pre-generates all of its rows and reveals them in fixed-size
//! batches; once every row is visible it stays saturated.

use rand::Rng;

/// Change operation carried by a synthetic row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOp {
    Insert,
    Update,
    Delete,
}

impl RowOp {
    pub fn label(&self) -> &'static str {
        match self {
            RowOp::Insert => "INSERT",
            RowOp::Update => "UPDATE",
            RowOp::Delete => "DELETE",
        }
    }
}

/// One generated change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticRow {
    /// Display ordering, starting at 1.
    pub seq: u64,
    pub key: String,
    pub op: RowOp,
    pub payload_bytes: u32,
    pub lag_ms: u32,
}

/// Incrementally revealed set of synthetic rows.
#[derive(Debug, Clone)]
pub struct RowFeed {
    source: String,
    rows: Vec<SyntheticRow>,
    revealed: usize,
    per_tick: usize,
}

impl RowFeed {
    /// Generates `total` rows for `source`. A zero `per_tick` is treated as 1.
    pub fn generate<R: Rng>(source: &str, total: usize, per_tick: usize, rng: &mut R) -> Self {
        let rows = (0..total)
            .map(|i| {
                let op = match rng.gen_range(0..10) {
                    0..=6 => RowOp::Insert,
                    7..=8 => RowOp::Update,
                    _ => RowOp::Delete,
                };
                SyntheticRow {
                    seq: i as u64 + 1,
                    key: format!("{}#{:06}", source, rng.gen_range(0..1_000_000u32)),
                    op,
                    payload_bytes: rng.gen_range(64..4096),
                    lag_ms: rng.gen_range(1..120),
                }
            })
            .collect();
        Self {
            source: source.to_string(),
            rows,
            revealed: 0,
            per_tick: per_tick.max(1),
        }
    }

    /// Reveals the next batch. Returns how many rows became visible.
    pub fn advance(&mut self) -> usize {
        let before = self.revealed;
        self.revealed = (self.revealed + self.per_tick).min(self.rows.len());
        self.revealed - before
    }

    pub fn is_saturated(&self) -> bool {
        self.revealed == self.rows.len()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn per_tick(&self) -> usize {
        self.per_tick
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Rows revealed so far, in generation order.
    pub fn visible(&self) -> &[SyntheticRow] {
        &self.rows[..self.revealed]
    }

    /// Percentage of rows revealed.
    pub fn progress(&self) -> u16 {
        if self.rows.is_empty() {
            return 100;
        }
        (self.revealed * 100 / self.rows.len()) as u16
    }
}
