//! Fulfillment data model: pack lines and the plans built from them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures raised by the fulfillment core. Both are deterministic
/// functions of the input and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FulfillmentError {
    /// The pack-size catalog cannot produce any plan (empty, or holds a zero size).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The order quantity is negative.
    #[error("Invalid order quantity: {0}")]
    InvalidOrder(i64),
}

/// "Ship `count` packs of `size` units each."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackLine {
    pub size: u32,
    pub count: u64,
}

impl PackLine {
    pub fn new(size: u32, count: u64) -> Self {
        Self { size, count }
    }

    /// Units shipped by this line.
    pub fn units(&self) -> u64 {
        u64::from(self.size).saturating_mul(self.count)
    }
}

/// Ordered pack lines proposed to satisfy one order, largest size first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FulfillmentPlan {
    lines: Vec<PackLine>,
}

impl FulfillmentPlan {
    pub fn new(lines: Vec<PackLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[PackLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<PackLine> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of pack lines. This is the quantity the heuristic minimizes.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of physical packs across all lines.
    pub fn total_packs(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |total, line| total.saturating_add(line.count))
    }

    /// Units shipped across all lines, saturating at `u64::MAX`.
    pub fn shipped_total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |total, line| total.saturating_add(line.units()))
    }

    /// Units shipped beyond `order_quantity`.
    pub fn overage(&self, order_quantity: u64) -> u64 {
        self.shipped_total().saturating_sub(order_quantity)
    }

    /// Merges adjacent lines that share a size. Shipped total is unchanged.
    pub fn consolidate(self) -> Self {
        let mut merged: Vec<PackLine> = Vec::with_capacity(self.lines.len());
        for line in self.lines {
            match merged.last_mut() {
                Some(last) if last.size == line.size => {
                    last.count = last.count.saturating_add(line.count);
                }
                _ => merged.push(line),
            }
        }
        Self { lines: merged }
    }
}

impl From<Vec<PackLine>> for FulfillmentPlan {
    fn from(lines: Vec<PackLine>) -> Self {
        Self::new(lines)
    }
}
