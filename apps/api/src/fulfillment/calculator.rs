//! Fulfillment calculator: decompose an order, then reoptimize the result.
//!
//! Pure and synchronous. The caller passes an owned snapshot of the pack-size
//! catalog; the calculator sorts its own copy and never touches shared state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::fulfillment::decompose::decompose;
use crate::fulfillment::models::{FulfillmentError, FulfillmentPlan};
use crate::fulfillment::reoptimize::{reoptimize, reoptimize_to_fixed_point};

/// How many reoptimization passes to run after the greedy decomposition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReoptimizeMode {
    /// Exactly one pass.
    #[default]
    SinglePass,
    /// Repeat until a pass makes no improvement.
    FixedPoint,
}

impl FromStr for ReoptimizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single-pass" | "single_pass" | "once" => Ok(Self::SinglePass),
            "fixed-point" | "fixed_point" => Ok(Self::FixedPoint),
            other => Err(format!(
                "unknown reoptimize mode '{other}' (expected 'single-pass' or 'fixed-point')"
            )),
        }
    }
}

impl fmt::Display for ReoptimizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SinglePass => f.write_str("single-pass"),
            Self::FixedPoint => f.write_str("fixed-point"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FulfillmentCalculator {
    mode: ReoptimizeMode,
}

impl FulfillmentCalculator {
    pub fn new(mode: ReoptimizeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ReoptimizeMode {
        self.mode
    }

    /// Computes the plan for `order_quantity` against `sizes` (any order).
    ///
    /// The returned lines have distinct sizes in strictly descending order:
    /// any duplicate smallest-size line left by the remainder rule is merged
    /// into its neighbour after reoptimization.
    pub fn compute_plan(&self, sizes: &[u32], order_quantity: i64) -> Result<FulfillmentPlan, FulfillmentError> {
        let order_quantity =
            u64::try_from(order_quantity).map_err(|_| FulfillmentError::InvalidOrder(order_quantity))?;
        let sizes_desc = sorted_snapshot(sizes)?;

        let initial = decompose(&sizes_desc, order_quantity)?;
        let plan = match self.mode {
            ReoptimizeMode::SinglePass => reoptimize(&initial, &sizes_desc)?,
            ReoptimizeMode::FixedPoint => reoptimize_to_fixed_point(&initial, &sizes_desc)?,
        };

        Ok(plan.consolidate())
    }
}

/// Single-pass calculation.
pub fn compute_plan(sizes: &[u32], order_quantity: i64) -> Result<FulfillmentPlan, FulfillmentError> {
    FulfillmentCalculator::default().compute_plan(sizes, order_quantity)
}

/// Local descending, de-duplicated copy of the catalog.
fn sorted_snapshot(sizes: &[u32]) -> Result<Vec<u32>, FulfillmentError> {
    if sizes.is_empty() {
        return Err(FulfillmentError::Configuration(
            "no pack sizes are configured".to_string(),
        ));
    }
    if sizes.contains(&0) {
        return Err(FulfillmentError::Configuration(
            "pack size must be positive".to_string(),
        ));
    }

    let mut sorted = sizes.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();
    Ok(sorted)
}
