//! Corrective pass that collapses decomposition overage into fewer lines.
//!
//! The shipped total of a plan (not the ordered quantity) is decomposed again.
//! The candidate replaces the plan only when it has strictly fewer lines. It
//! may ship more units than the plan it replaces.

use crate::fulfillment::decompose::decompose;
use crate::fulfillment::models::{FulfillmentError, FulfillmentPlan};

/// Single reoptimization pass. Returns `plan` unchanged unless the candidate
/// has fewer lines.
pub fn reoptimize(plan: &FulfillmentPlan, sizes_desc: &[u32]) -> Result<FulfillmentPlan, FulfillmentError> {
    let candidate = decompose(sizes_desc, plan.shipped_total())?;

    if candidate.line_count() < plan.line_count() {
        Ok(candidate)
    } else {
        Ok(plan.clone())
    }
}

/// Repeats [`reoptimize`] until a pass leaves the plan unchanged.
///
/// Each accepted pass removes at least one line, so this runs at most
/// `plan.line_count()` passes. A candidate built from a remainder can itself
/// carry overage that a later pass collapses.
pub fn reoptimize_to_fixed_point(
    plan: &FulfillmentPlan,
    sizes_desc: &[u32],
) -> Result<FulfillmentPlan, FulfillmentError> {
    let mut current = plan.clone();
    loop {
        let next = reoptimize(&current, sizes_desc)?;
        if next.line_count() >= current.line_count() {
            return Ok(current);
        }
        current = next;
    }
}
