//! Greedy largest-size-first decomposition of an order quantity.

use crate::fulfillment::models::{FulfillmentError, FulfillmentPlan, PackLine};

/// Fills `order_quantity` with as many of each size as fit, largest first.
///
/// `sizes_desc` must be sorted descending. Any remainder smaller than every
/// visited size is covered by one extra pack of the smallest size, so the plan
/// may ship more than ordered but never less. That extra line is appended even
/// when the scan already used the smallest size; reoptimization relies on the
/// resulting line count to detect collapsible overage.
pub fn decompose(sizes_desc: &[u32], order_quantity: u64) -> Result<FulfillmentPlan, FulfillmentError> {
    let Some(&smallest) = sizes_desc.last() else {
        return Err(FulfillmentError::Configuration(
            "no pack sizes are configured".to_string(),
        ));
    };

    let mut lines = Vec::new();
    let mut remaining = order_quantity;

    for &size in sizes_desc {
        if remaining == 0 {
            break;
        }
        let size_units = u64::from(size);
        if size_units == 0 {
            return Err(FulfillmentError::Configuration(
                "pack size must be positive".to_string(),
            ));
        }
        if remaining >= size_units {
            lines.push(PackLine::new(size, remaining / size_units));
            remaining %= size_units;
        }
    }

    if remaining > 0 {
        lines.push(PackLine::new(smallest, 1));
    }

    Ok(FulfillmentPlan::new(lines))
}
