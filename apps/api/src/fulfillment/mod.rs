// Fulfillment core: greedy decomposition of an order into packs, followed by
// a reoptimization pass over the shipped total.
// Pure functions only; no logging, no I/O, no shared state.

pub mod calculator;
pub mod decompose;
pub mod handlers;
pub mod models;
pub mod reoptimize;

pub use calculator::{compute_plan, FulfillmentCalculator, ReoptimizeMode};
pub use decompose::decompose;
pub use models::{FulfillmentError, FulfillmentPlan, PackLine};
pub use reoptimize::{reoptimize, reoptimize_to_fixed_point};
