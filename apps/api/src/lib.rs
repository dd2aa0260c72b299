pub mod catalog;
pub mod config;
pub mod errors;
pub mod fulfillment;
pub mod routes;
pub mod state;
