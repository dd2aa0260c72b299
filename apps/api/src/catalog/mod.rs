// Pack-size catalog: the validated set of shippable sizes, its durable store,
// and the synchronized service that hands snapshots to the calculator.

pub mod handlers;
pub mod model;
pub mod service;
pub mod store;

pub use model::{CatalogError, PackSizeCatalog};
pub use service::CatalogService;
pub use store::{CatalogStore, JsonFileStore, MemoryStore};
