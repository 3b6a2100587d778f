//! In-memory item catalog

mod store;

pub use store::ItemCatalog;
