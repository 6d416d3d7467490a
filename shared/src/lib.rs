pub mod models;
pub mod store;
pub mod validation;

pub use models::*;
pub use store::{InMemoryItemStore, ItemStore, StoreError};
