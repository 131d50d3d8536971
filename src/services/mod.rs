// Service exports
pub mod store;

pub use store::{InMemoryStore, OpportunityStore, Record, Store, StoreError, TeamStore};
