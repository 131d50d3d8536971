use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Opportunity, Team};

/// Errors that can occur with repository operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),
}

/// A record that can be kept in a store
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

impl Record for Team {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Record for Opportunity {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Repository interface for marketplace records
///
/// The scoring engine never touches a store; handlers read records out of
/// one and pass them to the matcher.
#[async_trait]
pub trait Store<T: Record>: Send + Sync {
    async fn get(&self, id: &str) -> Result<T, StoreError>;

    /// All records, in insertion order
    async fn list(&self) -> Vec<T>;

    /// Insert a record, assigning an id when it has none
    async fn add(&self, record: T) -> Result<T, StoreError>;

    /// Replace a record; the stored id is kept
    async fn update(&self, id: &str, record: T) -> Result<T, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

pub type TeamStore = dyn Store<Team>;
pub type OpportunityStore = dyn Store<Opportunity>;

/// In-memory store, suitable for demos and tests
pub struct InMemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Build a store pre-populated with `records`
    pub fn with_records(records: Vec<T>) -> Self {
        let records = records
            .into_iter()
            .map(|mut r| {
                if r.id().is_empty() {
                    r.set_id(uuid::Uuid::new_v4().to_string());
                }
                r
            })
            .collect();

        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Store<T> for InMemoryStore<T> {
    async fn get(&self, id: &str) -> Result<T, StoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    async fn add(&self, mut record: T) -> Result<T, StoreError> {
        if record.id().is_empty() {
            record.set_id(uuid::Uuid::new_v4().to_string());
        }

        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::AlreadyExists(record.id().to_string()));
        }

        records.push(record.clone());
        tracing::debug!("Stored record {}", record.id());
        Ok(record)
    }

    async fn update(&self, id: &str, mut record: T) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        record.set_id(id.to_string());
        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);

        if records.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
