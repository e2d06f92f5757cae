use crate::domain::model::Destination;
use crate::domain::ports::DestinationRepository;
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local destination store.
///
/// Records live in a `Vec` so that `list` reports insertion order. Lookups are
/// a linear scan; an update may rewrite a record's id in place, which rules out
/// keying an index on it.
#[derive(Debug, Default)]
pub struct InMemoryDestinationStore {
    records: RwLock<Vec<Destination>>,
}

impl InMemoryDestinationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn position_of(records: &[Destination], id: i64) -> Option<usize> {
    records.iter().position(|d| d.id == id)
}

#[async_trait]
impl DestinationRepository for InMemoryDestinationStore {
    async fn list(&self) -> Result<Vec<Destination>> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: i64) -> Result<Destination> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(ApiError::NotFound { id })
    }

    async fn create(&self, destination: Destination) -> Result<Destination> {
        let mut records = self.records.write().await;
        if position_of(&records, destination.id).is_some() {
            return Err(ApiError::Conflict { id: destination.id });
        }

        records.push(destination.clone());
        Ok(destination)
    }

    async fn update(&self, id: i64, destination: Destination) -> Result<Destination> {
        let mut records = self.records.write().await;
        let index = position_of(&records, id).ok_or(ApiError::NotFound { id })?;

        records[index] = destination.clone();
        Ok(destination)
    }

    async fn delete(&self, id: i64) -> Result<Destination> {
        let mut records = self.records.write().await;
        let index = position_of(&records, id).ok_or(ApiError::NotFound { id })?;

        Ok(records.remove(index))
    }
}
