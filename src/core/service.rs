use crate::core::{Destination, DestinationRepository};
use crate::utils::error::Result;

pub struct DestinationService<R: DestinationRepository> {
    repository: R,
}

fn log_outcome<T>(operation: &str, result: &Result<T>) {
    match result {
        Err(e) if e.is_client_error() => tracing::warn!("{} rejected: {:?}", operation, e),
        Err(e) => tracing::error!("{} failed: {}", operation, e),
        Ok(_) => {}
    }
}

impl<R: DestinationRepository> DestinationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn list(&self) -> Result<Vec<Destination>> {
        let records = self.repository.list().await?;
        tracing::debug!("Listing {} destinations", records.len());
        Ok(records)
    }

    pub async fn get(&self, id: i64) -> Result<Destination> {
        tracing::debug!("Fetching destination {}", id);
        let result = self.repository.get(id).await;
        log_outcome("get", &result);
        result
    }

    pub async fn create(&self, destination: Destination) -> Result<Destination> {
        let id = destination.id;
        let result = self.repository.create(destination).await;
        log_outcome("create", &result);
        if result.is_ok() {
            tracing::info!("Created destination {}", id);
        }
        result
    }

    pub async fn update(&self, id: i64, destination: Destination) -> Result<Destination> {
        if destination.id != id {
            tracing::debug!(
                "Update of destination {} carries body id {}; storing body id",
                id,
                destination.id
            );
        }

        let result = self.repository.update(id, destination).await;
        log_outcome("update", &result);
        if let Ok(updated) = &result {
            tracing::info!("Updated destination {} (now {})", id, updated.id);
        }
        result
    }

    pub async fn delete(&self, id: i64) -> Result<Destination> {
        let result = self.repository.delete(id).await;
        log_outcome("delete", &result);
        if result.is_ok() {
            tracing::info!("Deleted destination {}", id);
        }
        result
    }
}

impl<R: DestinationRepository + Default> Default for DestinationService<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}
