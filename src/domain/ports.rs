use crate::domain::model::Destination;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Storage for destination records.
///
/// Implementations keep records in a stable order: insertion order, with
/// updates replacing a record at its current position and deletes closing
/// the gap.
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Destination>>;

    /// First record whose id matches, or `NotFound`.
    async fn get(&self, id: i64) -> Result<Destination>;

    /// Appends the record, or fails with `Conflict` when its id is taken.
    async fn create(&self, destination: Destination) -> Result<Destination>;

    /// Replaces the whole record found under `id`. The body's own id is stored as given.
    async fn update(&self, id: i64, destination: Destination) -> Result<Destination>;

    /// Removes the record under `id` and hands it back.
    async fn delete(&self, id: i64) -> Result<Destination>;
}
