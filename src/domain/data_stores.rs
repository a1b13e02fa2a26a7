use color_eyre::eyre::Report;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use super::{Entity, RecordId};

/// Ordered CRUD access to one table.
///
/// Every mutation answers with the complete, freshly read collection so that
/// the caller observes its own write without issuing a second fetch.
#[async_trait::async_trait]
pub trait RecordStore<E: Entity> {
    /// All rows ordered ascending by `E::SORT_KEY`.
    async fn list(&self) -> Result<Vec<E>, RecordStoreError>;
    async fn insert(
        &mut self,
        fields: &E::Fields,
    ) -> Result<Vec<E>, RecordStoreError>;
    async fn update(
        &mut self,
        id: RecordId,
        fields: &E::Fields,
    ) -> Result<Vec<E>, RecordStoreError>;
    async fn delete(&mut self, id: RecordId)
        -> Result<Vec<E>, RecordStoreError>;
}

pub type RecordStoreType<E> = Arc<RwLock<dyn RecordStore<E> + Send + Sync>>;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for RecordStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::RecordNotFound(a), Self::RecordNotFound(b)) => a == b,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}
