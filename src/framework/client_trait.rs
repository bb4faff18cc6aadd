//! # StoreClient Trait
//!
//! Gives record-specific clients `get` and `delete` for free on top of a
//! generic [`ResourceClient`], translating framework errors into the record's
//! own error type.

use crate::framework::{FrameworkError, ResourceClient, StoredEntity};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit the standard read/delete calls.
#[async_trait]
pub trait StoreClient<T: StoredEntity>: Send + Sync {
    /// The record-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the record-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by id. Deleting an absent id succeeds.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        let removed = self.inner().delete(id).await.map_err(Self::map_error)?;
        if !removed {
            tracing::debug!("Nothing to delete");
        }
        Ok(())
    }
}
