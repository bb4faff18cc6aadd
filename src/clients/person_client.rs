//! # Person Client
//!
//! High-level API over a `ResourceClient<Person>`. Framework errors are folded
//! into [`PersonError`] so callers never see channel plumbing.

use crate::framework::{FrameworkError, Page, ResourceClient, StoreClient};
use crate::model::{Person, PersonCreate, PersonFilter, PersonId, PersonUpdate};
use crate::person_actor::PersonError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Person store.
#[derive(Clone)]
pub struct PersonClient {
    inner: ResourceClient<Person>,
}

impl PersonClient {
    pub fn new(inner: ResourceClient<Person>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreClient<Person> for PersonClient {
    type Error = PersonError;

    fn inner(&self) -> &ResourceClient<Person> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> PersonError {
        match e {
            FrameworkError::NotFound(id) => PersonError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<PersonError>() {
                Ok(person_error) => *person_error,
                Err(other) => PersonError::StorageError(other.to_string()),
            },
            other => PersonError::StorageError(other.to_string()),
        }
    }
}

impl PersonClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_person(&self, params: PersonCreate) -> Result<Person, PersonError> {
        debug!(?params, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Like [`StoreClient::get`], but an absent id is an error.
    #[instrument(skip(self))]
    pub async fn find_person(&self, id: PersonId) -> Result<Person, PersonError> {
        self.get(id)
            .await?
            .ok_or_else(|| PersonError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_people(
        &self,
        filter: PersonFilter,
        page: Page,
    ) -> Result<Vec<Person>, PersonError> {
        debug!("Sending request");
        self.inner.list(filter, page).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_person(
        &self,
        id: PersonId,
        update: PersonUpdate,
    ) -> Result<Person, PersonError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}
