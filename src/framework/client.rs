//! # Generic Client
//!
//! The sending half of a store actor.

use crate::framework::entity::StoredEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{Page, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe, cloneable handle to a `ResourceActor<T>`.
///
/// Each call sends a [`ResourceRequest`] over an mpsc channel and awaits the
/// reply on a oneshot. Cloning only clones the sender.
pub struct ResourceClient<T: StoredEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: StoredEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoredEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self, filter: T::Filter, page: Page) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List {
            filter,
            page,
            respond_to,
        })
        .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    /// Returns `true` when a record was removed, `false` when none existed.
    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }
}
