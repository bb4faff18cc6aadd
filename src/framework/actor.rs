//! # Generic Store Actor
//!
//! `ResourceActor<T>` owns the records of one type and serves every
//! [`ResourceRequest`] for them, one at a time, from its own Tokio task.

use crate::framework::client::ResourceClient;
use crate::framework::entity::StoredEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The store half of the actor pair.
///
/// Requests are processed sequentially inside [`ResourceActor::run`], so the
/// `store` needs no lock: the task has exclusive ownership of it.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new(buffer)` returns the actor and its client.
/// 2. **Run**: spawn `actor.run()`; clone the client wherever it is needed.
///
/// # Operations
///
/// * **Create**: take the next id from the `u32` counter, build the record
///   with `from_create_params`, insert, reply with the stored record. Once the
///   counter is spent every create fails with `IdsExhausted`.
/// * **Get**: reply with a clone of the record, or `None`.
/// * **List**: walk the store in id order, keep records that `matches` the
///   filter, skip `offset`, take `limit`.
/// * **Update**: run `on_update` on a scratch copy, commit only on success,
///   reply with the new state; `NotFound` if the id is unknown.
/// * **Delete**: remove; reply `false` if nothing was there.
pub struct ResourceActor<T: StoredEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    /// `None` once `u32::MAX` has been handed out.
    next_id: Option<u32>,
}

impl<T: StoredEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait for
    /// space when it is full.
    ///
    /// # Panics
    ///
    /// If `buffer_size` is zero or above `tokio::sync::Semaphore::MAX_PERMITS`.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: Some(1),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "Person" instead of "people_registry::model::person::Person"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(raw_id) = self.next_id else {
                        warn!(entity_type, "Id space exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    let id = T::Id::from(raw_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.next_id = raw_id.checked_add(1);
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List {
                    filter,
                    page,
                    respond_to,
                } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&filter))
                        .skip(page.offset)
                        .take(page.limit)
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, ?page, returned = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut draft = item.clone();
                    match draft.on_update(update) {
                        Ok(()) => {
                            *item = draft.clone();
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(draft));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let removed = self.store.remove(&id).is_some();
                    if removed {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                    } else {
                        debug!(entity_type, %id, "Delete of absent id");
                    }
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
