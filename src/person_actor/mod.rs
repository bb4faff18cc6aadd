//! # Person Store
//!
//! The person store is a [`ResourceActor<Person>`](crate::framework::ResourceActor):
//! one task owns every record and serves create/get/list/update/delete in
//! arrival order. Ids are assigned sequentially from 1.
//!
//! - [`entity`]: [`StoredEntity`](crate::framework::StoredEntity) implementation for [`Person`]
//! - [`error`]: [`PersonError`]
//! - [`new()`]: builds the actor and its [`PersonClient`]
//!
//! ```rust,ignore
//! let (actor, people) = person_actor::new(32);
//! tokio::spawn(actor.run());
//! let stored = people.create_person(payload).await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PersonClient;
use crate::framework::ResourceActor;
use crate::model::Person;

/// Creates a new Person store actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Person>, PersonClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, PersonClient::new(generic_client))
}
