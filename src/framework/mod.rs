//! Generic store framework.
//!
//! A record type implements [`StoredEntity`]; a [`ResourceActor`] owns the
//! records of that type in its own task; a cloneable [`ResourceClient`] talks
//! to it over a channel. [`StoreClient`] lets record-specific clients inherit
//! `get`/`delete`.
//!
//! # Testing
//!
//! See [`mock`] for a scripted stand-in for a running store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::StoreClient;
pub use entity::StoredEntity;
pub use error::FrameworkError;
pub use message::{Page, ResourceRequest, Response, DEFAULT_LIMIT};
