//! # StoredEntity Trait
//!
//! The contract every record type must satisfy to be kept by the generic
//! [`ResourceActor`](crate::framework::ResourceActor). Associated types pin
//! down the id, the create/update DTOs, the list filter and the error type,
//! so a `Person` store can only ever receive `PersonCreate` / `PersonUpdate`
//! / `PersonFilter` payloads.

use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// Every method runs inside the actor's task, so implementations get
/// exclusive access to the record and need no locking.
pub trait StoredEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier. Ids are minted from a `u32` counter, and the
    /// store iterates in `Ord` order, which is the "storage-native" order of
    /// list results.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// Criteria for the `List` operation.
    type Filter: Send + Sync + Debug;

    /// The error type for this record.
    ///
    /// One enum per record type, shared by every operation, keeps clients to
    /// a single error to match on.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the assigned id and the payload.
    /// An error aborts the create; nothing is stored and the id is not used.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this record satisfies a list filter.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Apply an update in place. Runs on a scratch copy; an error leaves the
    /// stored record untouched.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
