//! # Generic Messages
//!
//! Requests exchanged between a [`ResourceClient`](crate::framework::ResourceClient)
//! and its [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::StoredEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Default page size when the caller gives none.
pub const DEFAULT_LIMIT: usize = 10;

/// A `limit`/`offset` window over a list result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Message sent to the actor to request an operation.
///
/// The variants map onto the store contract: **Create**, **Get**, **List**,
/// **Update**, **Delete**. Each one is typed by the associated types of
/// [`StoredEntity`], so a payload for one record type cannot reach another
/// record type's store.
///
/// `Delete` answers with whether a record was actually removed; a missing id
/// is not an error.
#[derive(Debug)]
pub enum ResourceRequest<T: StoredEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: T::Filter,
        page: Page,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
}
