//! # HTTP Layer
//!
//! axum routes for the `/people` resource plus a health probe.
//!
//! - [`router`]: [`build_router`] wires handlers, tracing middleware and state
//! - [`handlers`]: one async fn per route
//! - [`error`]: [`ApiError`] and its JSON rendering

pub mod error;
pub mod handlers;
pub mod router;

pub use error::*;
pub use router::*;

use crate::clients::PersonClient;
use crate::enrichment::Enricher;

/// State shared by every handler. Both halves are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub people: PersonClient,
    pub enricher: Enricher,
}

impl AppState {
    pub fn new(people: PersonClient, enricher: Enricher) -> Self {
        Self { people, enricher }
    }
}
