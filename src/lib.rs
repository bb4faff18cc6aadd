//! # People Registry
//!
//! An HTTP service that keeps person records and fills in demographic
//! guesses for them. On creation the first name is sent to three public
//! lookup services (agify.io, genderize.io, nationalize.io) and the answers
//! become the record's `age`, `gender` and `nationality`.
//!
//! ## Module Tour
//!
//! ### 1. Store engine ([`framework`])
//! A generic [`ResourceActor`](framework::ResourceActor) owns the records of
//! one type in its own Tokio task and serves create/get/list/update/delete
//! over a channel. The record type plugs in through
//! [`StoredEntity`](framework::StoredEntity).
//!
//! ### 2. Records ([`model`], [`person_actor`], [`clients`])
//! [`Person`](model::Person) and its payloads, the `StoredEntity` impl for it,
//! and [`PersonClient`](clients::PersonClient), the typed handle the HTTP
//! layer talks to.
//!
//! ### 3. Enrichment ([`enrichment`])
//! [`Enricher`](enrichment::Enricher) runs the three lookups in sequence
//! through a [`DemographicsSource`](enrichment::DemographicsSource); any
//! failure aborts the create.
//!
//! ### 4. HTTP ([`api`])
//! axum router, handlers and the JSON error shape.
//!
//! ### 5. Process ([`config`], [`lifecycle`])
//! Environment configuration, the store's start/stop, and logging setup.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl -X POST localhost:8081/people -H 'content-type: application/json' \
//!      -d '{"name":"Alice","surname":"Smith"}'
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod enrichment;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod person_actor;
