//! # Enrichment
//!
//! Derives age, gender and nationality guesses for a first name from three
//! external lookup services.
//!
//! - [`DemographicsSource`]: one method per lookup; the seam between the
//!   orchestration and the transport.
//! - [`HttpDemographicsSource`]: the reqwest implementation.
//! - [`Enricher`]: runs the lookups in sequence, fails fast, and folds the
//!   answers into [`Demographics`](crate::model::Demographics).
//! - [`stub::StubDemographics`]: fixed answers for tests.

pub mod enricher;
pub mod error;
pub mod http;
pub mod source;
pub mod stub;

pub use enricher::Enricher;
pub use error::{EnrichmentError, Lookup};
pub use http::HttpDemographicsSource;
pub use source::DemographicsSource;
