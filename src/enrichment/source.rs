use crate::enrichment::EnrichmentError;
use async_trait::async_trait;

/// Per-name demographic guesses from an external service.
///
/// Each method is one lookup. `Ok(None)` / an empty list mean the service
/// answered but had no guess for the name; that is not an error.
#[async_trait]
pub trait DemographicsSource: Send + Sync {
    async fn age(&self, name: &str) -> Result<Option<i32>, EnrichmentError>;

    async fn gender(&self, name: &str) -> Result<Option<String>, EnrichmentError>;

    /// Candidate country codes, most likely first.
    async fn nationalities(&self, name: &str) -> Result<Vec<String>, EnrichmentError>;
}
