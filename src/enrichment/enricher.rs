use crate::enrichment::{DemographicsSource, EnrichmentError};
use crate::model::{Demographics, UNKNOWN_NATIONALITY};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Turns a first name into [`Demographics`].
///
/// Runs the age, gender and nationality lookups one after another and stops
/// at the first failure; later lookups are not attempted. A missing age or
/// gender becomes `0` / `""`, an empty country list becomes
/// [`UNKNOWN_NATIONALITY`], and otherwise the highest-ranked country wins.
#[derive(Clone)]
pub struct Enricher {
    source: Arc<dyn DemographicsSource>,
}

impl Enricher {
    pub fn new(source: Arc<dyn DemographicsSource>) -> Self {
        Self { source }
    }

    #[instrument(skip(self))]
    pub async fn enrich(&self, name: &str) -> Result<Demographics, EnrichmentError> {
        let result = self.lookup_all(name).await;
        if let Err(e) = &result {
            warn!(lookup = %e.lookup(), error = %e, "Enrichment failed");
        }
        result
    }

    async fn lookup_all(&self, name: &str) -> Result<Demographics, EnrichmentError> {
        let age = self.source.age(name).await?.unwrap_or_default();
        let gender = self.source.gender(name).await?.unwrap_or_default();
        let nationality = self
            .source
            .nationalities(name)
            .await?
            .into_iter()
            .next()
            .unwrap_or_else(|| UNKNOWN_NATIONALITY.to_string());

        debug!(age, %gender, %nationality, "Enriched");
        Ok(Demographics {
            age,
            gender,
            nationality,
        })
    }
}
