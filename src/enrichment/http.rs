//! reqwest-backed [`DemographicsSource`] for agify.io, genderize.io and
//! nationalize.io (or anything that speaks the same JSON).

use crate::config::EnrichmentEndpoints;
use crate::enrichment::{DemographicsSource, EnrichmentError, Lookup};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct AgeGuess {
    #[serde(default)]
    age: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct GenderGuess {
    #[serde(default)]
    gender: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NationalityGuess {
    #[serde(default)]
    country: Vec<CountryGuess>,
}

#[derive(Debug, Deserialize)]
struct CountryGuess {
    country_id: String,
}

/// HTTP client for the three public lookup services.
///
/// Unauthenticated GETs with the name as the `name` query parameter; no
/// retries, and the transport's default timeouts.
#[derive(Debug, Clone)]
pub struct HttpDemographicsSource {
    http: Client,
    endpoints: EnrichmentEndpoints,
}

impl HttpDemographicsSource {
    pub fn new(endpoints: EnrichmentEndpoints) -> Self {
        Self::with_client(Client::new(), endpoints)
    }

    pub fn with_client(http: Client, endpoints: EnrichmentEndpoints) -> Self {
        Self { http, endpoints }
    }

    fn endpoint(&self, lookup: Lookup) -> &str {
        match lookup {
            Lookup::Age => &self.endpoints.agify,
            Lookup::Gender => &self.endpoints.genderize,
            Lookup::Nationality => &self.endpoints.nationalize,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        lookup: Lookup,
        name: &str,
    ) -> Result<T, EnrichmentError> {
        let url = self.endpoint(lookup);
        debug!(%lookup, url, "Sending lookup");

        let response = self
            .http
            .get(url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|source| EnrichmentError::Request { lookup, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Status { lookup, status });
        }

        response
            .json()
            .await
            .map_err(|source| EnrichmentError::Decode { lookup, source })
    }
}

#[async_trait]
impl DemographicsSource for HttpDemographicsSource {
    #[instrument(skip(self))]
    async fn age(&self, name: &str) -> Result<Option<i32>, EnrichmentError> {
        let guess: AgeGuess = self.fetch(Lookup::Age, name).await?;
        Ok(guess.age)
    }

    #[instrument(skip(self))]
    async fn gender(&self, name: &str) -> Result<Option<String>, EnrichmentError> {
        let guess: GenderGuess = self.fetch(Lookup::Gender, name).await?;
        Ok(guess.gender)
    }

    #[instrument(skip(self))]
    async fn nationalities(&self, name: &str) -> Result<Vec<String>, EnrichmentError> {
        let guess: NationalityGuess = self.fetch(Lookup::Nationality, name).await?;
        Ok(guess.country.into_iter().map(|c| c.country_id).collect())
    }
}
