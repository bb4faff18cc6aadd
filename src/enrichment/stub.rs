//! In-memory [`DemographicsSource`] for tests and offline runs.
//!
//! Answers from fixed tables, records the order in which lookups were made,
//! and can be told to fail a given lookup with a `502` status.

use crate::enrichment::{DemographicsSource, EnrichmentError, Lookup};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct Entry {
    age: i32,
    gender: String,
    countries: Vec<String>,
}

/// Table-driven stand-in for the three lookup services.
#[derive(Debug, Clone, Default)]
pub struct StubDemographics {
    entries: HashMap<String, Entry>,
    fail_at: Option<Lookup>,
    calls: Arc<Mutex<Vec<Lookup>>>,
}

impl StubDemographics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the answers for `name`. Names not registered get no guess.
    pub fn with_name(mut self, name: &str, age: i32, gender: &str, countries: &[&str]) -> Self {
        self.entries.insert(
            name.to_string(),
            Entry {
                age,
                gender: gender.to_string(),
                countries: countries.iter().map(|c| c.to_string()).collect(),
            },
        );
        self
    }

    /// Makes `lookup` fail for every name.
    pub fn failing_at(mut self, lookup: Lookup) -> Self {
        self.fail_at = Some(lookup);
        self
    }

    /// Shared log of the lookups made so far, in call order.
    pub fn calls(&self) -> Arc<Mutex<Vec<Lookup>>> {
        self.calls.clone()
    }

    fn record(&self, lookup: Lookup) -> Result<(), EnrichmentError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(lookup);
        }
        if self.fail_at == Some(lookup) {
            return Err(EnrichmentError::Status {
                lookup,
                status: reqwest::StatusCode::BAD_GATEWAY,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DemographicsSource for StubDemographics {
    async fn age(&self, name: &str) -> Result<Option<i32>, EnrichmentError> {
        self.record(Lookup::Age)?;
        Ok(self.entries.get(name).map(|e| e.age))
    }

    async fn gender(&self, name: &str) -> Result<Option<String>, EnrichmentError> {
        self.record(Lookup::Gender)?;
        Ok(self.entries.get(name).map(|e| e.gender.clone()))
    }

    async fn nationalities(&self, name: &str) -> Result<Vec<String>, EnrichmentError> {
        self.record(Lookup::Nationality)?;
        Ok(self
            .entries
            .get(name)
            .map(|e| e.countries.clone())
            .unwrap_or_default())
    }
}
