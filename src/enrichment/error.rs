//! Error types for demographic lookups.

use std::fmt;
use thiserror::Error;

/// Which of the three lookups produced a value or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    Age,
    Gender,
    Nationality,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Lookup::Age => "age",
            Lookup::Gender => "gender",
            Lookup::Nationality => "nationality",
        };
        f.write_str(name)
    }
}

/// A lookup that could not produce a usable answer.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// The request never got a response (DNS, connect, TLS, ...).
    #[error("{lookup} lookup request failed: {source}")]
    Request {
        lookup: Lookup,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{lookup} lookup returned status {status}")]
    Status {
        lookup: Lookup,
        status: reqwest::StatusCode,
    },

    /// The body was not the expected JSON shape.
    #[error("{lookup} lookup returned a malformed body: {source}")]
    Decode {
        lookup: Lookup,
        #[source]
        source: reqwest::Error,
    },
}

impl EnrichmentError {
    pub fn lookup(&self) -> Lookup {
        match self {
            EnrichmentError::Request { lookup, .. }
            | EnrichmentError::Status { lookup, .. }
            | EnrichmentError::Decode { lookup, .. } => *lookup,
        }
    }
}
