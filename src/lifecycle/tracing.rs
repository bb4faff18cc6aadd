//! # Logging
//!
//! Compact, single-line output with inline span names and no module path.
//! Verbosity comes from `RUST_LOG`; without it the service logs at `info`,
//! which covers startup, one line per HTTP request from the trace layer, and
//! every create/update/delete.
//!
//! ```bash
//! RUST_LOG=debug cargo run                      # payloads and store internals
//! RUST_LOG=people_registry=debug,tower_http=info cargo run
//! ```
//!
//! At `debug` the store logs each operation with an `entity_type` field, so
//! output stays readable without targets:
//!
//! ```text
//! INFO request{method=POST uri=/people}:create_person: Person created id=1
//! DEBUG Create params=PersonCreate { name: "Alice", .. } entity_type="Person"
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, before anything logs.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
