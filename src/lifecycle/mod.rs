//! Startup and shutdown of the running service.
//!
//! - [`PeopleSystem`]: spawns the person store and hands out its client
//! - [`setup_tracing`]: installs the global `tracing` subscriber

pub mod people_system;
pub mod tracing;

pub use people_system::*;
pub use self::tracing::*;
