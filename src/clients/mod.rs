//! Record-specific wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod person_client;

pub use person_client::*;
