//! Pure data structures: the stored [`Person`] record and its DTOs.

pub mod person;

pub use person::*;
