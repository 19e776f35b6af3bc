//! Core domain entities.
//!
//! - [`Mapping`] - A short id pointing at a target URL for a limited time

pub mod mapping;

pub use mapping::{Mapping, MappingStatus};
