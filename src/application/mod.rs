//! Application layer services implementing business logic.
//!
//! Services consume the repository traits defined in [`crate::domain`] and
//! expose the operations HTTP handlers and the sweep worker call.
//!
//! - [`services::MappingService`] - Mapping creation, resolution and sweeping

pub mod services;
