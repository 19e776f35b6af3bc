//! Domain layer containing business entities and background work.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`sweep_worker`] - Recurring purge of expired mappings
//!
//! # Mapping Lifecycle
//!
//! 1. `Active` from creation until `created_at + ttl_seconds * 1000`
//! 2. `Expired` from that instant on; still stored, never served
//! 3. Purged when a read observes it expired, or by the next sweep

pub mod entities;
pub mod repositories;
pub mod sweep_worker;
