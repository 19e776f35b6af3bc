//! Helpers shared across layers.
//!
//! - [`id_generator`] - Random short id generation
//! - [`target_url`] - Redirect target validation
//! - [`http_date`] - Expiry rendering for headers and JSON

pub mod http_date;
pub mod id_generator;
pub mod target_url;
