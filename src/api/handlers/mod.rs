//! HTTP request handlers.
//!
//! [`dispatch_handler`] applies the path rules and forwards to the create,
//! resolve and redirect handlers, which can also be mounted on their own.

pub mod create;
pub mod dispatch;
pub mod health;
pub mod redirect;
pub mod resolve;

pub use create::create_mapping_handler;
pub use dispatch::dispatch_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use resolve::resolve_handler;
