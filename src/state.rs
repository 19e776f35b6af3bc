//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::MappingService;

/// State shared by every request handler.
///
/// Cheap to clone; the service is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
}

impl AppState {
    pub fn new(mapping_service: Arc<MappingService>) -> Self {
        Self { mapping_service }
    }
}
