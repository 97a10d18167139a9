use std::sync::Arc;

use crate::dispatch::Dispatcher;
use crate::paths::AppPaths;
use crate::registry::ModuleRegistry;
use crate::services::Services;

/// Shared application state injected into all handlers.
///
/// Everything here is written once by the composition root and read-only
/// afterwards.
#[derive(Clone)]
pub struct AppState {
    pub paths: Arc<AppPaths>,
    pub registry: Arc<ModuleRegistry>,
    pub services: Arc<Services>,
    pub dispatcher: Arc<dyn Dispatcher>,
}
