//! HTTP server initialization and runtime setup.
//!
//! The composition root: resolves paths, builds the module registry and the
//! service container, wires the dispatcher, then hands the router to Axum.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::config::Config;
use crate::dispatch::{CmsDispatcher, Dispatcher};
use crate::paths::AppPaths;
use crate::registry::{ModuleKind, ModuleRegistry};
use crate::routes::app_router;
use crate::services::Services;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Path constants (base and app directories)
/// - Module registry (controllers, models)
/// - Service container (view renderer, URL service; both lazy)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The app root does not exist
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let paths = Arc::new(AppPaths::resolve(&config.app_root)?);
    tracing::info!("Base path: {}", paths.base().display());
    tracing::info!("App path: {}", paths.app().display());

    let mut registry = ModuleRegistry::new();
    registry
        .register(ModuleKind::Controllers, paths.controllers_dir())
        .register(ModuleKind::Models, paths.models_dir());
    let registry = Arc::new(registry);
    tracing::info!("Module registry ready (controllers, models)");

    let services = Arc::new(Services::new(&paths, &config.base_uri));

    let dispatcher: Arc<dyn Dispatcher> =
        Arc::new(CmsDispatcher::new(registry.clone(), services.clone()));

    let state = AppState {
        paths,
        registry,
        services,
        dispatcher,
    };

    let app = app_router(state, &config.base_uri);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}{}", config.base_uri);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
