#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use ilya_cms::prelude::*;
use ilya_cms::routes::app_router;

/// Creates a disposable installation tree:
/// `<tmp>/<name>/app/{controllers,models,views}` plus `public/`, with an
/// `index.rs` controller unit in place.
pub fn create_install(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("ilya-cms-test-{name}-{}", std::process::id()));
    fs::create_dir_all(root.join("app/controllers")).unwrap();
    fs::create_dir_all(root.join("app/models")).unwrap();
    fs::create_dir_all(root.join("app/views")).unwrap();
    fs::create_dir_all(root.join("public")).unwrap();
    fs::write(root.join("app/controllers/index.rs"), b"").unwrap();
    root
}

/// Full production wiring over a test installation.
pub fn create_test_state(root: &Path) -> AppState {
    let paths = Arc::new(AppPaths::resolve(root).unwrap());

    let mut registry = ModuleRegistry::new();
    registry
        .register(ModuleKind::Controllers, paths.controllers_dir())
        .register(ModuleKind::Models, paths.models_dir());
    let registry = Arc::new(registry);

    let services = Arc::new(Services::new(&paths, "/ilya-cms/"));
    let dispatcher: Arc<dyn Dispatcher> =
        Arc::new(CmsDispatcher::new(registry.clone(), services.clone()));

    AppState {
        paths,
        registry,
        services,
        dispatcher,
    }
}

/// Same wiring but with a caller-supplied dispatch collaborator.
pub fn state_with_dispatcher(root: &Path, dispatcher: Arc<dyn Dispatcher>) -> AppState {
    let mut state = create_test_state(root);
    state.dispatcher = dispatcher;
    state
}

/// Test server over the production router, mounted under `/ilya-cms/`.
pub fn test_server(state: AppState) -> TestServer {
    let app = app_router(state, "/ilya-cms/");
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// Dispatch collaborator that always succeeds with a fixed body.
pub struct OkDispatcher(pub String);

#[async_trait]
impl Dispatcher for OkDispatcher {
    async fn dispatch(&self, _request: RequestContext) -> Result<String, AppError> {
        Ok(self.0.clone())
    }
}

/// Dispatch collaborator that always faults with a fixed message.
pub struct FaultDispatcher(pub String);

#[async_trait]
impl Dispatcher for FaultDispatcher {
    async fn dispatch(&self, _request: RequestContext) -> Result<String, AppError> {
        Err(AppError::internal(self.0.clone()))
    }
}
