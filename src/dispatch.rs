//! The fail-soft dispatch boundary.
//!
//! Dispatch is the one place in the system where a request either becomes a
//! response body or a fault, and [`run`] is the single recovery boundary
//! around it: faults are not re-thrown, logged-and-dropped, or retried, they
//! become the `Exception => <message>` diagnostic on the same channel a
//! successful body would have used. The caller always receives output.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppError;
use crate::registry::{ModuleKind, ModuleRegistry};
use crate::services::Services;

/// The slice of an incoming request the dispatcher sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Request path relative to the base URI, without a leading slash.
    pub path: String,
}

impl RequestContext {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            path: path.trim_start_matches('/').to_string(),
        }
    }

    /// Logical controller name for this request; the empty path maps to
    /// `index`.
    pub fn controller_name(&self) -> &str {
        match self.path.split('/').next() {
            None | Some("") => "index",
            Some(first) => first,
        }
    }
}

/// Routing, handler invocation and view rendering, behind one entry point.
///
/// # Implementations
///
/// - [`CmsDispatcher`] - the production collaborator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Handles one request, returning the response body.
    ///
    /// # Errors
    ///
    /// Any [`AppError`] is a dispatch fault; callers go through [`run`],
    /// which folds faults into the diagnostic output.
    async fn dispatch(&self, request: RequestContext) -> Result<String, AppError>;
}

/// Drives one request through the dispatcher and produces the observable
/// output.
///
/// `Ok(body)` passes through byte-for-byte; a fault becomes exactly
/// `Exception => <message>`. This function never fails.
pub async fn run(dispatcher: &dyn Dispatcher, request: RequestContext) -> String {
    match dispatcher.dispatch(request).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("dispatch fault: {e}");
            format!("Exception => {e}")
        }
    }
}

/// Production dispatcher: resolves the controller unit through the module
/// registry, then renders the index view through the service container.
pub struct CmsDispatcher {
    registry: Arc<ModuleRegistry>,
    services: Arc<Services>,
    site_title: String,
}

impl CmsDispatcher {
    pub fn new(registry: Arc<ModuleRegistry>, services: Arc<Services>) -> Self {
        Self {
            registry,
            services,
            site_title: "Ilya CMS".to_string(),
        }
    }
}

#[async_trait]
impl Dispatcher for CmsDispatcher {
    async fn dispatch(&self, request: RequestContext) -> Result<String, AppError> {
        let controller = request.controller_name();
        self.registry.locate(ModuleKind::Controllers, controller)?;

        let home_url = self.services.url().url_for("");
        self.services.view().render_index(&self.site_title, &home_url)
    }
}
