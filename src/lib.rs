//! # Ilya CMS
//!
//! The front controller of Ilya CMS: a single composition root that wires
//! configuration, registers code-discovery locations, and drives one request
//! through to a response.
//!
//! ## Architecture
//!
//! - **Paths** ([`paths`]) - Base and application path constants, resolved once
//! - **Registry** ([`registry`]) - Explicit mapping of logical layers
//!   (controllers, models) to their source directories
//! - **Services** ([`services`]) - Typed lazy container holding the view
//!   renderer and the URL service
//! - **Dispatch** ([`dispatch`]) - The fail-soft boundary: every request
//!   yields output, either the rendered body or `Exception => <message>`
//! - **HTTP** ([`routes`], [`handlers`], [`server`]) - Axum wiring under the
//!   configured base URI
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the service at an installation containing app/{controllers,models,views}
//! export APP_ROOT="/srv/ilya-cms"
//! export BASE_URI="/ilya-cms/"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod paths;
pub mod registry;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
pub mod url;
pub mod view;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::dispatch::{CmsDispatcher, Dispatcher, RequestContext};
    pub use crate::error::AppError;
    pub use crate::paths::AppPaths;
    pub use crate::registry::{ModuleKind, ModuleRegistry};
    pub use crate::services::Services;
    pub use crate::state::AppState;
    pub use crate::url::UrlService;
    pub use crate::view::ViewRenderer;
}
