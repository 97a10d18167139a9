//! Typed service container.
//!
//! The container is a struct with one typed slot per service rather than a
//! string-keyed lookup table; [`Lazy`] gives each slot demand-driven,
//! at-most-once construction.

use std::sync::OnceLock;

use crate::paths::AppPaths;
use crate::url::UrlService;
use crate::view::ViewRenderer;

/// A memoized zero-argument factory.
///
/// The factory runs at most once per `Lazy`, on the first [`Lazy::get`];
/// later calls return the already-built value. Safe to share across
/// threads.
pub struct Lazy<T> {
    cell: OnceLock<T>,
    factory: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> Lazy<T> {
    pub fn new(factory: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            cell: OnceLock::new(),
            factory: Box::new(factory),
        }
    }

    /// Returns the service, building it on first demand.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| (self.factory)())
    }

    /// Whether the factory has already run.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// The service container of the composition root: a view renderer and a URL
/// service, each behind its own lazy slot.
pub struct Services {
    view: Lazy<ViewRenderer>,
    url: Lazy<UrlService>,
}

impl Services {
    /// Wires the default factories: the view renderer over the installation's
    /// views directory and the URL service over the configured base URI.
    ///
    /// Nothing is constructed here; each service is built on first access.
    pub fn new(paths: &AppPaths, base_uri: &str) -> Self {
        let views_dir = paths.views_dir();
        let base_uri = base_uri.to_string();

        Self {
            view: Lazy::new(move || ViewRenderer::new(views_dir.clone())),
            url: Lazy::new(move || UrlService::new(base_uri.clone())),
        }
    }

    /// Container with caller-supplied factories.
    pub fn with_factories(
        view: impl Fn() -> ViewRenderer + Send + Sync + 'static,
        url: impl Fn() -> UrlService + Send + Sync + 'static,
    ) -> Self {
        Self {
            view: Lazy::new(view),
            url: Lazy::new(url),
        }
    }

    pub fn view(&self) -> &ViewRenderer {
        self.view.get()
    }

    pub fn url(&self) -> &UrlService {
        self.url.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn factory_runs_at_most_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let lazy = Lazy::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            42usize
        });

        assert!(!lazy.is_initialized());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(*lazy.get(), 42);
        assert_eq!(*lazy.get(), 42);
        assert_eq!(*lazy.get(), 42);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(lazy.is_initialized());
    }

    #[test]
    fn container_services_are_built_once_each() {
        let view_calls = Arc::new(AtomicUsize::new(0));
        let url_calls = Arc::new(AtomicUsize::new(0));

        let vc = view_calls.clone();
        let uc = url_calls.clone();
        let services = Services::with_factories(
            move || {
                vc.fetch_add(1, Ordering::SeqCst);
                ViewRenderer::new("/tmp/views")
            },
            move || {
                uc.fetch_add(1, Ordering::SeqCst);
                UrlService::new("/ilya-cms/")
            },
        );

        // Demand-driven: nothing built until asked for.
        assert_eq!(view_calls.load(Ordering::SeqCst), 0);
        assert_eq!(url_calls.load(Ordering::SeqCst), 0);

        for _ in 0..3 {
            services.view();
            services.url();
        }

        assert_eq!(view_calls.load(Ordering::SeqCst), 1);
        assert_eq!(url_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn asking_for_one_service_does_not_build_the_other() {
        let url_calls = Arc::new(AtomicUsize::new(0));
        let uc = url_calls.clone();

        let services = Services::with_factories(
            || ViewRenderer::new("/tmp/views"),
            move || {
                uc.fetch_add(1, Ordering::SeqCst);
                UrlService::new("/ilya-cms/")
            },
        );

        services.view();
        assert_eq!(url_calls.load(Ordering::SeqCst), 0);
    }
}
