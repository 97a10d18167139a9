//! Filesystem layout of an installation.
//!
//! Two path constants anchor an installation — the root and the `app/`
//! directory beneath it — and every code and view location derives from
//! them. [`AppPaths`] is that pair plus the derived directories, resolved
//! once at startup and immutable afterwards.

use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Absolute paths of an installation, resolved once at startup.
///
/// Invariant: `app` is always a direct subdirectory of `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    base: PathBuf,
    app: PathBuf,
}

impl AppPaths {
    /// Resolves the installation layout from a root directory.
    ///
    /// The root must exist (it is the install location); the subdirectories
    /// are only derived here and checked by their consumers on first use.
    /// Resolution is pure apart from canonicalization: the same root always
    /// yields the same paths.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the root does not exist or cannot be
    /// canonicalized.
    pub fn resolve(root: impl AsRef<Path>) -> Result<Self, AppError> {
        let root = root.as_ref();
        let base = root
            .canonicalize()
            .map_err(|e| AppError::io(format!("resolving app root '{}'", root.display()), e))?;
        let app = base.join("app");

        Ok(Self { base, app })
    }

    /// Installation root.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Application code directory, `<base>/app`.
    pub fn app(&self) -> &Path {
        &self.app
    }

    /// Request-handler sources, `<base>/app/controllers`.
    pub fn controllers_dir(&self) -> PathBuf {
        self.app.join("controllers")
    }

    /// Data-entity sources, `<base>/app/models`.
    pub fn models_dir(&self) -> PathBuf {
        self.app.join("models")
    }

    /// View templates, `<base>/app/views`.
    pub fn views_dir(&self) -> PathBuf {
        self.app.join("views")
    }

    /// Static assets served as-is, `<base>/public`.
    pub fn public_dir(&self) -> PathBuf {
        self.base.join("public")
    }
}
