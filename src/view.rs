//! View rendering service.
//!
//! Rendering is backed by askama templates compiled into the binary; the
//! configured views directory is the installation's own view tree, which
//! must exist before the service is first used. The check happens at render
//! time, not at construction, so building the container never touches the
//! filesystem.

use std::path::{Path, PathBuf};

use askama::Template;

use crate::error::AppError;

/// Template for the index page.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    title: &'a str,
    home_url: &'a str,
}

/// Renders views for an installation.
#[derive(Debug, Clone)]
pub struct ViewRenderer {
    views_dir: PathBuf,
}

impl ViewRenderer {
    /// Creates a renderer bound to a views directory.
    pub fn new(views_dir: impl Into<PathBuf>) -> Self {
        Self {
            views_dir: views_dir.into(),
        }
    }

    pub fn views_dir(&self) -> &Path {
        &self.views_dir
    }

    /// Whether the views directory exists on disk.
    pub fn views_dir_exists(&self) -> bool {
        self.views_dir.is_dir()
    }

    /// Renders the index page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the views directory is missing and
    /// [`AppError::Template`] if rendering fails.
    pub fn render_index(&self, title: &str, home_url: &str) -> Result<String, AppError> {
        self.ensure_views_dir()?;

        let page = IndexTemplate { title, home_url };
        Ok(page.render()?)
    }

    fn ensure_views_dir(&self) -> Result<(), AppError> {
        if self.views_dir_exists() {
            Ok(())
        } else {
            Err(AppError::not_found(format!(
                "views directory '{}' does not exist",
                self.views_dir.display()
            )))
        }
    }
}
