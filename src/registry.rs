//! Module location registry.
//!
//! Instead of mutating process-global loader state, the composition root
//! builds an explicit [`ModuleRegistry`] mapping each logical layer to its
//! source directory and passes it by reference to whoever needs to locate a
//! unit.
//!
//! Registration never touches the filesystem; a missing directory or unit
//! only surfaces on lookup.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::AppError;

/// Logical layers whose source units are discovered by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModuleKind {
    /// Request handlers.
    Controllers,
    /// Data entities.
    Models,
}

impl ModuleKind {
    fn label(self) -> &'static str {
        match self {
            ModuleKind::Controllers => "controller",
            ModuleKind::Models => "model",
        }
    }
}

/// Startup-built mapping from [`ModuleKind`] to its source directory.
///
/// Built once by the composition root and immutable afterwards (all lookup
/// methods take `&self`).
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    dirs: BTreeMap<ModuleKind, PathBuf>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the source directory for a layer.
    ///
    /// Idempotent: registering the same kind/directory pair again is a
    /// no-op. Re-registering a kind with a different directory replaces the
    /// earlier entry, last writer wins.
    pub fn register(&mut self, kind: ModuleKind, dir: impl Into<PathBuf>) -> &mut Self {
        self.dirs.insert(kind, dir.into());
        self
    }

    /// Directory registered for a layer, if any.
    pub fn dir(&self, kind: ModuleKind) -> Option<&PathBuf> {
        self.dirs.get(&kind)
    }

    /// Resolves a logical unit name to its source file, `<dir>/<name>.rs`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the layer has no registered
    /// directory, the directory is missing on disk, or the unit file does
    /// not exist. Names containing path separators are rejected outright.
    pub fn locate(&self, kind: ModuleKind, name: &str) -> Result<PathBuf, AppError> {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(AppError::not_found(format!(
                "invalid {} name '{name}'",
                kind.label()
            )));
        }

        let dir = self.dirs.get(&kind).ok_or_else(|| {
            AppError::not_found(format!("no directory registered for {}s", kind.label()))
        })?;

        if !dir.is_dir() {
            return Err(AppError::not_found(format!(
                "{} directory '{}' does not exist",
                kind.label(),
                dir.display()
            )));
        }

        let unit = dir.join(format!("{name}.rs"));
        if !unit.is_file() {
            return Err(AppError::not_found(format!(
                "{} '{name}' not found under '{}'",
                kind.label(),
                dir.display()
            )));
        }

        Ok(unit)
    }
}
