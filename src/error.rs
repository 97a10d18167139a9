use thiserror::Error;

/// Errors surfaced by path resolution, module lookup, view rendering and
/// dispatch.
///
/// At the front-controller boundary all variants collapse into a single
/// "dispatch fault" whose [`std::fmt::Display`] output is what the client
/// sees after the `Exception => ` prefix, so messages are written to be
/// presentable on their own.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
