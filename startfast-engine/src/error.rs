use std::path::PathBuf;

use startfast_core::FileSystemError;
use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures while registering or rendering templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template '{name}' has invalid syntax")]
    Syntax {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("template '{0}' is not registered")]
    NotFound(String),

    #[error("failed to render template '{name}'")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("template variable '{0}' is already defined")]
    ReservedVariable(String),
}

impl TemplateError {
    /// Classify a minijinja error raised while compiling or rendering `name`.
    pub(crate) fn from_minijinja(name: &str, source: minijinja::Error) -> Self {
        match source.kind() {
            minijinja::ErrorKind::SyntaxError => Self::Syntax {
                name: name.to_string(),
                source,
            },
            minijinja::ErrorKind::TemplateNotFound => Self::NotFound(name.to_string()),
            _ => Self::Render {
                name: name.to_string(),
                source,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    #[error("output directory '{}' already exists", path.display())]
    TargetExists { path: PathBuf },

    #[error("'{path}' is written by both '{first}' and '{second}'")]
    PathCollision {
        path: String,
        first: String,
        second: String,
    },

    #[error("'{path}' written by '{generator}' is outside the scaffolded directories")]
    UnscaffoldedDirectory { path: String, generator: String },

    #[error("invalid artifact path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("generator '{0}' is registered more than once")]
    DuplicateGenerator(String),

    #[error("generator '{generator}' failed")]
    Generator {
        generator: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Walk through generator wrappers to the underlying failure.
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::Generator { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
