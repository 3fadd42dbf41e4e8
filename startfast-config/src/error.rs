use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ConfigurationError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigurationError {
    #[error("project name must not be empty")]
    #[diagnostic(
        code(startfast::empty_name),
        help("pass a name such as 'orders' or 'user-service'")
    )]
    EmptyName,

    #[error("project name '{name}' has no letters or digits")]
    #[diagnostic(
        code(startfast::separator_only_name),
        help("the name must contain at least one ASCII letter or number")
    )]
    SeparatorOnlyName { name: String },

    #[error("invalid project name '{name}'")]
    #[diagnostic(
        code(startfast::invalid_name),
        help(
            "character '{character}' is not allowed. Use only ASCII letters, numbers, '-' and '_'."
        )
    )]
    InvalidName {
        name: String,
        character: char,
        offset: usize,
    },

    #[error("failed to read preset '{}'", path.display())]
    #[diagnostic(help("create one with 'startfast new <name> --save-preset <file>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preset")]
    #[diagnostic(code(startfast::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize preset")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write preset '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigurationError {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Self::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
