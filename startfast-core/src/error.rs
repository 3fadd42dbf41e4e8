use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Result type for filesystem operations.
pub type Result<T> = std::result::Result<T, FileSystemError>;

/// The filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    CreateDirectory,
    RemoveDirectory,
    WriteFile,
}

impl FsOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateDirectory => "create directory",
            Self::RemoveDirectory => "remove directory",
            Self::WriteFile => "write file",
        }
    }
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directory creation, removal or file write failed.
#[derive(Debug, Error)]
#[error("failed to {op} '{}'", path.display())]
pub struct FileSystemError {
    pub op: FsOperation,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FileSystemError {
    pub fn new(op: FsOperation, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            op,
            path: path.into(),
            source,
        }
    }
}
