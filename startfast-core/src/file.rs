use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::{FileSystemError, FsOperation, Result};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| FileSystemError::new(FsOperation::CreateDirectory, parent, e))?;
    }
    fs::write(path, content).map_err(|e| FileSystemError::new(FsOperation::WriteFile, path, e))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (rendered artifacts)
    Always,
    /// Only create if file doesn't exist (package markers)
    IfMissing,
}

/// A rendered artifact: a path relative to the output root and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: String,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file with the given relative path and content (always overwritten)
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Create an empty file that is only written when missing.
    pub fn marker(path: impl Into<String>) -> Self {
        Self::new(path, String::new()).with_overwrite(Overwrite::IfMissing)
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the relative file path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn overwrite(&self) -> Overwrite {
        self.overwrite
    }
}

/// Persists directories and files beneath a single output root.
///
/// This is the only type in the engine that touches the filesystem.
/// All paths handed to it are relative to the root and `/`-separated.
#[derive(Debug, Clone)]
pub struct Materializer {
    root: PathBuf,
}

impl Materializer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path against the output root.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    /// Recursively delete the output root. A missing root is not an error.
    pub fn remove_all(&self) -> Result<()> {
        if !self.root.exists() {
            return Ok(());
        }
        debug!(path = %self.root.display(), "removing existing output directory");
        let result = if self.root.is_dir() {
            fs::remove_dir_all(&self.root)
        } else {
            fs::remove_file(&self.root)
        };
        result.map_err(|e| FileSystemError::new(FsOperation::RemoveDirectory, &self.root, e))
    }

    /// Create the output root itself.
    pub fn create_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .map_err(|e| FileSystemError::new(FsOperation::CreateDirectory, &self.root, e))
    }

    /// Create a directory (and its ancestors) beneath the root.
    ///
    /// Creating a directory that already exists succeeds.
    pub fn create_dir(&self, relative: &str) -> Result<()> {
        let path = self.resolve(relative);
        debug!(path = relative, "creating directory");
        fs::create_dir_all(&path)
            .map_err(|e| FileSystemError::new(FsOperation::CreateDirectory, path, e))
    }

    pub fn create_dirs<'a, I>(&self, directories: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for dir in directories {
            self.create_dir(dir)?;
        }
        Ok(())
    }

    /// Write the file according to its overwrite rule.
    pub fn write(&self, file: &File) -> Result<WriteResult> {
        let path = self.resolve(file.path());

        match file.overwrite() {
            Overwrite::Always => {
                write_file(&path, file.content())?;
                debug!(
                    path = file.path(),
                    bytes = file.content().len(),
                    "wrote file"
                );
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, file.content())?;
                    debug!(path = file.path(), "created file");
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}
