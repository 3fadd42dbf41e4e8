//! Destinations for generated output.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use startfast_core::{File, Materializer, Overwrite, WriteResult};

use crate::error::Result;

/// Where the orchestrator sends directories and files.
///
/// [`Materializer`] writes to disk; [`MemorySink`] keeps everything in
/// memory for previews and tests.
pub trait Sink {
    /// Whether the output location is already occupied.
    fn target_exists(&self) -> bool;

    /// Remove whatever occupies the output location.
    fn clear(&mut self) -> Result<()>;

    /// Create the output root and every directory in `paths` (relative to
    /// it). Must be idempotent.
    fn create_dirs(&mut self, paths: &[&str]) -> Result<()>;

    fn write(&mut self, file: &File) -> Result<WriteResult>;
}

impl Sink for Materializer {
    fn target_exists(&self) -> bool {
        self.exists()
    }

    fn clear(&mut self) -> Result<()> {
        Ok(self.remove_all()?)
    }

    fn create_dirs(&mut self, paths: &[&str]) -> Result<()> {
        self.create_root()?;
        Ok(Materializer::create_dirs(self, paths.iter().copied())?)
    }

    fn write(&mut self, file: &File) -> Result<WriteResult> {
        Ok(Materializer::write(self, file)?)
    }
}

/// An in-memory sink that never touches the filesystem.
#[derive(Debug, Default)]
pub struct MemorySink {
    directories: BTreeSet<String>,
    files: IndexMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.directories.iter().map(String::as_str)
    }

    /// Files in the order they were first written.
    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn into_files(self) -> Vec<File> {
        self.files
            .into_iter()
            .map(|(path, content)| File::new(path, content))
            .collect()
    }
}

impl Sink for MemorySink {
    fn target_exists(&self) -> bool {
        false
    }

    fn clear(&mut self) -> Result<()> {
        self.directories.clear();
        self.files.clear();
        Ok(())
    }

    fn create_dirs(&mut self, paths: &[&str]) -> Result<()> {
        self.directories.extend(paths.iter().map(|path| path.to_string()));
        Ok(())
    }

    fn write(&mut self, file: &File) -> Result<WriteResult> {
        if file.overwrite() == Overwrite::IfMissing && self.files.contains_key(file.path()) {
            return Ok(WriteResult::Skipped);
        }
        self.files
            .insert(file.path().to_string(), file.content().to_string());
        Ok(WriteResult::Written)
    }
}
