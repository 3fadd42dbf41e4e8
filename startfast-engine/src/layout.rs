//! The directory skeleton created before any generator runs.

use std::collections::BTreeMap;

/// Whether a directory receives a package marker during finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    Package,
    Plain,
}

/// The set of directories scaffolded for a configuration.
///
/// Paths are relative and `/`-separated. Registering a directory also
/// registers its ancestors (as plain directories unless already known), so
/// the set is always closed under "parent of".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    dirs: BTreeMap<String, DirKind>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: &str, kind: DirKind) -> &mut Self {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return self;
        }

        let mut prefix = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            self.dirs.entry(prefix.clone()).or_insert(DirKind::Plain);
        }

        if kind == DirKind::Package {
            self.dirs.insert(prefix, DirKind::Package);
        }
        self
    }

    pub fn package(&mut self, path: &str) -> &mut Self {
        self.add(path, DirKind::Package)
    }

    pub fn plain(&mut self, path: &str) -> &mut Self {
        self.add(path, DirKind::Plain)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.dirs.contains_key(path)
    }

    pub fn kind(&self, path: &str) -> Option<DirKind> {
        self.dirs.get(path).copied()
    }

    /// Whether a file at `file_path` lands in the root or a scaffolded directory.
    pub fn permits(&self, file_path: &str) -> bool {
        match file_path.rsplit_once('/') {
            Some((parent, _)) => self.contains(parent),
            None => true,
        }
    }

    /// All directories, sorted so parents precede children.
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.dirs.keys().map(String::as_str)
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.dirs
            .iter()
            .filter(|(_, kind)| **kind == DirKind::Package)
            .map(|(path, _)| path.as_str())
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}
