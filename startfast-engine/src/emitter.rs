//! The write path handed to generators.

use startfast_config::Configuration;
use startfast_core::{File, WriteResult};
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    pipeline::GenerationContext,
    variables::VariableBag,
};

/// Renders and writes artifacts on behalf of one owner (a generator or the
/// finalize phase).
///
/// Every write is checked before it reaches the sink: the path must be
/// relative and normalized, its parent must be a scaffolded directory, and
/// no earlier write may own the same path.
pub struct Emitter<'c, 'a> {
    owner: &'static str,
    ctx: &'c mut GenerationContext<'a>,
}

impl<'c, 'a> Emitter<'c, 'a> {
    pub(crate) fn new(owner: &'static str, ctx: &'c mut GenerationContext<'a>) -> Self {
        Self { owner, ctx }
    }

    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn config(&self) -> &Configuration {
        self.ctx.config
    }

    /// The base variable bag for this run.
    pub fn variables(&self) -> &VariableBag {
        self.ctx.variables
    }

    /// Render an inline template with the base variables and write it to `path`.
    pub fn inline(&mut self, path: &str, source: &str) -> Result<()> {
        let content = self.ctx.renderer.render_str(source, self.ctx.variables)?;
        self.write(path, content)
    }

    /// Render a named template with the base variables and write it to `path`.
    pub fn template(&mut self, path: &str, template: &str) -> Result<()> {
        let content = self.ctx.renderer.render(template, self.ctx.variables)?;
        self.write(path, content)
    }

    /// Render a named template with an extended bag and write it to `path`.
    pub fn template_with(&mut self, path: &str, template: &str, vars: &VariableBag) -> Result<()> {
        let content = self.ctx.renderer.render(template, vars)?;
        self.write(path, content)
    }

    /// Write literal content to `path`, replacing any existing file.
    pub fn write(&mut self, path: &str, content: impl Into<String>) -> Result<()> {
        self.emit(File::new(path, content))
    }

    /// Create an empty file at `path` unless one already exists.
    pub fn touch(&mut self, path: &str) -> Result<()> {
        self.emit(File::marker(path))
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let owner = self.owner;
        self.ctx.add_warning(owner, message);
    }

    pub fn note(&mut self, message: impl Into<String>) {
        let owner = self.owner;
        self.ctx.add_info(owner, message);
    }

    fn emit(&mut self, file: File) -> Result<()> {
        let path = file.path();

        validate_path(path).map_err(|reason| Error::InvalidPath {
            path: path.to_string(),
            reason,
        })?;

        if !self.ctx.layout.permits(path) {
            return Err(Error::UnscaffoldedDirectory {
                path: path.to_string(),
                generator: self.owner.to_string(),
            });
        }

        if let Some(first) = self.ctx.files.get(path) {
            return Err(Error::PathCollision {
                path: path.to_string(),
                first: first.to_string(),
                second: self.owner.to_string(),
            });
        }

        match self.ctx.sink.write(&file)? {
            WriteResult::Written => debug!(path, owner = self.owner, "wrote artifact"),
            WriteResult::Skipped => trace!(path, owner = self.owner, "kept existing file"),
        }
        self.ctx.files.insert(path.to_string(), self.owner);
        Ok(())
    }
}

/// Check that an artifact path is relative, `/`-separated and normalized.
fn validate_path(path: &str) -> std::result::Result<(), &'static str> {
    if path.is_empty() {
        return Err("path is empty");
    }
    if path.starts_with('/') {
        return Err("path must be relative");
    }
    if path.contains('\\') {
        return Err("path must use '/' separators");
    }
    for segment in path.split('/') {
        match segment {
            "" => return Err("path contains an empty segment"),
            "." | ".." => return Err("path must not contain '.' or '..' segments"),
            _ => {}
        }
    }
    Ok(())
}
