//! Generation context passed through pipeline phases.

use indexmap::IndexMap;
use startfast_config::Configuration;

use super::{Diagnostic, Plugin};
use crate::{
    generator::GeneratorRegistry, layout::Layout, orchestrator::OverwritePolicy,
    renderer::Renderer, sink::Sink, target::Target, variables::VariableBag,
};

/// Context passed through all pipeline phases.
///
/// Inputs are shared references fixed for the whole run; the remaining
/// fields accumulate what each phase did.
pub struct GenerationContext<'a> {
    pub config: &'a Configuration,
    pub target: &'a dyn Target,
    pub renderer: &'a Renderer,
    pub variables: &'a VariableBag,
    pub layout: &'a Layout,
    pub generators: &'a GeneratorRegistry<'a>,
    pub policy: OverwritePolicy,
    pub(crate) sink: &'a mut dyn Sink,
    pub(crate) plugins: &'a [Box<dyn Plugin + 'a>],
    /// Directories created by the scaffold phase.
    pub directories: Vec<String>,
    /// Every file written so far, mapped to the generator that owns it.
    pub files: IndexMap<String, &'static str>,
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> GenerationContext<'a> {
    pub fn add_warning(&mut self, source: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(source, message));
    }

    pub fn add_info(&mut self, source: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(source, message));
    }
}
