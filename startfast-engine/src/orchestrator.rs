//! The entry point that ties configuration, target and pipeline together.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use startfast_config::Configuration;
use startfast_core::{File, Materializer};
use tracing::info;

use crate::{
    error::{Error, Result},
    generator::GeneratorRegistry,
    layout::Layout,
    pipeline::{Diagnostic, GenerationContext, Pipeline, Plugin},
    renderer::Renderer,
    sink::{MemorySink, Sink},
    target::Target,
    variables::VariableBag,
};

/// What to do when the output directory already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Fail with [`Error::TargetExists`] before touching anything.
    #[default]
    Refuse,
    /// The caller confirmed: delete the existing tree and regenerate.
    Confirmed,
}

/// Outcome of a run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub target: &'static str,
    pub output_dir: PathBuf,
    /// Directories created by the scaffold phase, parents first.
    pub directories: Vec<String>,
    /// Files in write order, mapped to the generator that wrote them.
    pub files: IndexMap<String, &'static str>,
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Informational diagnostics, such as follow-up steps for the user.
    pub fn notes(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.severity.is_warning())
    }
}

/// A dry run: the report plus every file's content.
#[derive(Debug)]
pub struct Preview {
    pub report: GenerationReport,
    pub files: Vec<File>,
}

impl Preview {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path() == path)
            .map(|f| f.content())
    }
}

/// A generator's applicability, as reported by [`Orchestrator::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedGenerator {
    pub name: &'static str,
    pub applicable: bool,
}

/// What a run would do, computed without rendering or writing anything.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub target: &'static str,
    pub output_dir: PathBuf,
    pub generators: Vec<PlannedGenerator>,
    pub directories: Vec<String>,
}

/// Drives one scaffolding run.
///
/// # Example
///
/// ```ignore
/// let config = Configuration::builder("shop", "./shop").build()?;
/// let report = Orchestrator::new(&config, &FastApi)?
///     .plugin(Progress)
///     .run(OverwritePolicy::Refuse)?;
/// ```
pub struct Orchestrator<'a> {
    config: &'a Configuration,
    target: &'a dyn Target,
    renderer: Renderer,
    variables: VariableBag,
    layout: Layout,
    generators: GeneratorRegistry<'a>,
    plugins: Vec<Box<dyn Plugin + 'a>>,
    pipeline: Pipeline,
}

impl<'a> Orchestrator<'a> {
    /// Register the target's templates and generators for `config`.
    ///
    /// # Errors
    ///
    /// Fails if a template does not parse or a generator name is registered twice.
    pub fn new(config: &'a Configuration, target: &'a dyn Target) -> Result<Self> {
        let mut renderer = Renderer::new();
        for &(name, source) in target.templates() {
            renderer.add_template(name, source)?;
        }

        let generators = target.generators(config);
        if let Some(name) = generators.duplicate_name() {
            return Err(Error::DuplicateGenerator(name.to_string()));
        }

        Ok(Self {
            config,
            target,
            renderer,
            variables: VariableBag::base(config),
            layout: target.layout(config),
            generators,
            plugins: Vec::new(),
            pipeline: Pipeline::new(),
        })
    }

    /// Add a plugin to receive phase and generator hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'a) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn config(&self) -> &Configuration {
        self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn generators(&self) -> &GeneratorRegistry<'a> {
        &self.generators
    }

    pub fn plan(&self) -> Plan {
        Plan {
            target: self.target.name(),
            output_dir: self.config.output_path().to_path_buf(),
            generators: self
                .generators
                .iter()
                .map(|g| PlannedGenerator {
                    name: g.name(),
                    applicable: g.is_applicable(),
                })
                .collect(),
            directories: self.layout.directories().map(str::to_string).collect(),
        }
    }

    /// Generate the tree on disk at the configuration's output path.
    pub fn run(&self, policy: OverwritePolicy) -> Result<GenerationReport> {
        let mut sink = Materializer::new(self.config.output_path());
        info!(
            framework = self.target.name(),
            path = %self.config.output_path().display(),
            "generating project"
        );
        let report = self.execute(&mut sink, policy)?;
        info!(files = report.file_count(), "generation complete");
        Ok(report)
    }

    /// Generate the tree in memory without touching the filesystem.
    pub fn preview(&self) -> Result<Preview> {
        let mut sink = MemorySink::new();
        let report = self.execute(&mut sink, OverwritePolicy::Confirmed)?;
        Ok(Preview {
            report,
            files: sink.into_files(),
        })
    }

    fn execute<S: Sink>(&self, sink: &mut S, policy: OverwritePolicy) -> Result<GenerationReport> {
        let mut ctx = GenerationContext {
            config: self.config,
            target: self.target,
            renderer: &self.renderer,
            variables: &self.variables,
            layout: &self.layout,
            generators: &self.generators,
            policy,
            sink,
            plugins: &self.plugins,
            directories: Vec::new(),
            files: IndexMap::new(),
            applied: Vec::new(),
            skipped: Vec::new(),
            diagnostics: Vec::new(),
        };

        self.pipeline.run(&mut ctx)?;

        Ok(GenerationReport {
            target: self.target.name(),
            output_dir: self.config.output_path().to_path_buf(),
            directories: ctx.directories,
            files: ctx.files,
            applied: ctx.applied,
            skipped: ctx.skipped,
            diagnostics: ctx.diagnostics,
        })
    }
}
