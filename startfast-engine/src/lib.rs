//! Generation engine for the startfast scaffolding tool.
//!
//! This crate provides the framework-agnostic parts of a scaffolding run.
//! A [`Target`] contributes templates, a directory [`Layout`] and an ordered
//! [`GeneratorRegistry`]; the [`Orchestrator`] drives them through the
//! scaffold, generate and finalize phases and returns a [`GenerationReport`].
//!
//! # Module Organization
//!
//! - [`pipeline`] - Phases, plugins, diagnostics and the generation context
//! - [`Renderer`] / [`VariableBag`] - minijinja rendering with strict variables
//! - [`Emitter`] - the checked write path handed to generators
//! - [`Sink`] - on-disk ([`startfast_core::Materializer`]) or in-memory output

mod emitter;
mod error;
mod generator;
mod layout;
mod orchestrator;
pub mod pipeline;
mod renderer;
mod sink;
mod target;
mod variables;

pub use emitter::Emitter;
pub use error::{Error, Result, TemplateError};
pub use generator::{Generator, GeneratorRegistry};
pub use layout::{DirKind, Layout};
pub use orchestrator::{
    GenerationReport, Orchestrator, OverwritePolicy, Plan, PlannedGenerator, Preview,
};
pub use renderer::Renderer;
pub use sink::{MemorySink, Sink};
pub use target::{Target, TemplateSource};
pub use variables::{BASE_KEYS, VariableBag};
