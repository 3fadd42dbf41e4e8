//! Configuration model for the startfast scaffolding engine.
//!
//! A [`Configuration`] is built once per run, validated, and then only read.
//! It can be assembled programmatically through [`ConfigurationBuilder`] or
//! loaded from a TOML [`Preset`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod axis;
mod configuration;
mod error;
mod preset;

pub use axis::{Archetype, AuthKind, DatabaseKind, PersistenceFamily};
pub use configuration::{Configuration, ConfigurationBuilder, DEFAULT_RUNTIME_VERSION, Features};
pub use error::{ConfigurationError, Result};
pub use preset::{FeaturesSection, PRESET_FILE, Preset, ProjectSection, StyleSection};
