//! Generation pipeline.
//!
//! A run is split into explicit phases that share a [`GenerationContext`]:
//!
//! - scaffold: refuse or clear an existing output directory, then create the layout
//! - generate: run each applicable generator in registration order
//! - finalize: package markers and the target's fixed files
//!
//! [`Plugin`]s observe phase boundaries and generator outcomes, and
//! generators can leave non-fatal [`Diagnostic`]s behind.

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
