//! Core utilities and types for the startfast scaffolding engine.
//!
//! This crate owns every interaction with the filesystem and the naming
//! helpers shared by the configuration model and the template renderer.

mod error;
mod file;
mod utils;

pub use error::{FileSystemError, FsOperation, Result};
// File operations
pub use file::{File, Materializer, Overwrite, WriteResult};
// String utilities
pub use utils::{to_kebab_case, to_pascal_case, to_snake_case};
