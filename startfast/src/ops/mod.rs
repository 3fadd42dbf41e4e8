//! Core operations.
//!
//! This module contains the business logic for startfast commands,
//! separated from CLI argument parsing and output rendering.

pub mod new;
pub mod plan;

pub use new::{NewOptions, new};
pub use plan::plan;
