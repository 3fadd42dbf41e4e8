//! Pipeline phase trait.

use super::GenerationContext;
use crate::error::Result;

/// A phase in the generation pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads the
/// run inputs from the context and records what it produced there.
///
/// Built-in phases:
/// - `ScaffoldPhase` - guards the output directory and creates the layout
/// - `GeneratePhase` - runs every applicable generator in registration order
/// - `FinalizePhase` - writes package markers and the target's fixed files
pub trait Phase {
    /// The name of this phase (used in logs and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails. Nothing already written is rolled back.
    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()>;
}
