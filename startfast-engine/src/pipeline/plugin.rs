//! Pipeline plugin trait for observing a run.

use super::GenerationContext;
use crate::error::Result;

/// A plugin that can hook into the generation pipeline.
///
/// Plugins receive callbacks around each phase and once per generator,
/// which is enough to drive progress output or collect timings.
///
/// # Example
///
/// ```ignore
/// struct Progress;
///
/// impl Plugin for Progress {
///     fn name(&self) -> &'static str { "progress" }
///
///     fn on_generator(&self, name: &str, applied: bool) -> Result<()> {
///         if applied {
///             println!("  + {}", name);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    ///
    /// # Errors
    ///
    /// Return an error to abort the run.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &GenerationContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    ///
    /// # Errors
    ///
    /// Return an error to abort the run.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &GenerationContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Called for each registered generator, after it ran or was skipped.
    #[allow(unused_variables)]
    fn on_generator(&self, name: &str, applied: bool) -> Result<()> {
        Ok(())
    }
}
