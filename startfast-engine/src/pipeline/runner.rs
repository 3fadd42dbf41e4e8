//! Pipeline runner.

use tracing::{debug, info_span};

use super::{
    GenerationContext, Phase,
    phases::{FinalizePhase, GeneratePhase, ScaffoldPhase},
};
use crate::error::Result;

/// Runs the scaffold, generate and finalize phases in order, calling the
/// context's plugin hooks around each one.
pub struct Pipeline {
    phases: [&'static dyn Phase; 3],
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: [&ScaffoldPhase, &GeneratePhase, &FinalizePhase],
        }
    }

    /// Run every phase in order.
    ///
    /// # Errors
    ///
    /// Returns the first phase or plugin error. Later phases do not run.
    pub fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        for phase in self.phases {
            Self::run_phase(phase, ctx)?;
        }
        Ok(())
    }

    fn run_phase(phase: &dyn Phase, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let phase_name = phase.name();
        let _span = info_span!("phase", name = phase_name).entered();
        debug!(description = phase.description(), "starting phase");

        let plugins = ctx.plugins;
        for plugin in plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
