//! Scaffold phase: guard the output directory and create the layout.

use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    orchestrator::OverwritePolicy,
    pipeline::{GenerationContext, Phase},
};

/// Refuses to touch an existing output directory unless overwrite was
/// confirmed, in which case the old tree is removed entirely. Then creates
/// the root and every layout directory.
pub struct ScaffoldPhase;

impl Phase for ScaffoldPhase {
    fn name(&self) -> &'static str {
        "scaffold"
    }

    fn description(&self) -> &'static str {
        "Prepare the output directory and create the directory layout"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let config = ctx.config;
        let output = config.output_path();

        if ctx.sink.target_exists() {
            match ctx.policy {
                OverwritePolicy::Refuse => {
                    return Err(Error::TargetExists {
                        path: output.to_path_buf(),
                    });
                }
                OverwritePolicy::Confirmed => {
                    warn!(path = %output.display(), "replacing existing output directory");
                    ctx.sink.clear()?;
                }
            }
        }

        let layout = ctx.layout;
        let directories: Vec<&str> = layout.directories().collect();
        ctx.sink.create_dirs(&directories)?;
        ctx.directories = directories.into_iter().map(str::to_string).collect();
        debug!(count = ctx.directories.len(), "created directories");

        Ok(())
    }
}
