//! Generate phase: run every applicable generator in registration order.

use tracing::{debug, info};

use crate::{
    emitter::Emitter,
    error::{Error, Result},
    pipeline::{GenerationContext, Phase},
};

/// Asks each generator whether it applies and runs the ones that do.
///
/// The first failing generator aborts the run. Files already written stay
/// on disk.
pub struct GeneratePhase;

impl Phase for GeneratePhase {
    fn name(&self) -> &'static str {
        "generate"
    }

    fn description(&self) -> &'static str {
        "Run applicable generators in registration order"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let generators = ctx.generators;
        let plugins = ctx.plugins;

        for generator in generators.iter() {
            let name = generator.name();
            let applied = generator.is_applicable();

            if applied {
                let before = ctx.files.len();
                let mut out = Emitter::new(name, ctx);
                generator.run(&mut out).map_err(|e| Error::Generator {
                    generator: name.to_string(),
                    source: Box::new(e),
                })?;
                info!(
                    generator = name,
                    files = ctx.files.len() - before,
                    "generated"
                );
                ctx.applied.push(name);
            } else {
                debug!(generator = name, "skipped");
                ctx.skipped.push(name);
            }

            for plugin in plugins {
                plugin.on_generator(name, applied)?;
            }
        }

        Ok(())
    }
}
