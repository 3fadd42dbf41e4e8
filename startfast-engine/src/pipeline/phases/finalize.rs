//! Finalize phase: package markers and fixed post-generation files.

use crate::{
    emitter::Emitter,
    error::Result,
    pipeline::{GenerationContext, Phase},
};

/// Owner recorded for everything written after the generators.
pub const FINALIZE_OWNER: &str = "finalize";

/// Touches the target's package marker in every package directory that a
/// generator has not already written one for, then lets the target write its
/// fixed artifacts.
pub struct FinalizePhase;

impl Phase for FinalizePhase {
    fn name(&self) -> &'static str {
        "finalize"
    }

    fn description(&self) -> &'static str {
        "Write package markers and fixed project files"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let target = ctx.target;
        let layout = ctx.layout;

        let markers: Vec<String> = match target.package_marker() {
            Some(marker) => layout
                .packages()
                .map(|package| format!("{}/{}", package, marker))
                .filter(|path| !ctx.files.contains_key(path))
                .collect(),
            None => Vec::new(),
        };

        let mut out = Emitter::new(FINALIZE_OWNER, ctx);
        for path in &markers {
            out.touch(path)?;
        }

        target.finalize(&mut out)
    }
}
