//! Framework targets: everything the engine needs to know about one kind of service.

use startfast_config::Configuration;

use crate::{emitter::Emitter, error::Result, generator::GeneratorRegistry, layout::Layout};

/// A named template body registered with the renderer.
pub type TemplateSource = (&'static str, &'static str);

/// A family of generated services (for example a FastAPI application).
///
/// Implement this trait to teach the orchestrator a new framework: its
/// template catalogue, its directory skeleton, its generators, and the
/// fixed files written after every generator has run.
pub trait Target {
    /// Target identifier (e.g., "fastapi")
    fn name(&self) -> &'static str;

    /// Every template the generators of this target may render.
    fn templates(&self) -> &'static [TemplateSource];

    /// Directories to scaffold for the configuration.
    fn layout(&self, config: &Configuration) -> Layout;

    /// Generators in precedence order.
    fn generators<'a>(&self, config: &'a Configuration) -> GeneratorRegistry<'a>;

    /// File created in every package directory, if the target has packages.
    fn package_marker(&self) -> Option<&'static str> {
        None
    }

    /// Write the fixed post-generation artifacts.
    fn finalize(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        let _ = out;
        Ok(())
    }
}
