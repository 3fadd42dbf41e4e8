use startfast_engine::{Emitter, Generator, Result};

/// Pydantic settings module, `app/core/config.py`.
pub struct ConfigGenerator;

impl Generator for ConfigGenerator {
    fn name(&self) -> &'static str {
        "config"
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        out.template("app/core/config.py", "core/config.py.j2")
    }
}
