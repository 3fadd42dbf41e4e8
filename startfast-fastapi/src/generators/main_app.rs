use startfast_engine::{Emitter, Generator, Result};

/// The application entry point, `app/main.py`, and the package root.
pub struct MainAppGenerator;

const PACKAGE_INIT: &str = r#""""{{ project_name }} application package."""

__version__ = "0.1.0"
"#;

impl Generator for MainAppGenerator {
    fn name(&self) -> &'static str {
        "main"
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        out.template("app/main.py", "app/main.py.j2")?;
        out.inline("app/__init__.py", PACKAGE_INIT)
    }
}
