//! `.env` with working local values and `.env.example` with placeholders.

use startfast_engine::{Emitter, Generator, Result};

const TEMPLATE: &str = "env/env.j2";

/// Output path and whether it holds placeholder values.
const FILES: &[(&str, bool)] = &[(".env", false), (".env.example", true)];

pub struct EnvironmentGenerator;

impl Generator for EnvironmentGenerator {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        for &(path, example) in FILES {
            let vars = out.variables().clone().with("example", example)?;
            out.template_with(path, TEMPLATE, &vars)?;
        }
        Ok(())
    }
}
