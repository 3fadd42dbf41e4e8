use startfast_config::Configuration;
use startfast_engine::{Emitter, GeneratorRegistry, Layout, Result, Target, TemplateSource};

use crate::{generators, layout, templates::TEMPLATES};

/// Files written by the finalize phase, after every generator.
const PROJECT_FILES: &[(&str, &str)] = &[
    ("README.md", "project/README.md.j2"),
    (".gitignore", "project/gitignore.j2"),
    (".env.template", "project/env.template.j2"),
];

/// A FastAPI web service.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastApi;

impl Target for FastApi {
    fn name(&self) -> &'static str {
        "fastapi"
    }

    fn templates(&self) -> &'static [TemplateSource] {
        TEMPLATES
    }

    fn layout(&self, config: &Configuration) -> Layout {
        layout::layout(config)
    }

    fn generators<'a>(&self, config: &'a Configuration) -> GeneratorRegistry<'a> {
        generators::registry(config)
    }

    fn package_marker(&self) -> Option<&'static str> {
        Some("__init__.py")
    }

    fn finalize(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        for &(path, template) in PROJECT_FILES {
            out.template(path, template)?;
        }
        Ok(())
    }
}
