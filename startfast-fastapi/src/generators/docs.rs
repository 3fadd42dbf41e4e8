//! Markdown documentation.

use startfast_config::Configuration;
use startfast_engine::{Emitter, Generator, Result};

use super::{Artifact, emit_all};

const ARTIFACTS: &[Artifact] = &[
    ("docs/api.md", "docs/api.md.j2"),
    ("docs/deployment.md", "docs/deployment.md.j2"),
    ("docs/development.md", "docs/development.md.j2"),
    ("docs/configuration.md", "docs/configuration.md.j2"),
    ("CONTRIBUTING.md", "docs/CONTRIBUTING.md.j2"),
];

pub struct DocsGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> DocsGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }
}

impl Generator for DocsGenerator<'_> {
    fn name(&self) -> &'static str {
        "docs"
    }

    fn is_applicable(&self) -> bool {
        self.config.features().docs
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        emit_all(out, ARTIFACTS)
    }
}
