//! Python dependency manifests.

use startfast_config::Configuration;
use startfast_engine::{Emitter, Generator, Result};

use super::{Artifact, emit_all};

pub struct RequirementsGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> RequirementsGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    pub fn artifacts(&self) -> Vec<Artifact> {
        let mut artifacts = vec![("requirements.txt", "requirements/requirements.txt.j2")];
        if self.config.features().tests {
            artifacts.push((
                "requirements-dev.txt",
                "requirements/requirements-dev.txt.j2",
            ));
        }
        artifacts
    }
}

impl Generator for RequirementsGenerator<'_> {
    fn name(&self) -> &'static str {
        "requirements"
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        emit_all(out, &self.artifacts())
    }
}
