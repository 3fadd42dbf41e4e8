//! Container image and local compose stack.

use startfast_config::Configuration;
use startfast_engine::{Emitter, Generator, Result};

use super::{Artifact, emit_all};

const ARTIFACTS: &[Artifact] = &[
    ("Dockerfile", "docker/Dockerfile.j2"),
    ("docker-compose.yml", "docker/docker-compose.yml.j2"),
    (".dockerignore", "docker/dockerignore.j2"),
];

pub struct DockerGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> DockerGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }
}

impl Generator for DockerGenerator<'_> {
    fn name(&self) -> &'static str {
        "docker"
    }

    fn is_applicable(&self) -> bool {
        self.config.features().docker
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        emit_all(out, ARTIFACTS)
    }
}
