//! Pydantic request and response schemas.

use startfast_config::{Archetype, Configuration};
use startfast_engine::{Emitter, Generator, Result};

use super::{Artifact, emit_all};

pub struct SchemasGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> SchemasGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    pub fn artifacts(&self) -> Vec<Artifact> {
        let archetype_schema = match self.config.archetype() {
            Archetype::Api | Archetype::Crud => ("app/schemas/item.py", "schemas/item.py.j2"),
            Archetype::MlApi => ("app/schemas/prediction.py", "schemas/prediction.py.j2"),
            Archetype::Microservice => ("app/schemas/processing.py", "schemas/processing.py.j2"),
        };
        vec![
            ("app/schemas/common.py", "schemas/common.py.j2"),
            archetype_schema,
        ]
    }
}

impl Generator for SchemasGenerator<'_> {
    fn name(&self) -> &'static str {
        "schemas"
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        emit_all(out, &self.artifacts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_schema_comes_first() {
        let config = Configuration::builder("svc", "out")
            .archetype(Archetype::Microservice)
            .build()
            .unwrap();

        assert_eq!(
            SchemasGenerator::new(&config).artifacts(),
            vec![
                ("app/schemas/common.py", "schemas/common.py.j2"),
                ("app/schemas/processing.py", "schemas/processing.py.j2"),
            ]
        );
    }
}
