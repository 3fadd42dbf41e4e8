//! Versioned API routes for the archetype.

use startfast_config::{Archetype, Configuration};
use startfast_engine::{Emitter, Generator, Result};

pub struct ApiGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> ApiGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    pub fn template(&self) -> &'static str {
        match self.config.archetype() {
            Archetype::Api | Archetype::Crud => "api/items.py.j2",
            Archetype::MlApi => "api/ml.py.j2",
            Archetype::Microservice => "api/microservice.py.j2",
        }
    }
}

impl Generator for ApiGenerator<'_> {
    fn name(&self) -> &'static str {
        "api"
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        out.template("app/api/v1/endpoints.py", self.template())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_per_archetype() {
        let cases = [
            (Archetype::Api, "api/items.py.j2"),
            (Archetype::Crud, "api/items.py.j2"),
            (Archetype::MlApi, "api/ml.py.j2"),
            (Archetype::Microservice, "api/microservice.py.j2"),
        ];
        for (archetype, expected) in cases {
            let config = Configuration::builder("svc", "out")
                .archetype(archetype)
                .build()
                .unwrap();
            assert_eq!(ApiGenerator::new(&config).template(), expected);
        }
    }
}
