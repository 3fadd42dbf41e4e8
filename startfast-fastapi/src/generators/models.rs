//! Persistence entities.

use startfast_config::{Archetype, Configuration, PersistenceFamily};
use startfast_engine::{Emitter, Generator, Result};

use super::{Artifact, emit_all};

pub struct ModelsGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> ModelsGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    pub fn artifacts(&self) -> Vec<Artifact> {
        let archetype = self.config.archetype();
        let template = match self.config.database().family() {
            PersistenceFamily::Relational if archetype.has_items() => {
                Some(("app/models/item.py", "models/item_sqlalchemy.py.j2"))
            }
            PersistenceFamily::Document if archetype.has_items() => {
                if self.config.is_async() {
                    Some(("app/models/item.py", "models/item_beanie.py.j2"))
                } else {
                    Some(("app/models/item.py", "models/item_mongoengine.py.j2"))
                }
            }
            PersistenceFamily::Relational if archetype == Archetype::MlApi => {
                Some(("app/models/prediction.py", "models/prediction.py.j2"))
            }
            _ => None,
        };
        template.into_iter().collect()
    }
}

impl Generator for ModelsGenerator<'_> {
    fn name(&self) -> &'static str {
        "models"
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        let artifacts = self.artifacts();
        if artifacts.is_empty() && self.config.archetype().has_items() {
            out.warn(format!(
                "{} has no entity model; items are stored as JSON values",
                self.config.database()
            ));
        }
        emit_all(out, &artifacts)
    }
}
