//! Business logic between the routes and the persistence layer.

use startfast_config::{Archetype, Configuration, PersistenceFamily};
use startfast_engine::{Emitter, Generator, Result};

use super::Artifact;

const ITEM_SERVICE: &str = "app/services/item_service.py";
const PREDICTION_SERVICE: &str = "app/services/prediction_service.py";
const PROCESSING_SERVICE: &str = "app/services/processing_service.py";

pub struct ServicesGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> ServicesGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    pub fn artifact(&self) -> Artifact {
        match self.config.archetype() {
            Archetype::Api | Archetype::Crud => (ITEM_SERVICE, self.item_template()),
            Archetype::MlApi => (PREDICTION_SERVICE, "services/prediction.py.j2"),
            Archetype::Microservice => (PROCESSING_SERVICE, "services/processing.py.j2"),
        }
    }

    fn item_template(&self) -> &'static str {
        match (self.config.database().family(), self.config.is_async()) {
            (PersistenceFamily::Relational, true) => "services/item_sqlalchemy_async.py.j2",
            (PersistenceFamily::Relational, false) => "services/item_sqlalchemy_sync.py.j2",
            (PersistenceFamily::Document, true) => "services/item_beanie.py.j2",
            (PersistenceFamily::Document, false) => "services/item_mongoengine.py.j2",
            (PersistenceFamily::KeyValue, _) => "services/item_redis.py.j2",
        }
    }
}

impl Generator for ServicesGenerator<'_> {
    fn name(&self) -> &'static str {
        "services"
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        let (path, template) = self.artifact();
        out.template(path, template)
    }
}

#[cfg(test)]
mod tests {
    use startfast_config::DatabaseKind;

    use super::*;

    fn artifact(archetype: Archetype, database: DatabaseKind, is_async: bool) -> Artifact {
        let config = Configuration::builder("svc", "out")
            .archetype(archetype)
            .database(database)
            .is_async(is_async)
            .build()
            .unwrap();
        ServicesGenerator::new(&config).artifact()
    }

    #[test]
    fn test_item_service_variants() {
        let cases = [
            (DatabaseKind::Sqlite, true, "item_sqlalchemy_async"),
            (DatabaseKind::Postgresql, false, "item_sqlalchemy_sync"),
            (DatabaseKind::Mongodb, true, "item_beanie"),
            (DatabaseKind::Mongodb, false, "item_mongoengine"),
            (DatabaseKind::Redis, true, "item_redis"),
        ];
        for (database, is_async, template) in cases {
            let (path, actual) = artifact(Archetype::Crud, database, is_async);
            assert_eq!(path, "app/services/item_service.py");
            assert_eq!(actual, format!("services/{template}.py.j2"));
        }
    }

    #[test]
    fn test_archetype_services() {
        assert_eq!(
            artifact(Archetype::MlApi, DatabaseKind::Redis, true).0,
            "app/services/prediction_service.py"
        );
        assert_eq!(
            artifact(Archetype::Microservice, DatabaseKind::Sqlite, false).0,
            "app/services/processing_service.py"
        );
    }
}
