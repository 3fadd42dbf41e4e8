//! Connection management for the selected backend.

use startfast_config::{Configuration, PersistenceFamily};
use startfast_engine::{Emitter, Generator, Result};

use super::{Artifact, emit_all};

pub struct DatabaseGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> DatabaseGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    pub fn artifacts(&self) -> Vec<Artifact> {
        let family = self.config.database().family();
        let connection = match (family, self.config.is_async()) {
            (PersistenceFamily::Relational, true) => "db/sqlalchemy_async.py.j2",
            (PersistenceFamily::Relational, false) => "db/sqlalchemy_sync.py.j2",
            (PersistenceFamily::Document, true) => "db/mongo_async.py.j2",
            (PersistenceFamily::Document, false) => "db/mongo_sync.py.j2",
            (PersistenceFamily::KeyValue, _) => "db/redis.py.j2",
        };

        let mut artifacts = vec![("app/db/database.py", connection)];
        if family == PersistenceFamily::Relational {
            artifacts.push(("app/db/base.py", "db/base.py.j2"));
        }
        artifacts
    }
}

impl Generator for DatabaseGenerator<'_> {
    fn name(&self) -> &'static str {
        "database"
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        emit_all(out, &self.artifacts())
    }
}

#[cfg(test)]
mod tests {
    use startfast_config::DatabaseKind;

    use super::*;

    fn artifacts(database: DatabaseKind, is_async: bool) -> Vec<Artifact> {
        let config = Configuration::builder("svc", "out")
            .database(database)
            .is_async(is_async)
            .build()
            .unwrap();
        DatabaseGenerator::new(&config).artifacts()
    }

    #[test]
    fn test_relational_variants() {
        assert_eq!(
            artifacts(DatabaseKind::Postgresql, true),
            vec![
                ("app/db/database.py", "db/sqlalchemy_async.py.j2"),
                ("app/db/base.py", "db/base.py.j2"),
            ]
        );
        assert_eq!(
            artifacts(DatabaseKind::Sqlite, false)[0],
            ("app/db/database.py", "db/sqlalchemy_sync.py.j2")
        );
    }

    #[test]
    fn test_non_relational_has_no_base() {
        assert_eq!(
            artifacts(DatabaseKind::Mongodb, false),
            vec![("app/db/database.py", "db/mongo_sync.py.j2")]
        );
        assert_eq!(
            artifacts(DatabaseKind::Redis, true),
            vec![("app/db/database.py", "db/redis.py.j2")]
        );
    }
}
