//! Pytest suite for the generated service.

use startfast_config::Configuration;
use startfast_engine::{Emitter, Generator, Result};

use super::{Artifact, emit_all};

pub struct TestsGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> TestsGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    pub fn artifacts(&self) -> Vec<Artifact> {
        let mut artifacts = vec![
            ("tests/conftest.py", "tests/conftest.py.j2"),
            ("tests/api/test_endpoints.py", "tests/test_endpoints.py.j2"),
        ];
        if self.config.archetype().has_items() {
            artifacts.push((
                "tests/services/test_item_service.py",
                "tests/test_item_service.py.j2",
            ));
        }
        if self.config.auth().is_enabled() {
            artifacts.push(("tests/api/test_auth.py", "tests/test_auth.py.j2"));
        }
        artifacts.push(("pytest.ini", "tests/pytest.ini.j2"));
        artifacts
    }
}

impl Generator for TestsGenerator<'_> {
    fn name(&self) -> &'static str {
        "tests"
    }

    fn is_applicable(&self) -> bool {
        self.config.features().tests
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        emit_all(out, &self.artifacts())
    }
}

#[cfg(test)]
mod tests {
    use startfast_config::{Archetype, AuthKind};

    use super::*;

    fn paths(config: &Configuration) -> Vec<&'static str> {
        TestsGenerator::new(config)
            .artifacts()
            .into_iter()
            .map(|(path, _)| path)
            .collect()
    }

    #[test]
    fn test_full_suite() {
        let config = Configuration::builder("svc", "out")
            .archetype(Archetype::Crud)
            .auth(AuthKind::Jwt)
            .build()
            .unwrap();

        assert_eq!(
            paths(&config),
            vec![
                "tests/conftest.py",
                "tests/api/test_endpoints.py",
                "tests/services/test_item_service.py",
                "tests/api/test_auth.py",
                "pytest.ini",
            ]
        );
    }

    #[test]
    fn test_minimal_suite() {
        let config = Configuration::builder("svc", "out")
            .archetype(Archetype::MlApi)
            .auth(AuthKind::None)
            .build()
            .unwrap();

        assert_eq!(
            paths(&config),
            vec!["tests/conftest.py", "tests/api/test_endpoints.py", "pytest.ini"]
        );
    }

    #[test]
    fn test_gated_on_feature() {
        let config = Configuration::builder("svc", "out")
            .tests(false)
            .build()
            .unwrap();
        assert!(!TestsGenerator::new(&config).is_applicable());
    }
}
