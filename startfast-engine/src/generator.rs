//! The generator contract and the ordered registry.

use std::collections::HashSet;

use crate::{emitter::Emitter, error::Result};

/// One concern of the generated tree (configuration module, auth, docker, ...).
///
/// Generators are built once per run with a shared reference to the
/// configuration and keep no state between calls. Selecting between variants
/// is control logic inside `run`; emitting nothing is a valid outcome.
pub trait Generator {
    /// Stable identifier used in reports and collision errors.
    fn name(&self) -> &'static str;

    /// Whether this generator runs for the configuration it was built with.
    fn is_applicable(&self) -> bool {
        true
    }

    /// Emit this generator's artifacts.
    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()>;
}

/// Generators in registration order, which is also the documented write order.
#[derive(Default)]
pub struct GeneratorRegistry<'a> {
    generators: Vec<Box<dyn Generator + 'a>>,
}

impl<'a> GeneratorRegistry<'a> {
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    pub fn register(&mut self, generator: impl Generator + 'a) -> &mut Self {
        self.generators.push(Box::new(generator));
        self
    }

    /// Builder-style variant of [`GeneratorRegistry::register`].
    pub fn with(mut self, generator: impl Generator + 'a) -> Self {
        self.register(generator);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn Generator + 'a)> {
        self.generators.iter().map(|g| g.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|g| g.name()).collect()
    }

    pub fn applicable(&self) -> impl Iterator<Item = &(dyn Generator + 'a)> {
        self.iter().filter(|g| g.is_applicable())
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Generator + 'a)> {
        self.iter().find(|g| g.name() == name)
    }

    /// The first name registered more than once, if any.
    pub fn duplicate_name(&self) -> Option<&'static str> {
        let mut seen = HashSet::new();
        self.iter()
            .map(|g| g.name())
            .find(|name| !seen.insert(*name))
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str, bool);

    impl Generator for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn is_applicable(&self) -> bool {
            self.1
        }

        fn run(&self, _out: &mut Emitter<'_, '_>) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_registration_order_is_kept() {
        let registry = GeneratorRegistry::new()
            .with(Named("config", true))
            .with(Named("auth", false))
            .with(Named("api", true));

        assert_eq!(registry.names(), vec!["config", "auth", "api"]);
        let applicable: Vec<&str> = registry.applicable().map(|g| g.name()).collect();
        assert_eq!(applicable, vec!["config", "api"]);
    }

    #[test]
    fn test_duplicate_name() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Named("docs", true));
        assert_eq!(registry.duplicate_name(), None);

        registry.register(Named("docs", false));
        assert_eq!(registry.duplicate_name(), Some("docs"));
    }

    #[test]
    fn test_get() {
        let registry = GeneratorRegistry::new().with(Named("docker", false));
        assert!(!registry.get("docker").unwrap().is_applicable());
        assert!(registry.get("celery").is_none());
    }
}
