//! The immutable configuration for one scaffolding run.

use std::path::{Path, PathBuf};

use startfast_core::{to_kebab_case, to_pascal_case, to_snake_case};

use crate::{
    Archetype, AuthKind, DatabaseKind,
    error::{ConfigurationError, Result},
};

/// Default runtime version substituted into generated build files.
pub const DEFAULT_RUNTIME_VERSION: &str = "3.11";

/// Optional parts of the generated service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub docker: bool,
    pub tests: bool,
    pub docs: bool,
    pub monitoring: bool,
    pub background_tasks: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            docker: true,
            tests: true,
            docs: true,
            monitoring: false,
            background_tasks: false,
        }
    }
}

/// Every axis value and feature flag for a single run.
///
/// Constructed through [`ConfigurationBuilder`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    name: String,
    output_path: PathBuf,
    archetype: Archetype,
    database: DatabaseKind,
    auth: AuthKind,
    is_async: bool,
    is_advanced: bool,
    features: Features,
    runtime_version: String,
}

impl Configuration {
    pub fn builder(
        name: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> ConfigurationBuilder {
        ConfigurationBuilder::new(name, output_path)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn snake_name(&self) -> String {
        to_snake_case(&self.name)
    }

    pub fn pascal_name(&self) -> String {
        to_pascal_case(&self.name)
    }

    pub fn kebab_name(&self) -> String {
        to_kebab_case(&self.name)
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn database(&self) -> DatabaseKind {
        self.database
    }

    /// Connection URL for the configured backend and style.
    pub fn database_url(&self) -> &'static str {
        self.database.default_url(self.is_async)
    }

    pub fn auth(&self) -> AuthKind {
        self.auth
    }

    pub fn is_async(&self) -> bool {
        self.is_async
    }

    pub fn is_advanced(&self) -> bool {
        self.is_advanced
    }

    pub fn features(&self) -> Features {
        self.features
    }

    pub fn runtime_version(&self) -> &str {
        &self.runtime_version
    }
}

/// Builder for [`Configuration`], starting from the documented defaults.
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    name: String,
    output_path: PathBuf,
    archetype: Archetype,
    database: DatabaseKind,
    auth: AuthKind,
    is_async: bool,
    is_advanced: bool,
    features: Features,
    runtime_version: String,
}

impl ConfigurationBuilder {
    pub fn new(name: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            output_path: output_path.into(),
            archetype: Archetype::default(),
            database: DatabaseKind::default(),
            auth: AuthKind::default(),
            is_async: true,
            is_advanced: false,
            features: Features::default(),
            runtime_version: DEFAULT_RUNTIME_VERSION.to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = archetype;
        self
    }

    pub fn database(mut self, database: DatabaseKind) -> Self {
        self.database = database;
        self
    }

    pub fn auth(mut self, auth: AuthKind) -> Self {
        self.auth = auth;
        self
    }

    pub fn is_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    pub fn is_advanced(mut self, is_advanced: bool) -> Self {
        self.is_advanced = is_advanced;
        self
    }

    pub fn features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn docker(mut self, enabled: bool) -> Self {
        self.features.docker = enabled;
        self
    }

    pub fn tests(mut self, enabled: bool) -> Self {
        self.features.tests = enabled;
        self
    }

    pub fn docs(mut self, enabled: bool) -> Self {
        self.features.docs = enabled;
        self
    }

    pub fn monitoring(mut self, enabled: bool) -> Self {
        self.features.monitoring = enabled;
        self
    }

    pub fn background_tasks(mut self, enabled: bool) -> Self {
        self.features.background_tasks = enabled;
        self
    }

    pub fn runtime_version(mut self, version: impl Into<String>) -> Self {
        self.runtime_version = version.into();
        self
    }

    /// Validate the name and freeze the configuration.
    pub fn build(self) -> Result<Configuration> {
        validate_name(&self.name)?;

        Ok(Configuration {
            name: self.name,
            output_path: self.output_path,
            archetype: self.archetype,
            database: self.database,
            auth: self.auth,
            is_async: self.is_async,
            is_advanced: self.is_advanced,
            features: self.features,
            runtime_version: self.runtime_version,
        })
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Box::new(ConfigurationError::EmptyName));
    }

    if let Some((offset, character)) = name
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(Box::new(ConfigurationError::InvalidName {
            name: name.to_string(),
            character,
            offset,
        }));
    }

    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(Box::new(ConfigurationError::SeparatorOnlyName {
            name: name.to_string(),
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::builder("orders", "/tmp/orders")
            .build()
            .unwrap();

        assert_eq!(config.archetype(), Archetype::Api);
        assert_eq!(config.database(), DatabaseKind::Sqlite);
        assert_eq!(config.auth(), AuthKind::Jwt);
        assert!(config.is_async());
        assert!(!config.is_advanced());
        assert_eq!(config.features(), Features::default());
        assert!(config.features().docker);
        assert!(config.features().tests);
        assert!(config.features().docs);
        assert!(!config.features().monitoring);
        assert!(!config.features().background_tasks);
        assert_eq!(config.runtime_version(), "3.11");
    }

    #[test]
    fn test_derived_names() {
        let config = Configuration::builder("user-service", ".").build().unwrap();

        assert_eq!(config.snake_name(), "user_service");
        assert_eq!(config.pascal_name(), "UserService");
        assert_eq!(config.kebab_name(), "user-service");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Configuration::builder("", ".").build().unwrap_err();
        assert!(matches!(*err, ConfigurationError::EmptyName));
    }

    #[test]
    fn test_invalid_character_rejected() {
        let err = Configuration::builder("my app", ".").build().unwrap_err();
        match *err {
            ConfigurationError::InvalidName {
                character, offset, ..
            } => {
                assert_eq!(character, ' ');
                assert_eq!(offset, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(Configuration::builder("../escape", ".").build().is_err());
        assert!(Configuration::builder("café", ".").build().is_err());
    }

    #[test]
    fn test_separator_only_name_rejected() {
        for name in ["-", "_", "--", "_-_"] {
            let err = Configuration::builder(name, ".").build().unwrap_err();
            assert!(
                matches!(&*err, ConfigurationError::SeparatorOnlyName { name: n } if n == name),
                "{name} was accepted"
            );
        }

        assert!(Configuration::builder("_a", ".").build().is_ok());
        assert!(Configuration::builder("9-", ".").build().is_ok());
    }

    #[test]
    fn test_no_cross_field_validation() {
        // Odd but legal combinations are accepted as-is
        let config = Configuration::builder("cache", ".")
            .archetype(Archetype::MlApi)
            .database(DatabaseKind::Redis)
            .auth(AuthKind::None)
            .is_async(false)
            .background_tasks(true)
            .build()
            .unwrap();

        assert_eq!(config.database(), DatabaseKind::Redis);
        assert!(config.features().background_tasks);
    }

    #[test]
    fn test_runtime_version_is_verbatim() {
        let config = Configuration::builder("svc", ".")
            .runtime_version("3.12-slim")
            .build()
            .unwrap();
        assert_eq!(config.runtime_version(), "3.12-slim");
    }
}
