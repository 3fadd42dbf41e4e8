//! The variable bag handed to every template.

use std::collections::BTreeMap;

use minijinja::Value;
use serde::Serialize;
use startfast_config::Configuration;

use crate::error::TemplateError;

/// Keys every bag built from a configuration carries.
pub const BASE_KEYS: &[&str] = &[
    "project_name",
    "project_name_snake",
    "project_name_pascal",
    "project_name_kebab",
    "project_type",
    "database_type",
    "database_family",
    "database_url",
    "auth_type",
    "is_async",
    "is_advanced",
    "python_version",
    "include_docker",
    "include_tests",
    "include_docs",
    "include_monitoring",
    "include_celery",
];

/// A string-keyed mapping of template variables.
///
/// Extra keys never shadow base keys silently: [`VariableBag::with`] rejects
/// them and [`VariableBag::replace`] must be used to override on purpose.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct VariableBag {
    values: BTreeMap<String, Value>,
}

impl VariableBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the base bag for a configuration.
    pub fn base(config: &Configuration) -> Self {
        let features = config.features();
        let mut bag = Self::new();
        let mut set = |key: &str, value: Value| {
            bag.values.insert(key.to_string(), value);
        };

        set("project_name", Value::from(config.name()));
        set("project_name_snake", Value::from(config.snake_name()));
        set("project_name_pascal", Value::from(config.pascal_name()));
        set("project_name_kebab", Value::from(config.kebab_name()));
        set("project_type", Value::from(config.archetype().as_str()));
        set("database_type", Value::from(config.database().as_str()));
        set(
            "database_family",
            Value::from(config.database().family().as_str()),
        );
        set("database_url", Value::from(config.database_url()));
        set("auth_type", Value::from(config.auth().as_str()));
        set("is_async", Value::from(config.is_async()));
        set("is_advanced", Value::from(config.is_advanced()));
        set("python_version", Value::from(config.runtime_version()));
        set("include_docker", Value::from(features.docker));
        set("include_tests", Value::from(features.tests));
        set("include_docs", Value::from(features.docs));
        set("include_monitoring", Value::from(features.monitoring));
        set("include_celery", Value::from(features.background_tasks));

        bag
    }

    /// Add a key that must not already be present.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Result<Self, TemplateError> {
        if self.values.contains_key(key) {
            return Err(TemplateError::ReservedVariable(key.to_string()));
        }
        self.values.insert(key.to_string(), value.into());
        Ok(self)
    }

    /// Set a key, replacing any existing value.
    pub fn replace(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
