//! TOML presets describing a whole configuration.
//!
//! ```toml
//! [project]
//! name = "shop"
//! archetype = "crud"
//! database = "postgresql"
//!
//! [style]
//! async = true
//!
//! [features]
//! monitoring = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    Archetype, AuthKind, Configuration, ConfigurationBuilder, DatabaseKind, Features,
    configuration::DEFAULT_RUNTIME_VERSION,
    error::{ConfigurationError, Result},
};

/// Default file name looked up for presets.
pub const PRESET_FILE: &str = "startfast.toml";

/// A serialized configuration, minus the output path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    pub project: ProjectSection,
    #[serde(default)]
    pub style: StyleSection,
    #[serde(default)]
    pub features: FeaturesSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    pub name: String,
    #[serde(default)]
    pub archetype: Archetype,
    #[serde(default)]
    pub database: DatabaseKind,
    #[serde(default)]
    pub auth: AuthKind,
    #[serde(default = "default_runtime_version")]
    pub runtime_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSection {
    #[serde(rename = "async", default = "enabled")]
    pub is_async: bool,
    #[serde(rename = "advanced", default)]
    pub is_advanced: bool,
}

impl Default for StyleSection {
    fn default() -> Self {
        Self {
            is_async: true,
            is_advanced: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FeaturesSection {
    #[serde(default = "enabled")]
    pub docker: bool,
    #[serde(default = "enabled")]
    pub tests: bool,
    #[serde(default = "enabled")]
    pub docs: bool,
    #[serde(default)]
    pub monitoring: bool,
    #[serde(default)]
    pub background_tasks: bool,
}

impl Default for FeaturesSection {
    fn default() -> Self {
        Features::default().into()
    }
}

impl From<Features> for FeaturesSection {
    fn from(f: Features) -> Self {
        Self {
            docker: f.docker,
            tests: f.tests,
            docs: f.docs,
            monitoring: f.monitoring,
            background_tasks: f.background_tasks,
        }
    }
}

impl From<&FeaturesSection> for Features {
    fn from(f: &FeaturesSection) -> Self {
        Self {
            docker: f.docker,
            tests: f.tests,
            docs: f.docs,
            monitoring: f.monitoring,
            background_tasks: f.background_tasks,
        }
    }
}

fn enabled() -> bool {
    true
}

fn default_runtime_version() -> String {
    DEFAULT_RUNTIME_VERSION.to_string()
}

impl Preset {
    /// Read and parse a preset file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(ConfigurationError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a preset with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigurationError::parse(e, content, filename))
    }

    /// Capture an existing configuration.
    pub fn from_configuration(config: &Configuration) -> Self {
        Self {
            project: ProjectSection {
                name: config.name().to_string(),
                archetype: config.archetype(),
                database: config.database(),
                auth: config.auth(),
                runtime_version: config.runtime_version().to_string(),
            },
            style: StyleSection {
                is_async: config.is_async(),
                is_advanced: config.is_advanced(),
            },
            features: config.features().into(),
        }
    }

    /// Turn the preset into a builder targeting `output_path`, so callers can
    /// still override individual values.
    pub fn into_builder(self, output_path: impl Into<PathBuf>) -> ConfigurationBuilder {
        let features = Features::from(&self.features);
        Configuration::builder(self.project.name, output_path)
            .archetype(self.project.archetype)
            .database(self.project.database)
            .auth(self.project.auth)
            .runtime_version(self.project.runtime_version)
            .is_async(self.style.is_async)
            .is_advanced(self.style.is_advanced)
            .features(features)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Box::new(ConfigurationError::from(e)))
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| {
            Box::new(ConfigurationError::Write {
                path: path.to_path_buf(),
                source: e,
            })
        })
    }
}

impl std::str::FromStr for Preset {
    type Err = Box<ConfigurationError>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, PRESET_FILE)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_minimal_preset_uses_defaults() {
        let preset = Preset::from_str("[project]\nname = \"orders\"\n").unwrap();
        let config = preset.into_builder("/tmp/orders").build().unwrap();
        let defaults = Configuration::builder("orders", "/tmp/orders")
            .build()
            .unwrap();

        assert_eq!(config, defaults);
    }

    #[test]
    fn test_full_preset() {
        let preset = Preset::from_str(
            r#"
            [project]
            name = "shop"
            archetype = "crud"
            database = "postgresql"
            auth = "api-key"
            runtime_version = "3.12"

            [style]
            async = false
            advanced = true

            [features]
            docker = false
            docs = false
            monitoring = true
            background_tasks = true
            "#,
        )
        .unwrap();

        let config = preset.into_builder("out").build().unwrap();
        assert_eq!(config.archetype(), Archetype::Crud);
        assert_eq!(config.database(), DatabaseKind::Postgresql);
        assert_eq!(config.auth(), AuthKind::ApiKey);
        assert_eq!(config.runtime_version(), "3.12");
        assert!(!config.is_async());
        assert!(config.is_advanced());
        assert!(!config.features().docker);
        assert!(config.features().tests);
        assert!(!config.features().docs);
        assert!(config.features().monitoring);
        assert!(config.features().background_tasks);
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Preset::from_str("[project]\nname = \"x\"\nframework = \"flask\"\n").unwrap_err();
        assert!(matches!(*err, ConfigurationError::Parse { .. }));
    }

    #[test]
    fn test_unknown_variant_is_parse_error() {
        let err = Preset::from_str("[project]\nname = \"x\"\ndatabase = \"oracle\"\n").unwrap_err();
        assert!(matches!(*err, ConfigurationError::Parse { .. }));
    }

    #[test]
    fn test_name_still_validated() {
        let preset = Preset::from_str("[project]\nname = \"bad name\"\n").unwrap();
        assert!(preset.into_builder(".").build().is_err());
    }

    #[test]
    fn test_serialized_preset_parses_back() {
        let config = Configuration::builder("ml-svc", "out")
            .archetype(Archetype::MlApi)
            .database(DatabaseKind::Mongodb)
            .auth(AuthKind::Oauth2)
            .monitoring(true)
            .build()
            .unwrap();

        let text = Preset::from_configuration(&config)
            .to_toml_string()
            .unwrap();
        assert!(text.contains("archetype = \"ml-api\""));

        let reparsed = Preset::from_str(&text)
            .unwrap()
            .into_builder("out")
            .build()
            .unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = Preset::from_file(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, ConfigurationError::Io { .. }));
    }
}
