use std::path::PathBuf;

use clap::Args;
use startfast_config::{
    Archetype, AuthKind, Configuration, ConfigurationBuilder, DatabaseKind, Preset,
};

/// Flags shared by every command that describes a project.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Project name (also the name of the generated directory)
    #[arg(required_unless_present = "preset")]
    pub name: Option<String>,

    /// Directory the project is created in
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Project type: api, crud, ml-api or microservice
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub archetype: Option<Archetype>,

    /// Database: sqlite, postgresql, mysql, mongodb or redis
    #[arg(long)]
    pub database: Option<DatabaseKind>,

    /// Authentication: none, jwt, oauth2 or api-key
    #[arg(long)]
    pub auth: Option<AuthKind>,

    /// Generate blocking code instead of async
    #[arg(long)]
    pub sync: bool,

    /// Include advanced features (rate limiting, caching, beat schedules)
    #[arg(long)]
    pub advanced: bool,

    /// Skip Docker files
    #[arg(long)]
    pub no_docker: bool,

    /// Skip the test suite
    #[arg(long)]
    pub no_tests: bool,

    /// Skip documentation
    #[arg(long)]
    pub no_docs: bool,

    /// Add Prometheus metrics and a Grafana dashboard
    #[arg(long)]
    pub monitoring: bool,

    /// Add Celery background tasks
    #[arg(long)]
    pub celery: bool,

    /// Python version for the Dockerfile and docs
    #[arg(long, value_name = "VERSION")]
    pub python_version: Option<String>,

    /// Start from a TOML preset; other flags override its values
    #[arg(long, value_name = "FILE")]
    pub preset: Option<PathBuf>,
}

impl ProjectArgs {
    /// Resolve the flags (and preset, if any) into a validated configuration.
    ///
    /// The project lands in `<path>/<name>`.
    pub fn configuration(&self) -> startfast_config::Result<Configuration> {
        let preset = self.preset.as_ref().map(Preset::from_file).transpose()?;

        let name = match (&self.name, &preset) {
            (Some(name), _) => name.clone(),
            (None, Some(preset)) => preset.project.name.clone(),
            // Rejected by clap; build() reports it as an empty name otherwise.
            (None, None) => String::new(),
        };
        let output = self.path.join(&name);

        let builder = match preset {
            Some(preset) => preset.into_builder(output).name(name),
            None => Configuration::builder(name, output),
        };
        self.apply(builder).build()
    }

    /// Explicit flags win over preset values; absent flags leave them alone.
    fn apply(&self, mut builder: ConfigurationBuilder) -> ConfigurationBuilder {
        if let Some(archetype) = self.archetype {
            builder = builder.archetype(archetype);
        }
        if let Some(database) = self.database {
            builder = builder.database(database);
        }
        if let Some(auth) = self.auth {
            builder = builder.auth(auth);
        }
        if self.sync {
            builder = builder.is_async(false);
        }
        if self.advanced {
            builder = builder.is_advanced(true);
        }
        if self.no_docker {
            builder = builder.docker(false);
        }
        if self.no_tests {
            builder = builder.tests(false);
        }
        if self.no_docs {
            builder = builder.docs(false);
        }
        if self.monitoring {
            builder = builder.monitoring(true);
        }
        if self.celery {
            builder = builder.background_tasks(true);
        }
        if let Some(version) = &self.python_version {
            builder = builder.runtime_version(version.clone());
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;
    use startfast_config::DEFAULT_RUNTIME_VERSION;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        project: ProjectArgs,
    }

    fn parse(args: &[&str]) -> ProjectArgs {
        let argv = std::iter::once("startfast").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().project
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["shop"]).configuration().unwrap();

        assert_eq!(config.name(), "shop");
        assert_eq!(config.output_path(), Path::new("./shop"));
        assert_eq!(config.archetype(), Archetype::Api);
        assert_eq!(config.database(), DatabaseKind::Sqlite);
        assert_eq!(config.auth(), AuthKind::Jwt);
        assert!(config.is_async());
        assert!(!config.is_advanced());
        assert_eq!(config.runtime_version(), DEFAULT_RUNTIME_VERSION);

        let features = config.features();
        assert!(features.docker && features.tests && features.docs);
        assert!(!features.monitoring && !features.background_tasks);
    }

    #[test]
    fn test_flags() {
        let config = parse(&[
            "orders",
            "--path",
            "/tmp/work",
            "-t",
            "crud",
            "--database",
            "postgres",
            "--auth",
            "jwt",
            "--sync",
            "--advanced",
            "--no-docker",
            "--no-docs",
            "--monitoring",
            "--celery",
            "--python-version",
            "3.12",
        ])
        .configuration()
        .unwrap();

        assert_eq!(config.output_path(), Path::new("/tmp/work/orders"));
        assert_eq!(config.archetype(), Archetype::Crud);
        assert_eq!(config.database(), DatabaseKind::Postgresql);
        assert_eq!(config.auth(), AuthKind::Jwt);
        assert!(!config.is_async());
        assert!(config.is_advanced());
        assert_eq!(config.runtime_version(), "3.12");

        let features = config.features();
        assert!(!features.docker && features.tests && !features.docs);
        assert!(features.monitoring && features.background_tasks);
    }

    #[test]
    fn test_unknown_axis_value_is_rejected() {
        let argv = ["startfast", "shop", "--database", "oracle"];
        assert!(TestCli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_name_required_without_preset() {
        assert!(TestCli::try_parse_from(["startfast"]).is_err());
    }

    #[test]
    fn test_invalid_name_is_a_configuration_error() {
        let err = parse(&["my shop"]).configuration().unwrap_err();
        assert!(err.to_string().contains("my shop"));
    }

    #[test]
    fn test_preset_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("startfast.toml");
        std::fs::write(
            &preset,
            r#"
[project]
name = "billing"
archetype = "crud"
database = "mongodb"

[style]
advanced = true

[features]
docs = false
"#,
        )
        .unwrap();
        let preset = preset.to_str().unwrap();

        let config = parse(&["--preset", preset, "--auth", "api-key", "--sync"])
            .configuration()
            .unwrap();
        assert_eq!(config.name(), "billing");
        assert_eq!(config.output_path(), Path::new("./billing"));
        assert_eq!(config.archetype(), Archetype::Crud);
        assert_eq!(config.database(), DatabaseKind::Mongodb);
        assert_eq!(config.auth(), AuthKind::ApiKey);
        assert!(!config.is_async());
        assert!(config.is_advanced());
        assert!(!config.features().docs);

        let renamed = parse(&["invoices", "--preset", preset])
            .configuration()
            .unwrap();
        assert_eq!(renamed.name(), "invoices");
        assert_eq!(renamed.output_path(), Path::new("./invoices"));
    }

    #[test]
    fn test_preset_matches_equivalent_flags() {
        let dir = tempfile::tempdir().unwrap();
        let from_flags = parse(&["svc", "-t", "ml-api", "--database", "redis", "--monitoring"])
            .configuration()
            .unwrap();

        let preset = dir.path().join("svc.toml");
        Preset::from_configuration(&from_flags)
            .write(&preset)
            .unwrap();

        let from_preset = parse(&["--preset", preset.to_str().unwrap()])
            .configuration()
            .unwrap();
        assert_eq!(from_preset, from_flags);
    }

    #[test]
    fn test_missing_preset() {
        let err = parse(&["--preset", "does-not-exist.toml"])
            .configuration()
            .unwrap_err();
        assert!(err.to_string().contains("does-not-exist.toml"));
    }
}
