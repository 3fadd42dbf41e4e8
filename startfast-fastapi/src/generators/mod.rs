//! The FastAPI generator catalogue.
//!
//! Each generator owns one concern of the generated service. Choosing a
//! variant (async or sync, relational or document, ...) happens in the
//! generator's `artifacts` method, which maps the configuration to
//! `(output path, template name)` pairs without rendering anything.

mod api;
mod auth;
mod config;
mod database;
mod docker;
mod docs;
mod environment;
mod main_app;
mod models;
mod monitoring;
mod requirements;
mod schemas;
mod services;
mod tasks;
mod tests;
mod utils;

pub use api::ApiGenerator;
pub use auth::AuthGenerator;
pub use config::ConfigGenerator;
pub use database::DatabaseGenerator;
pub use docker::DockerGenerator;
pub use docs::DocsGenerator;
pub use environment::EnvironmentGenerator;
pub use main_app::MainAppGenerator;
pub use models::ModelsGenerator;
pub use monitoring::MonitoringGenerator;
pub use requirements::RequirementsGenerator;
pub use schemas::SchemasGenerator;
pub use services::ServicesGenerator;
use startfast_config::Configuration;
use startfast_engine::{Emitter, GeneratorRegistry, Result};
pub use tasks::TasksGenerator;
pub use tests::TestsGenerator;
pub use utils::UtilsGenerator;

/// An output path and the template rendered into it.
pub type Artifact = (&'static str, &'static str);

/// Render every artifact with the base variables.
pub(crate) fn emit_all(out: &mut Emitter<'_, '_>, artifacts: &[Artifact]) -> Result<()> {
    for &(path, template) in artifacts {
        out.template(path, template)?;
    }
    Ok(())
}

/// All generators in precedence order.
pub fn registry(config: &Configuration) -> GeneratorRegistry<'_> {
    GeneratorRegistry::new()
        .with(RequirementsGenerator::new(config))
        .with(EnvironmentGenerator)
        .with(MainAppGenerator)
        .with(ConfigGenerator)
        .with(DatabaseGenerator::new(config))
        .with(AuthGenerator::new(config))
        .with(ApiGenerator::new(config))
        .with(ModelsGenerator::new(config))
        .with(SchemasGenerator::new(config))
        .with(ServicesGenerator::new(config))
        .with(UtilsGenerator)
        .with(DockerGenerator::new(config))
        .with(TestsGenerator::new(config))
        .with(DocsGenerator::new(config))
        .with(MonitoringGenerator::new(config))
        .with(TasksGenerator::new(config))
}
