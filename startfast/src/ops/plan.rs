//! Show what a run would do.

use eyre::{Context, Result};
use startfast_config::Configuration;
use startfast_engine::Orchestrator;
use startfast_fastapi::FastApi;

use crate::reports::PlanReport;

/// Compute the generator plan for `config` without rendering anything.
pub fn plan(config: &Configuration) -> Result<PlanReport> {
    let orchestrator =
        Orchestrator::new(config, &FastApi).wrap_err("Failed to load FastAPI templates")?;

    Ok(PlanReport {
        name: config.name().to_string(),
        plan: orchestrator.plan(),
    })
}
