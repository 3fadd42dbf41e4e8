//! Prometheus scrape config, Grafana dashboard and the metrics middleware.

use startfast_config::Configuration;
use startfast_engine::{Emitter, Generator, Result};

use super::{Artifact, emit_all};

const ARTIFACTS: &[Artifact] = &[
    ("monitoring/prometheus.yml", "monitoring/prometheus.yml.j2"),
    (
        "monitoring/grafana/dashboard.json",
        "monitoring/dashboard.json.j2",
    ),
    ("app/utils/monitoring.py", "monitoring/metrics.py.j2"),
];

pub struct MonitoringGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> MonitoringGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }
}

impl Generator for MonitoringGenerator<'_> {
    fn name(&self) -> &'static str {
        "monitoring"
    }

    fn is_applicable(&self) -> bool {
        self.config.features().monitoring
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        emit_all(out, ARTIFACTS)
    }
}
