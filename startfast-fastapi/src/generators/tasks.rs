//! Celery worker, task module and scheduler configuration.

use startfast_config::Configuration;
use startfast_engine::{Emitter, Generator, Result};

use super::{Artifact, emit_all};

pub struct TasksGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> TasksGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    pub fn artifacts(&self) -> Vec<Artifact> {
        let mut artifacts = vec![
            ("app/tasks/celery_app.py", "tasks/celery_app.py.j2"),
            ("app/tasks/tasks.py", "tasks/tasks.py.j2"),
            ("scripts/start_worker.py", "tasks/start_worker.py.j2"),
        ];
        if self.config.is_advanced() {
            artifacts.push(("app/tasks/beat_config.py", "tasks/beat_config.py.j2"));
        }
        artifacts
    }
}

impl Generator for TasksGenerator<'_> {
    fn name(&self) -> &'static str {
        "tasks"
    }

    fn is_applicable(&self) -> bool {
        self.config.features().background_tasks
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        emit_all(out, &self.artifacts())?;
        out.note("start a worker with `python scripts/start_worker.py` once Redis is running");
        Ok(())
    }
}
