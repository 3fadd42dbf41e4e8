use startfast_config::Configuration;
use startfast_engine::Layout;

/// Python packages every generated service has.
const APP_PACKAGES: &[&str] = &[
    "app",
    "app/api",
    "app/api/v1",
    "app/core",
    "app/db",
    "app/models",
    "app/schemas",
    "app/services",
    "app/utils",
];

/// The directory skeleton for a FastAPI service.
pub fn layout(config: &Configuration) -> Layout {
    let features = config.features();
    let mut layout = Layout::new();

    for package in APP_PACKAGES {
        layout.package(package);
    }

    if features.tests {
        layout.package("tests").package("tests/api");
        if config.archetype().has_items() {
            layout.package("tests/services");
        }
    }

    if features.docs {
        layout.plain("docs");
    }

    if features.monitoring {
        layout.plain("monitoring/grafana");
    }

    if features.background_tasks {
        layout.package("app/tasks").plain("scripts");
    }

    layout
}
