use startfast_engine::TemplateSource;

/// Embed each template under its path relative to `templates/`.
macro_rules! templates {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../templates/", $name)))),*]
    };
}

/// Every template the FastAPI generators render.
pub const TEMPLATES: &[TemplateSource] = templates![
    "requirements/requirements.txt.j2",
    "requirements/requirements-dev.txt.j2",
    "env/env.j2",
    "app/main.py.j2",
    "core/config.py.j2",
    "db/base.py.j2",
    "db/sqlalchemy_async.py.j2",
    "db/sqlalchemy_sync.py.j2",
    "db/mongo_async.py.j2",
    "db/mongo_sync.py.j2",
    "db/redis.py.j2",
    "auth/security_jwt_async.py.j2",
    "auth/security_jwt_sync.py.j2",
    "auth/security_oauth2.py.j2",
    "auth/security_api_key.py.j2",
    "auth/models.py.j2",
    "auth/schemas.py.j2",
    "auth/endpoints.py.j2",
    "api/items.py.j2",
    "api/ml.py.j2",
    "api/microservice.py.j2",
    "models/item_sqlalchemy.py.j2",
    "models/item_beanie.py.j2",
    "models/item_mongoengine.py.j2",
    "models/prediction.py.j2",
    "schemas/common.py.j2",
    "schemas/item.py.j2",
    "schemas/prediction.py.j2",
    "schemas/processing.py.j2",
    "services/item_sqlalchemy_async.py.j2",
    "services/item_sqlalchemy_sync.py.j2",
    "services/item_beanie.py.j2",
    "services/item_mongoengine.py.j2",
    "services/item_redis.py.j2",
    "services/prediction.py.j2",
    "services/processing.py.j2",
    "utils/helpers.py.j2",
    "utils/logging.py.j2",
    "utils/validation.py.j2",
    "docker/Dockerfile.j2",
    "docker/docker-compose.yml.j2",
    "docker/dockerignore.j2",
    "tests/conftest.py.j2",
    "tests/test_endpoints.py.j2",
    "tests/test_item_service.py.j2",
    "tests/test_auth.py.j2",
    "tests/pytest.ini.j2",
    "docs/api.md.j2",
    "docs/deployment.md.j2",
    "docs/development.md.j2",
    "docs/configuration.md.j2",
    "docs/CONTRIBUTING.md.j2",
    "monitoring/prometheus.yml.j2",
    "monitoring/dashboard.json.j2",
    "monitoring/metrics.py.j2",
    "tasks/celery_app.py.j2",
    "tasks/tasks.py.j2",
    "tasks/start_worker.py.j2",
    "tasks/beat_config.py.j2",
    "project/README.md.j2",
    "project/gitignore.j2",
    "project/env.template.j2",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_template_names_are_unique() {
        let names: HashSet<&str> = TEMPLATES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), TEMPLATES.len());
    }

    #[test]
    fn test_templates_are_not_empty() {
        for (name, source) in TEMPLATES {
            assert!(!source.trim().is_empty(), "{name} is empty");
        }
    }
}
