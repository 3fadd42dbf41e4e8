//! Security module and, for user-based schemes, the account endpoints.

use startfast_config::{AuthKind, Configuration};
use startfast_engine::{Emitter, Generator, Result};

use super::{Artifact, emit_all};

pub struct AuthGenerator<'a> {
    config: &'a Configuration,
}

impl<'a> AuthGenerator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// The security template for the configured scheme.
    pub fn security_template(&self) -> Option<&'static str> {
        match (self.config.auth(), self.config.is_async()) {
            (AuthKind::None, _) => None,
            (AuthKind::Jwt, true) => Some("auth/security_jwt_async.py.j2"),
            (AuthKind::Jwt, false) => Some("auth/security_jwt_sync.py.j2"),
            (AuthKind::Oauth2, _) => Some("auth/security_oauth2.py.j2"),
            (AuthKind::ApiKey, _) => Some("auth/security_api_key.py.j2"),
        }
    }

    pub fn artifacts(&self) -> Vec<Artifact> {
        let Some(security) = self.security_template() else {
            return Vec::new();
        };

        let mut artifacts = vec![("app/core/security.py", security)];
        if self.config.auth().has_users() {
            artifacts.extend([
                ("app/models/auth.py", "auth/models.py.j2"),
                ("app/schemas/auth.py", "auth/schemas.py.j2"),
                ("app/api/v1/auth.py", "auth/endpoints.py.j2"),
            ]);
        }
        artifacts
    }
}

impl Generator for AuthGenerator<'_> {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn is_applicable(&self) -> bool {
        self.config.auth().is_enabled()
    }

    fn run(&self, out: &mut Emitter<'_, '_>) -> Result<()> {
        emit_all(out, &self.artifacts())?;
        if self.config.auth() == AuthKind::ApiKey {
            out.note("set API_KEYS in .env to a comma-separated list of accepted keys");
        }
        Ok(())
    }
}
