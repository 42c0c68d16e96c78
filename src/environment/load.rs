use std::path::Path;

use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::schema_for;
use tracing::debug;

use crate::environment::types::Environment;
use crate::error::EnvironmentError;

/// Prefix for environment-variable overrides, e.g.
/// `BREWENV_AUTH0__CLIENT_ID` overrides `auth0.clientId`.
pub const ENV_PREFIX: &str = "BREWENV_";

/// Build profile, mirroring the per-profile settings files authored next to
/// each other: `environment.yaml` and `environment.prod.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Prod,
}

impl Profile {
    pub fn overlay_file(&self) -> Option<&'static str> {
        match self {
            Profile::Dev => None,
            Profile::Prod => Some("environment.prod.yaml"),
        }
    }
}

/// Environment-variable override provider.
///
/// Variable names arrive upper-snake, so the known wire names are mapped
/// back to their camel-case spelling before `__` splits nesting:
/// `BREWENV_AUTH0__CLIENT_ID` becomes `auth0.clientId`.
fn env_overrides() -> Env {
    Env::prefixed(ENV_PREFIX)
        .map(|key| {
            key.as_str()
                .to_ascii_lowercase()
                .replace("api_server_url", "apiServerUrl")
                .replace("client_id", "clientId")
                .replace("callback_url", "callbackURL")
                .into()
        })
        .split("__")
        // Chained adapters reset the provider to lowercasing emitted keys,
        // which would mangle the camel-case names back to `apiserverurl`.
        .lowercase(false)
}

/// Load an environment record from a single YAML file, with env overrides
/// applied on top.
pub fn load_environment(path: impl AsRef<Path>) -> Result<Environment, EnvironmentError> {
    let path = path.as_ref();
    debug!("loading environment settings from {}", path.display());
    let environment = Figment::new()
        .merge(Yaml::file_exact(path))
        .merge(env_overrides())
        .extract()?;
    Ok(environment)
}

/// Load the environment for a build profile from a directory.
///
/// `environment.yaml` is always the base; the prod profile overlays
/// `environment.prod.yaml` on top of it before env overrides, so a prod
/// file only needs to state the fields that differ.
pub fn load_profile(
    dir: impl AsRef<Path>,
    profile: Profile,
) -> Result<Environment, EnvironmentError> {
    let dir = dir.as_ref();
    let mut figment = Figment::new().merge(Yaml::file_exact(dir.join("environment.yaml")));
    if let Some(overlay) = profile.overlay_file() {
        figment = figment.merge(Yaml::file_exact(dir.join(overlay)));
    }
    let environment = figment.merge(env_overrides()).extract()?;
    Ok(environment)
}

/// Print the JSON schema for the environment record to stdout.
pub fn print_schema() {
    let schema = schema_for!(Environment);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}
