use crate::utils::error::{ComicError, Result};
use std::fmt;
use std::path::Path;

pub const DEFAULT_ENV_FILE: &str = ".env";
/// Key looked up inside the env file.
pub const ENV_FILE_KEY: &str = "KEY";
/// Process environment fallback.
pub const API_KEY_ENV_VAR: &str = "OPEN_AI_KEY";

/// Bearer credential for the image API. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Loads the API key from `env_file`, falling back to `OPEN_AI_KEY`.
pub fn load_api_key(env_file: &Path) -> Result<ApiKey> {
    load_api_key_with(env_file, |name| std::env::var(name).ok())
}

/// Same as [`load_api_key`] with an injectable environment lookup.
///
/// The env file is read without touching the process environment. A blank
/// value in either source counts as absent.
pub fn load_api_key_with<F>(env_file: &Path, lookup: F) -> Result<ApiKey>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = read_env_file_value(env_file, ENV_FILE_KEY) {
        tracing::debug!("Using API key from {}", env_file.display());
        return Ok(ApiKey(value));
    }

    match lookup(API_KEY_ENV_VAR).filter(|v| !v.trim().is_empty()) {
        Some(value) => {
            tracing::debug!("Using API key from ${}", API_KEY_ENV_VAR);
            Ok(ApiKey(value))
        }
        None => Err(ComicError::ConfigurationMissing {
            key: ENV_FILE_KEY.to_string(),
            env_var: API_KEY_ENV_VAR.to_string(),
        }),
    }
}

/// Later assignments of `key` win over earlier ones. Unquoted and
/// double-quoted values expand `$NAME` and `${NAME}`; single-quoted values
/// are taken literally.
fn read_env_file_value(path: &Path, key: &str) -> Option<String> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("No usable env file at {}: {}", path.display(), e);
            return None;
        }
    };

    let mut found = None;
    for entry in entries {
        match entry {
            Ok((name, value)) if name == key => found = Some(value),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", path.display(), e);
            }
        }
    }

    found.filter(|v| !v.trim().is_empty())
}
