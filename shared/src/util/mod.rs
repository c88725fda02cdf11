//! Provider and resource scaffolding

pub mod provider;
pub mod resource;

use std::env;

use jfrog_client::Client;

use crate::error::{Result, SharedError};

/// Shared configuration handed from the provider to every resource and
/// data source after a successful configure.
#[derive(Clone)]
pub struct ProviderMetadata {
    pub client: Client,
    pub product_id: String,
    pub artifactory_version: String,
    pub access_version: String,
    pub xray_version: String,
}

/// True when `version` is at least `supported_version`.
pub fn check_version(version: &str, supported_version: &str) -> Result<bool> {
    let checked = semver::Version::parse(version)
        .map_err(|_| SharedError::Version(version.to_string()))?;
    let supported = semver::Version::parse(supported_version)
        .map_err(|_| SharedError::Version(supported_version.to_string()))?;
    Ok(checked >= supported)
}

/// First non-empty value among the environment variables, else the default.
pub fn check_env_vars(vars: &[&str], default: &str) -> String {
    for var in vars {
        if let Ok(value) = env::var(var) {
            if !value.is_empty() {
                return value;
            }
        }
    }
    default.to_string()
}

/// Normalize a whitespace-separated word list into a sorted, comma-joined
/// string.
pub fn format_comma_separated_string(value: &str) -> String {
    let mut fields: Vec<&str> = value.split_whitespace().collect();
    fields.sort_unstable();
    fields.join(",")
}
