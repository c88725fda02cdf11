//! Provider lifecycle scaffolding
//!
//! `JFrogProvider` owns the configure flow every provider in the family
//! shares: resolve the platform URL and credentials from configuration and
//! environment, optionally run the OIDC token exchange, build the
//! authenticated client, probe product versions, and fire the usage beacon.

use async_trait::async_trait;
use jfrog_client::{oidc_token_exchange, send_usage, Client};

use crate::schema::{AttributeBuilder, AttributeType, Schema, SchemaBuilder};
use crate::types::{Diagnostics, Dynamic};
use crate::util::{check_env_vars, ProviderMetadata};
use crate::validator::string;

pub const URL_ENV_VARS: &[&str] = &["JFROG_URL"];
pub const ACCESS_TOKEN_ENV_VARS: &[&str] = &["JFROG_ACCESS_TOKEN"];

pub struct ConfigureProviderRequest {
    pub config: Dynamic,
    pub terraform_version: String,
}

pub struct ConfigureProviderResponse {
    pub diagnostics: Diagnostics,
    pub metadata: Option<ProviderMetadata>,
}

pub struct ProviderMetadataResponse {
    pub type_name: String,
    pub version: String,
}

/// Top-level plugin object
#[async_trait]
pub trait Provider: Send + Sync {
    fn metadata(&self) -> ProviderMetadataResponse;

    fn schema(&self) -> Schema;

    async fn configure(&mut self, request: ConfigureProviderRequest) -> ConfigureProviderResponse;
}

pub struct JFrogProvider {
    pub type_name: String,
    pub version: String,
    pub product_id: String,
    pub metadata: Option<ProviderMetadata>,
}

impl JFrogProvider {
    pub fn new(type_name: &str, version: &str, product_id: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            version: version.to_string(),
            product_id: product_id.to_string(),
            metadata: None,
        }
    }
}

fn config_string(config: &Dynamic, key: &str) -> String {
    config
        .get_attr(key)
        .and_then(Dynamic::as_str)
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl Provider for JFrogProvider {
    fn metadata(&self) -> ProviderMetadataResponse {
        ProviderMetadataResponse {
            type_name: self.type_name.clone(),
            version: self.version.clone(),
        }
    }

    fn schema(&self) -> Schema {
        SchemaBuilder::new()
            .attribute(
                AttributeBuilder::new("url", AttributeType::String)
                    .optional()
                    .description(
                        "JFrog Platform URL. This can also be sourced from the `JFROG_URL` \
                         environment variable.",
                    )
                    .validator(string::is_url_http_or_https())
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("access_token", AttributeType::String)
                    .optional()
                    .sensitive()
                    .description(
                        "This is an access token that can be given to you by your admin under \
                         `Platform Configuration -> User Management -> Access Tokens`. This can \
                         also be sourced from the `JFROG_ACCESS_TOKEN` environment variable.",
                    )
                    .validator(string::length_at_least(1))
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("oidc_provider_name", AttributeType::String)
                    .optional()
                    .description("OIDC provider name for the platform's OIDC integration.")
                    .validator(string::length_at_least(1))
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("tfc_credential_tag_name", AttributeType::String)
                    .optional()
                    .description(
                        "Terraform Cloud Workload Identity Token tag name. When set, the \
                         provider reads the env var with this tag name as suffix, e.g. \
                         `TFC_WORKLOAD_IDENTITY_TOKEN_JFROG` instead of \
                         `TFC_WORKLOAD_IDENTITY_TOKEN`. The tag is case sensitive.",
                    )
                    .validator(string::length_at_least(1))
                    .build(),
            )
            .build()
    }

    async fn configure(&mut self, request: ConfigureProviderRequest) -> ConfigureProviderResponse {
        let mut diagnostics = Diagnostics::new();

        // Environment first; configuration attributes take precedence below
        let mut url = check_env_vars(URL_ENV_VARS, "");
        let mut access_token = check_env_vars(ACCESS_TOKEN_ENV_VARS, "");

        let config_url = config_string(&request.config, "url");
        if !config_url.is_empty() {
            url = config_url;
        }

        if url.is_empty() {
            diagnostics.add_error(
                "Missing URL Configuration",
                Some(
                    "While configuring the provider, the url was not found in the JFROG_URL \
                     environment variable or provider configuration block url attribute.",
                ),
            );
            return ConfigureProviderResponse {
                diagnostics,
                metadata: None,
            };
        }

        let client = match Client::build(&url, &self.product_id) {
            Ok(client) => client,
            Err(err) => {
                diagnostics.add_error("Error creating client", Some(err.to_string()));
                return ConfigureProviderResponse {
                    diagnostics,
                    metadata: None,
                };
            }
        };

        // OIDC token takes precedence over environment data
        let oidc_provider_name = config_string(&request.config, "oidc_provider_name");
        if !oidc_provider_name.is_empty() {
            let tag = config_string(&request.config, "tfc_credential_tag_name");
            match oidc_token_exchange(&client, &oidc_provider_name, &tag).await {
                Ok(token) if !token.is_empty() => access_token = token,
                Ok(_) => {}
                Err(err) => {
                    diagnostics.add_error("Failed OIDC ID token exchange", Some(err.to_string()));
                    return ConfigureProviderResponse {
                        diagnostics,
                        metadata: None,
                    };
                }
            }
        }

        // The configuration attribute wins over both env var and OIDC
        let config_token = config_string(&request.config, "access_token");
        if !config_token.is_empty() {
            access_token = config_token;
        }

        if access_token.is_empty() {
            diagnostics.add_warning(
                "Missing JFrog Access Token",
                Some(
                    "Access Token was not found in the JFROG_ACCESS_TOKEN environment variable, \
                     provider configuration block access_token attribute, or Terraform Cloud \
                     TFC_WORKLOAD_IDENTITY_TOKEN environment variable. Platform functionality \
                     will be affected.",
                ),
            );
        }

        let mut artifactory_version = String::new();
        let mut access_version = String::new();

        let client = if !access_token.is_empty() {
            let client = match client.add_auth(None, Some(access_token.as_str())) {
                Ok(client) => client,
                Err(err) => {
                    diagnostics.add_error("Error adding auth to client", Some(err.to_string()));
                    return ConfigureProviderResponse {
                        diagnostics,
                        metadata: None,
                    };
                }
            };

            match client.get_artifactory_version().await {
                Ok(version) => artifactory_version = version,
                Err(err) => diagnostics.add_warning(
                    "Error getting Artifactory version",
                    Some(format!(
                        "Provider functionality might be affected by the absence of Artifactory \
                         version. {err}"
                    )),
                ),
            }

            match client.get_access_version().await {
                Ok(version) => access_version = version,
                Err(err) => diagnostics.add_warning(
                    "Error getting Access version",
                    Some(format!(
                        "Provider functionality might be affected by the absence of Access \
                         version. {err}"
                    )),
                ),
            }

            client
        } else {
            client
        };

        // Best effort, off the configure path
        let beacon = client.clone();
        let product_id = self.product_id.clone();
        let feature_usage = format!("Terraform/{}", request.terraform_version);
        tokio::spawn(async move {
            send_usage(&beacon, &product_id, &[&feature_usage]).await;
        });

        let metadata = ProviderMetadata {
            client,
            product_id: self.product_id.clone(),
            artifactory_version,
            access_version,
            xray_version: String::new(),
        };
        self.metadata = Some(metadata.clone());

        ConfigureProviderResponse {
            diagnostics,
            metadata: Some(metadata),
        }
    }
}
