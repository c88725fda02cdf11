//! Resource lifecycle scaffolding
//!
//! `JFrogResource` carries the behaviors every resource in the provider
//! family shares: adopting the provider metadata, gating on minimum product
//! versions, the once-per-process catalog health probe, and per-verb usage
//! reporting. Concrete resources embed it and implement the `Resource`
//! trait on top.

use async_trait::async_trait;
use jfrog_client::usage::{resource_feature_usage, send_usage};
use jfrog_client::{Client, ClientError};
use tokio::sync::OnceCell;

use crate::error::{Result, SharedError};
use crate::schema::Schema;
use crate::types::{Diagnostics, Dynamic, ResourceState};
use crate::util::{check_version, ProviderMetadata};

pub struct ResourceMetadataResponse {
    pub type_name: String,
}

pub struct ConfigureResourceRequest {
    pub provider_data: Option<ProviderMetadata>,
}

pub struct ConfigureResourceResponse {
    pub diagnostics: Diagnostics,
}

pub struct ValidateResourceConfigRequest {
    pub config: Dynamic,
}

pub struct ValidateResourceConfigResponse {
    pub diagnostics: Diagnostics,
}

pub struct CreateResourceRequest {
    pub planned_state: ResourceState,
    pub config: Dynamic,
}

pub struct CreateResourceResponse {
    pub new_state: ResourceState,
    pub diagnostics: Diagnostics,
}

pub struct ReadResourceRequest {
    pub current_state: ResourceState,
}

pub struct ReadResourceResponse {
    /// None when the remote object no longer exists
    pub new_state: Option<ResourceState>,
    pub diagnostics: Diagnostics,
}

pub struct UpdateResourceRequest {
    pub prior_state: ResourceState,
    pub planned_state: ResourceState,
    pub config: Dynamic,
}

pub struct UpdateResourceResponse {
    pub new_state: ResourceState,
    pub diagnostics: Diagnostics,
}

pub struct DeleteResourceRequest {
    pub prior_state: ResourceState,
}

pub struct DeleteResourceResponse {
    pub diagnostics: Diagnostics,
}

/// A managed object's lifecycle hooks
#[async_trait]
pub trait Resource: Send + Sync {
    fn type_name(&self) -> &str;

    fn schema(&self) -> Schema;

    async fn configure(&mut self, request: ConfigureResourceRequest) -> ConfigureResourceResponse;

    async fn validate(
        &self,
        request: ValidateResourceConfigRequest,
    ) -> ValidateResourceConfigResponse;

    async fn create(&self, request: CreateResourceRequest) -> CreateResourceResponse;

    async fn read(&self, request: ReadResourceRequest) -> ReadResourceResponse;

    async fn update(&self, request: UpdateResourceRequest) -> UpdateResourceResponse;

    async fn delete(&self, request: DeleteResourceRequest) -> DeleteResourceResponse;
}

static CATALOG_HEALTH: OnceCell<std::result::Result<(), String>> = OnceCell::const_new();

async fn check_catalog_health(client: &Client) -> std::result::Result<(), ClientError> {
    client
        .get_text("/catalog/api/v1/system/ping")
        .await
        .map(|_| ())
}

/// Shared behavior embedded by concrete resources
#[derive(Default)]
pub struct JFrogResource {
    pub provider_data: Option<ProviderMetadata>,
    pub type_name: String,
    pub min_artifactory_version: Option<String>,
    pub min_xray_version: Option<String>,
    pub catalog_health_required: bool,
    pub document_endpoint: Option<String>,
    pub collection_endpoint: Option<String>,
}

impl JFrogResource {
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            ..Self::default()
        }
    }

    pub fn metadata(&self) -> ResourceMetadataResponse {
        ResourceMetadataResponse {
            type_name: self.type_name.clone(),
        }
    }

    /// Adopt provider metadata. A None provider_data means the provider has
    /// not been configured yet; that is not an error.
    pub fn configure(&mut self, request: ConfigureResourceRequest) -> ConfigureResourceResponse {
        if let Some(metadata) = request.provider_data {
            self.provider_data = Some(metadata);
        }
        ConfigureResourceResponse {
            diagnostics: Diagnostics::new(),
        }
    }

    /// Minimum-Artifactory-version gate
    pub fn validate_config(&self) -> ValidateResourceConfigResponse {
        ValidateResourceConfigResponse {
            diagnostics: self.version_gate(
                self.min_artifactory_version.as_deref(),
                self.provider_data
                    .as_ref()
                    .map(|m| m.artifactory_version.as_str()),
                "Artifactory",
            ),
        }
    }

    /// Minimum-Xray-version gate
    pub fn validate_xray_config(&self) -> ValidateResourceConfigResponse {
        ValidateResourceConfigResponse {
            diagnostics: self.version_gate(
                self.min_xray_version.as_deref(),
                self.provider_data.as_ref().map(|m| m.xray_version.as_str()),
                "Xray",
            ),
        }
    }

    fn version_gate(
        &self,
        minimum: Option<&str>,
        current: Option<&str>,
        product: &str,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        let (Some(minimum), Some(current)) = (minimum, current) else {
            return diagnostics;
        };

        match check_version(current, minimum) {
            Err(err) => diagnostics.add_error(
                format!("Failed to verify {product} version"),
                Some(err.to_string()),
            ),
            Ok(false) => diagnostics.add_error(
                format!("Incompatible {product} version"),
                Some(format!(
                    "This resource is only supported by {product} version {minimum} or later."
                )),
            ),
            Ok(true) => {}
        }
        diagnostics
    }

    /// Ping the catalog service once per provider process and replay the
    /// cached outcome on every later call.
    pub async fn validate_catalog_health(&self) -> Result<()> {
        let Some(metadata) = &self.provider_data else {
            tracing::debug!("catalog health: provider data not available yet, skipping");
            return Ok(());
        };

        let client = metadata.client.clone();
        let outcome = CATALOG_HEALTH
            .get_or_init(move || async move {
                tracing::debug!("performing catalog health check");
                match check_catalog_health(&client).await {
                    Ok(()) => {
                        tracing::debug!("catalog health check passed");
                        Ok(())
                    }
                    Err(err) => {
                        tracing::error!("catalog health check failed: {err}");
                        Err(err.to_string())
                    }
                }
            })
            .await;

        outcome.clone().map_err(SharedError::Custom)
    }

    /// Fire-and-forget `Resource/{type_name}/{VERB}` usage report
    pub fn report_usage(&self, verb: &str) {
        let Some(metadata) = &self.provider_data else {
            return;
        };
        let client = metadata.client.clone();
        let product_id = metadata.product_id.clone();
        let feature = resource_feature_usage(&self.type_name, verb);
        tokio::spawn(async move {
            send_usage(&client, &product_id, &[&feature]).await;
        });
    }
}
