//! End-to-end scaffolding flow: configure the provider against a mock
//! platform, hand the metadata to a concrete resource, and drive its CRUD
//! hooks through the packer and unpacker.

use std::collections::HashMap;

use async_trait::async_trait;
use mockito::{Matcher, Server};
use serde::{Deserialize, Serialize};
use serial_test::serial;

use jfrog_shared::packer::{self, PackFunc};
use jfrog_shared::unpacker;
use jfrog_shared::util::provider::{ConfigureProviderRequest, Provider};
use jfrog_shared::util::resource::{
    ConfigureResourceRequest, CreateResourceRequest, CreateResourceResponse,
    DeleteResourceRequest, DeleteResourceResponse, ReadResourceRequest, ReadResourceResponse,
    Resource, UpdateResourceRequest, UpdateResourceResponse, ValidateResourceConfigRequest,
    ValidateResourceConfigResponse,
};
use jfrog_shared::{
    AttributeBuilder, AttributeType, Diagnostics, Dynamic, Identifiable, JFrogProvider,
    JFrogResource, ResourceState, Schema, SchemaBuilder,
};

#[derive(Debug, Serialize, Deserialize)]
struct Group {
    name: String,
    description: String,
    auto_join: bool,
    admin_privileges: bool,
}

impl Identifiable for Group {
    fn id(&self) -> String {
        self.name.clone()
    }
}

fn group_schema() -> Schema {
    SchemaBuilder::new()
        .attribute(AttributeBuilder::new("name", AttributeType::String).required().build())
        .attribute(
            AttributeBuilder::new("description", AttributeType::String)
                .optional()
                .build(),
        )
        .attribute(AttributeBuilder::new("auto_join", AttributeType::Bool).optional().build())
        .attribute(
            AttributeBuilder::new("admin_privileges", AttributeType::Bool)
                .optional()
                .build(),
        )
        .build()
}

struct GroupResource {
    base: JFrogResource,
    pack: PackFunc<Group>,
}

impl GroupResource {
    fn new() -> Self {
        Self {
            base: JFrogResource {
                min_artifactory_version: Some("7.49.3".to_string()),
                ..JFrogResource::new("artifactory_group")
            },
            pack: packer::default_packer::<Group>(&group_schema()),
        }
    }

    fn endpoint(name: &str) -> String {
        format!("/access/api/v2/groups/{name}")
    }

    fn state_from_group(&self, group: &Group) -> Result<ResourceState, Diagnostics> {
        let mut state = ResourceState::with_schema(group_schema());
        let mut diagnostics = Diagnostics::new();
        if let Err(err) = (self.pack)(group, &mut state) {
            diagnostics.unable_to_create_resource(err);
            return Err(diagnostics);
        }
        Ok(state)
    }
}

#[async_trait]
impl Resource for GroupResource {
    fn type_name(&self) -> &str {
        &self.base.type_name
    }

    fn schema(&self) -> Schema {
        group_schema()
    }

    async fn configure(&mut self, request: ConfigureResourceRequest) -> jfrog_shared::util::resource::ConfigureResourceResponse {
        self.base.configure(request)
    }

    async fn validate(
        &self,
        _request: ValidateResourceConfigRequest,
    ) -> ValidateResourceConfigResponse {
        self.base.validate_config()
    }

    async fn create(&self, request: CreateResourceRequest) -> CreateResourceResponse {
        let mut diagnostics = Diagnostics::new();
        let metadata = self.base.provider_data.as_ref().expect("configured");

        let (group, _id) = match unpacker::universal::<Group>(&request.planned_state) {
            Ok(unpacked) => unpacked,
            Err(err) => {
                diagnostics.unable_to_create_resource(err);
                return CreateResourceResponse {
                    new_state: request.planned_state,
                    diagnostics,
                };
            }
        };

        let created: Result<Group, _> = metadata
            .client
            .post(&Self::endpoint(&group.name), &group)
            .await;

        match created {
            Ok(created) => {
                self.base.report_usage("CREATE");
                match self.state_from_group(&created) {
                    Ok(new_state) => CreateResourceResponse {
                        new_state,
                        diagnostics,
                    },
                    Err(diagnostics) => CreateResourceResponse {
                        new_state: request.planned_state,
                        diagnostics,
                    },
                }
            }
            Err(err) => {
                diagnostics.unable_to_create_resource(err);
                CreateResourceResponse {
                    new_state: request.planned_state,
                    diagnostics,
                }
            }
        }
    }

    async fn read(&self, request: ReadResourceRequest) -> ReadResourceResponse {
        let mut diagnostics = Diagnostics::new();
        let metadata = self.base.provider_data.as_ref().expect("configured");

        let name = request.current_state.get_string("name").unwrap_or_default();
        let fetched: Result<Group, _> = metadata.client.get(&Self::endpoint(&name)).await;

        match fetched {
            Ok(group) => match self.state_from_group(&group) {
                Ok(state) => ReadResourceResponse {
                    new_state: Some(state),
                    diagnostics,
                },
                Err(diagnostics) => ReadResourceResponse {
                    new_state: None,
                    diagnostics,
                },
            },
            Err(jfrog_client::ClientError::Api { status: 404, .. }) => ReadResourceResponse {
                new_state: None,
                diagnostics,
            },
            Err(err) => {
                diagnostics.unable_to_refresh_resource(err);
                ReadResourceResponse {
                    new_state: None,
                    diagnostics,
                }
            }
        }
    }

    async fn update(&self, request: UpdateResourceRequest) -> UpdateResourceResponse {
        let mut diagnostics = Diagnostics::new();
        let metadata = self.base.provider_data.as_ref().expect("configured");

        match unpacker::universal::<Group>(&request.planned_state) {
            Ok((group, _)) => {
                let updated: Result<Group, _> = metadata
                    .client
                    .put(&Self::endpoint(&group.name), &group)
                    .await;
                match updated {
                    Ok(updated) => match self.state_from_group(&updated) {
                        Ok(new_state) => UpdateResourceResponse {
                            new_state,
                            diagnostics,
                        },
                        Err(diagnostics) => UpdateResourceResponse {
                            new_state: request.prior_state,
                            diagnostics,
                        },
                    },
                    Err(err) => {
                        diagnostics.unable_to_update_resource(err);
                        UpdateResourceResponse {
                            new_state: request.prior_state,
                            diagnostics,
                        }
                    }
                }
            }
            Err(err) => {
                diagnostics.unable_to_update_resource(err);
                UpdateResourceResponse {
                    new_state: request.prior_state,
                    diagnostics,
                }
            }
        }
    }

    async fn delete(&self, request: DeleteResourceRequest) -> DeleteResourceResponse {
        let mut diagnostics = Diagnostics::new();
        let metadata = self.base.provider_data.as_ref().expect("configured");

        let name = request.prior_state.get_string("name").unwrap_or_default();
        let deleted: Result<serde_json::Value, _> =
            metadata.client.delete(&Self::endpoint(&name)).await;

        if let Err(err) = deleted {
            diagnostics.unable_to_delete_resource(err);
        }
        DeleteResourceResponse { diagnostics }
    }
}

fn planned_state() -> ResourceState {
    let mut state = ResourceState::with_schema(group_schema());
    state.set("name", Dynamic::from("release-managers")).unwrap();
    state
        .set("description", Dynamic::from("Cuts releases"))
        .unwrap();
    state.set("auto_join", Dynamic::from(false)).unwrap();
    state.set("admin_privileges", Dynamic::from(true)).unwrap();
    state
}

async fn configured_provider(server: &Server) -> jfrog_shared::ProviderMetadata {
    let mut provider = JFrogProvider::new("jfrog", "1.0.0", "terraform-provider-artifactory/1.0.0");
    let response = provider
        .configure(ConfigureProviderRequest {
            config: Dynamic::Map(HashMap::from([
                ("url".to_string(), Dynamic::from(server.url().as_str())),
                ("access_token".to_string(), Dynamic::from("secret-token")),
            ])),
            terraform_version: "1.7.0".to_string(),
        })
        .await;

    assert!(
        !response.diagnostics.has_errors(),
        "configure failed: {:?}",
        response.diagnostics.errors
    );
    response.metadata.expect("metadata after configure")
}

async fn version_mocks(server: &mut Server) -> (mockito::Mock, mockito::Mock) {
    let artifactory = server
        .mock("GET", "/artifactory/api/system/version")
        .with_body(r#"{"version":"7.77.5"}"#)
        .create_async()
        .await;
    let access = server
        .mock("GET", "/access/api/v1/system/version")
        .with_body(r#"{"name":"ACCESS","version":"7.77.2"}"#)
        .create_async()
        .await;
    (artifactory, access)
}

#[tokio::test]
#[serial]
async fn provider_metadata_flows_into_resource_gate() {
    std::env::remove_var("JFROG_URL");
    std::env::remove_var("JFROG_ACCESS_TOKEN");

    let mut server = Server::new_async().await;
    let _versions = version_mocks(&mut server).await;

    let metadata = configured_provider(&server).await;

    let mut resource = GroupResource::new();
    resource
        .configure(ConfigureResourceRequest {
            provider_data: Some(metadata),
        })
        .await;

    // Artifactory 7.77.5 satisfies the 7.49.3 floor
    let response = resource
        .validate(ValidateResourceConfigRequest {
            config: Dynamic::Null,
        })
        .await;
    assert!(!response.diagnostics.has_errors());
}

#[tokio::test]
#[serial]
async fn resource_gate_blocks_old_platform() {
    std::env::remove_var("JFROG_URL");
    std::env::remove_var("JFROG_ACCESS_TOKEN");

    let mut server = Server::new_async().await;
    let _artifactory = server
        .mock("GET", "/artifactory/api/system/version")
        .with_body(r#"{"version":"7.21.0"}"#)
        .create();
    let _access = server
        .mock("GET", "/access/api/v1/system/version")
        .with_body(r#"{"name":"ACCESS","version":"7.21.0"}"#)
        .create();

    let metadata = configured_provider(&server).await;

    let mut resource = GroupResource::new();
    resource
        .configure(ConfigureResourceRequest {
            provider_data: Some(metadata),
        })
        .await;

    let response = resource
        .validate(ValidateResourceConfigRequest {
            config: Dynamic::Null,
        })
        .await;
    assert!(response.diagnostics.has_errors());
    assert_eq!(
        response.diagnostics.errors[0].summary,
        "Incompatible Artifactory version"
    );
}

#[tokio::test]
#[serial]
async fn create_read_delete_round_trip() {
    std::env::remove_var("JFROG_URL");
    std::env::remove_var("JFROG_ACCESS_TOKEN");

    let mut server = Server::new_async().await;
    let _versions = version_mocks(&mut server).await;

    let group_body = r#"{
        "name": "release-managers",
        "description": "Cuts releases",
        "auto_join": false,
        "admin_privileges": true
    }"#;

    let create = server
        .mock("POST", "/access/api/v2/groups/release-managers")
        .match_header("authorization", "Bearer secret-token")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "name": "release-managers",
            "admin_privileges": true
        })))
        .with_body(group_body)
        .create_async()
        .await;
    let read = server
        .mock("GET", "/access/api/v2/groups/release-managers")
        .with_body(group_body)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/access/api/v2/groups/release-managers")
        .with_body("{}")
        .create_async()
        .await;

    let metadata = configured_provider(&server).await;
    let mut resource = GroupResource::new();
    resource
        .configure(ConfigureResourceRequest {
            provider_data: Some(metadata),
        })
        .await;

    let created = resource
        .create(CreateResourceRequest {
            planned_state: planned_state(),
            config: Dynamic::Null,
        })
        .await;
    assert!(
        !created.diagnostics.has_errors(),
        "create failed: {:?}",
        created.diagnostics.errors
    );
    assert_eq!(
        created.new_state.get_string("name"),
        Some("release-managers".to_string())
    );
    assert_eq!(created.new_state.get_bool("admin_privileges"), Some(true));

    let refreshed = resource
        .read(ReadResourceRequest {
            current_state: created.new_state,
        })
        .await;
    let state = refreshed.new_state.expect("resource still exists");
    assert_eq!(
        state.get_string("description"),
        Some("Cuts releases".to_string())
    );

    let removed = resource
        .delete(DeleteResourceRequest { prior_state: state })
        .await;
    assert!(!removed.diagnostics.has_errors());

    create.assert_async().await;
    read.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
#[serial]
async fn read_maps_missing_resource_to_none() {
    std::env::remove_var("JFROG_URL");
    std::env::remove_var("JFROG_ACCESS_TOKEN");

    let mut server = Server::new_async().await;
    let _versions = version_mocks(&mut server).await;
    let _missing = server
        .mock("GET", "/access/api/v2/groups/release-managers")
        .with_status(404)
        .with_body(r#"{"errors":[{"code":"NOT_FOUND","message":"Group not found"}]}"#)
        .create_async()
        .await;

    let metadata = configured_provider(&server).await;
    let mut resource = GroupResource::new();
    resource
        .configure(ConfigureResourceRequest {
            provider_data: Some(metadata),
        })
        .await;

    let refreshed = resource
        .read(ReadResourceRequest {
            current_state: planned_state(),
        })
        .await;

    assert!(refreshed.new_state.is_none());
    assert!(!refreshed.diagnostics.has_errors());
}
