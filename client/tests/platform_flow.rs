//! Client flow against a mock platform: build, authenticate, probe the
//! product versions, then report usage with the same client.

use jfrog_client::{send_usage, Client};
use mockito::{Matcher, Server};

#[tokio::test]
async fn authenticated_client_probes_versions_and_reports_usage() {
    let mut server = Server::new_async().await;

    let artifactory = server
        .mock("GET", "/artifactory/api/system/version")
        .match_header("authorization", "Bearer secret-token")
        .match_header("user-agent", "jfrog/terraform-provider-artifactory/12.0.0")
        .with_body(r#"{"version":"7.77.5","revision":"77705900"}"#)
        .create_async()
        .await;
    let xray = server
        .mock("GET", "/xray/api/v1/system/version")
        .match_header("authorization", "Bearer secret-token")
        .with_body(r#"{"xray_version":"3.88.11","xray_revision":"b3888"}"#)
        .create_async()
        .await;
    let usage = server
        .mock("POST", "/artifactory/api/system/usage")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "productId": "terraform-provider-artifactory/12.0.0"
        })))
        .with_body("")
        .create_async()
        .await;

    let client = Client::build(&server.url(), "terraform-provider-artifactory/12.0.0")
        .unwrap()
        .add_auth(None, Some("secret-token"))
        .unwrap();

    assert_eq!(client.get_artifactory_version().await.unwrap(), "7.77.5");
    assert_eq!(client.get_xray_version().await.unwrap(), "3.88.11");

    send_usage(
        &client,
        "terraform-provider-artifactory/12.0.0",
        &["Terraform/1.7.0"],
    )
    .await;

    artifactory.assert_async().await;
    xray.assert_async().await;
    usage.assert_async().await;
}

#[tokio::test]
async fn api_key_client_uses_the_platform_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/artifactory/api/system/version")
        .match_header("x-jfrog-art-api", "legacy-api-key")
        .with_body(r#"{"version":"7.49.3"}"#)
        .create_async()
        .await;

    let client = Client::build(&server.url(), "terraform-provider-artifactory/12.0.0")
        .unwrap()
        .add_auth(Some("legacy-api-key"), None)
        .unwrap();

    assert_eq!(client.get_artifactory_version().await.unwrap(), "7.49.3");
    mock.assert_async().await;
}
