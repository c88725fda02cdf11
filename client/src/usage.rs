use serde::Serialize;

use crate::client::Client;

/// Feature id reported with every usage call.
pub const PARTNER_FEATURE_ID: &str = "Partner/ACC-007450";

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "featureId")]
    pub feature_id: String,
}

#[derive(Debug, Serialize)]
pub struct UsageReport {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub features: Vec<Feature>,
}

pub fn resource_feature_usage(resource_name: &str, method: &str) -> String {
    format!("Resource/{resource_name}/{method}")
}

/// Report feature usage to the platform. Best effort: failures are logged
/// and never returned to the caller.
pub async fn send_usage(client: &Client, product_id: &str, feature_usages: &[&str]) {
    let mut features = vec![Feature {
        feature_id: PARTNER_FEATURE_ID.to_string(),
    }];
    features.extend(feature_usages.iter().map(|f| Feature {
        feature_id: f.to_string(),
    }));

    let report = UsageReport {
        product_id: product_id.to_string(),
        features,
    };

    if let Err(err) = client
        .post_no_content("artifactory/api/system/usage", &report)
        .await
    {
        tracing::info!("failed to send usage: {err}");
    }
}

pub async fn send_usage_resource_create(client: &Client, product_id: &str, resource_name: &str) {
    send_usage(
        client,
        product_id,
        &[&resource_feature_usage(resource_name, "CREATE")],
    )
    .await
}

pub async fn send_usage_resource_read(client: &Client, product_id: &str, resource_name: &str) {
    send_usage(
        client,
        product_id,
        &[&resource_feature_usage(resource_name, "READ")],
    )
    .await
}

pub async fn send_usage_resource_update(client: &Client, product_id: &str, resource_name: &str) {
    send_usage(
        client,
        product_id,
        &[&resource_feature_usage(resource_name, "UPDATE")],
    )
    .await
}

pub async fn send_usage_resource_delete(client: &Client, product_id: &str, resource_name: &str) {
    send_usage(
        client,
        product_id,
        &[&resource_feature_usage(resource_name, "DELETE")],
    )
    .await
}
