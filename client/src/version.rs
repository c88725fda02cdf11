use serde::Deserialize;

use crate::client::Client;
use crate::error::ClientError;

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactoryVersion {
    pub version: String,
    #[serde(default)]
    pub revision: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessVersion {
    #[serde(default)]
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XrayVersion {
    #[serde(rename = "xray_version")]
    pub version: String,
    #[serde(rename = "xray_revision", default)]
    pub revision: String,
}

impl Client {
    pub async fn get_artifactory_version(&self) -> Result<String, ClientError> {
        let version: ArtifactoryVersion = self.get("/artifactory/api/system/version").await?;
        Ok(version.version)
    }

    pub async fn get_access_version(&self) -> Result<String, ClientError> {
        let version: AccessVersion = self.get("/access/api/v1/system/version").await?;
        Ok(version.version)
    }

    pub async fn get_xray_version(&self) -> Result<String, ClientError> {
        let version: XrayVersion = self.get("/xray/api/v1/system/version").await?;
        Ok(version.version)
    }
}
