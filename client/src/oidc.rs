use std::env;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::ClientError;

/// Environment variable holding the workload identity token issued by
/// Terraform Cloud. When a credential tag name is configured the token is
/// read from `TFC_WORKLOAD_IDENTITY_TOKEN_{TAG}` instead; the tag is used
/// verbatim, it is case sensitive.
pub const TFC_TOKEN_ENV_VAR: &str = "TFC_WORKLOAD_IDENTITY_TOKEN";

const TOKEN_EXCHANGE_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:token-exchange";
const ID_TOKEN_TYPE: &str = "urn:ietf:params:oauth:token-type:id_token";

#[derive(Debug, Serialize)]
struct TokenExchangeRequest<'a> {
    grant_type: &'a str,
    subject_token_type: &'a str,
    subject_token: &'a str,
    provider_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenExchangeResponse {
    access_token: String,
}

/// Exchange the Terraform Cloud workload identity token for a short-lived
/// platform access token against the configured OIDC integration.
pub async fn oidc_token_exchange(
    client: &Client,
    provider_name: &str,
    tfc_credential_tag_name: &str,
) -> Result<String, ClientError> {
    let env_var = if tfc_credential_tag_name.is_empty() {
        TFC_TOKEN_ENV_VAR.to_string()
    } else {
        format!("{TFC_TOKEN_ENV_VAR}_{tfc_credential_tag_name}")
    };

    let subject_token = env::var(&env_var).unwrap_or_default();
    if subject_token.is_empty() {
        return Err(ClientError::MissingWorkloadToken(env_var));
    }

    let request = TokenExchangeRequest {
        grant_type: TOKEN_EXCHANGE_GRANT_TYPE,
        subject_token_type: ID_TOKEN_TYPE,
        subject_token: &subject_token,
        provider_name,
    };

    let response: TokenExchangeResponse =
        client.post("/access/api/v1/oidc/token", &request).await?;
    Ok(response.access_token)
}
