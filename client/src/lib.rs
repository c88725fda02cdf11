//! jfrog-client - pre-configured REST client for the JFrog Platform
//!
//! Builds an HTTP client bound to a platform base URL with the standard
//! header set, authentication injection, retry policy, and credential
//! redaction in request logs. Also carries the platform-wide endpoints
//! every provider needs: system version probes, the usage telemetry
//! beacon, and the OIDC token exchange.

pub mod client;
pub mod error;
pub mod oidc;
pub mod usage;
pub mod version;

pub use client::{Auth, Client, RetryConfig, RetryPolicy};
pub use error::{ClientError, ErrorDetail, ErrorEnvelope};
pub use oidc::oidc_token_exchange;
pub use usage::send_usage;
