//! Adapters for the two external data sources a look is built from.

pub mod color_scheme;
pub mod product_catalog;

pub use color_scheme::{ColorApiClient, ColorSchemeService, ColorSchemeSource, HarmonyMode};
pub use product_catalog::{
    CategoryTag, MakeupApiClient, ProductCatalogService, ProductCatalogSource,
};

use crate::common::{LookError, LookResult};
use crate::config::ServicesConfig;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("vibelook/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for both services, with the configured request deadline.
pub fn http_client(config: &ServicesConfig) -> LookResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.request_timeout())
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| LookError::Client {
            reason: e.to_string(),
        })
}

/// Sends `request` and decodes a JSON body.
///
/// Transport errors, timeouts and non-success statuses are
/// `ServiceUnavailable`; a body that does not decode into `T` is `ParseError`.
pub(crate) async fn get_json<T>(request: RequestBuilder, service: &str) -> LookResult<T>
where
    T: DeserializeOwned,
{
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            LookError::service_unavailable(service, "request timed out")
        } else {
            LookError::service_unavailable(service, e.to_string())
        }
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(LookError::service_unavailable(
            service,
            format!("HTTP {status} - {}", error_text.trim()),
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LookError::service_unavailable(service, e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| LookError::parse_error(service, e.to_string()))
}
