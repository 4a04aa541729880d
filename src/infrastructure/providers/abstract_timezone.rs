use crate::domain::entities::TimezoneInfo;
use crate::domain::errors::{ProviderError, ProviderResult};
use crate::domain::ports::TimezoneProvider;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://timezone.abstractapi.com/v1";

/// Client for the Abstract Timezone `current_time` endpoint
#[derive(Clone)]
pub struct AbstractTimezoneClient {
    http_client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
    code: Option<String>,
}

impl AbstractTimezoneClient {
    /// The API key is only checked when a lookup is made, so the server can
    /// start and serve holiday routes without it.
    pub fn new(http_client: Client, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait::async_trait]
impl TimezoneProvider for AbstractTimezoneClient {
    async fn current_time(&self, location: &str) -> ProviderResult<TimezoneInfo> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;
        let context = format!("Failed to get current time for {}", location);
        let url = format!("{}/current_time", self.base_url);

        debug!("Requesting current time for {}", location);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", api_key), ("location", location)])
            .send()
            .await
            .map_err(|source| ProviderError::Network {
                context: context.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            let code = detail.as_ref().and_then(|d| d.code.clone());
            let message = detail
                .and_then(|d| d.message)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "Unknown error".to_string());

            warn!(
                "Timezone lookup for {} returned {} (code {:?}): {}",
                location,
                status.as_u16(),
                code,
                message
            );

            return Err(ProviderError::Upstream {
                context,
                status: status.as_u16(),
                message: format!("API Error: {}", message),
            });
        }

        response
            .json::<TimezoneInfo>()
            .await
            .map_err(|e| ProviderError::Decode {
                context,
                message: e.to_string(),
            })
    }
}
