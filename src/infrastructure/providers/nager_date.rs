use crate::domain::entities::Holiday;
use crate::domain::errors::{ProviderError, ProviderResult};
use crate::domain::ports::HolidayProvider;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3";

/// Client for the Nager.Date public holiday API (no key required)
#[derive(Clone)]
pub struct NagerDateClient {
    http_client: Client,
    base_url: String,
}

impl NagerDateClient {
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl HolidayProvider for NagerDateClient {
    async fn public_holidays(&self, year: i32, country_code: &str) -> ProviderResult<Vec<Holiday>> {
        let context = "Failed to fetch public holidays".to_string();
        let url = format!(
            "{}/PublicHolidays/{}/{}",
            self.base_url,
            year,
            country_code.to_uppercase()
        );

        debug!("Fetching public holidays from {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|source| ProviderError::Network {
                context: context.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            warn!(
                "Holiday lookup {} {} returned {}",
                year,
                country_code,
                status.as_u16()
            );
            return Err(ProviderError::Upstream {
                context,
                status: status.as_u16(),
                message: format!("HTTP error! status: {}", status.as_u16()),
            });
        }

        response
            .json::<Vec<Holiday>>()
            .await
            .map_err(|e| ProviderError::Decode {
                context,
                message: e.to_string(),
            })
    }
}
