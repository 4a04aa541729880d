use crate::{
    domain::{entities::TimezoneInfo, services::formatter},
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TimezoneQuery {
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTimezone {
    pub date: String,
    pub time: String,
    pub timezone_offset: String,
}

#[derive(Debug, Serialize)]
pub struct TimezoneLookupResponse {
    pub success: bool,
    pub data: TimezoneInfo,
    pub formatted: FormattedTimezone,
}

/// GET /api/abstract-timezone?location= - Current local time for a location
pub async fn get_current_time(
    State(state): State<AppState>,
    Query(params): Query<TimezoneQuery>,
) -> ApiResult<Json<TimezoneLookupResponse>> {
    let location = params
        .location
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest(
                "Location parameter is required. Use ?location=City,State or ?location=City,Country"
                    .to_string(),
            )
        })?;

    let data = state.timezone_provider.current_time(&location).await?;
    let display = formatter::format_separated(&data)?;

    Ok(Json(TimezoneLookupResponse {
        success: true,
        formatted: FormattedTimezone {
            date: display.date,
            time: display.time,
            timezone_offset: formatter::timezone_offset(data.gmt_offset),
        },
        data,
    }))
}
