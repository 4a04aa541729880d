use crate::{
    domain::entities::HolidayListResponse,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

/// `range` value selecting the upcoming 30-day window
pub const NEXT_30_DAYS_RANGE: &str = "next30days";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayQuery {
    pub country_code: Option<String>,
    pub year: Option<String>,
    pub range: Option<String>,
}

/// GET /api/nager-date?countryCode=&year=&range= - Public holidays for a country
pub async fn list_holidays(
    State(state): State<AppState>,
    Query(params): Query<HolidayQuery>,
) -> ApiResult<Json<HolidayListResponse>> {
    let country_code = params
        .country_code
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing countryCode parameter".to_string()))?;

    let holidays = if params.range.as_deref() == Some(NEXT_30_DAYS_RANGE) {
        state
            .holiday_service
            .holidays_in_next_30_days(&country_code)
            .await
    } else {
        let year = match params.year.as_deref().map(str::trim).filter(|y| !y.is_empty()) {
            Some(raw) => raw
                .parse::<i32>()
                .map_err(|_| ApiError::BadRequest(format!("Invalid year parameter: {}", raw)))?,
            None => state.holiday_service.current_year(),
        };
        state
            .holiday_service
            .holidays_for_year(year, &country_code)
            .await?
    };

    Ok(Json(HolidayListResponse { holidays }))
}
