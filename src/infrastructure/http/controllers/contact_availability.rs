use crate::{
    application::services::ContactLocationQuery,
    domain::entities::ContactAvailabilityResponse,
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{Query, State},
    Json,
};

/// GET /api/contact-availability?city=&state=&country= - Can this contact be called now
pub async fn get_contact_availability(
    State(state): State<AppState>,
    Query(params): Query<ContactLocationQuery>,
) -> ApiResult<Json<ContactAvailabilityResponse>> {
    let response = state.contact_availability_service.check(&params).await?;
    Ok(Json(response))
}
