use crate::{
    application::services::ContactLocationQuery,
    domain::entities::{AvailabilityStatus, ContactAvailabilityResponse},
    infrastructure::http::middleware::AppState,
};
use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Template)]
#[template(path = "contact_card.html")]
struct ContactCardTemplate {
    heading: String,
    location: String,
    status: String,
    in_office: bool,
    date: String,
    local_time: String,
    timezone: String,
    holidays: Vec<HolidayRow>,
    recommendation: String,
}

struct HolidayRow {
    date: String,
    name: String,
}

#[derive(Template)]
#[template(path = "contact_card_error.html")]
struct ContactCardErrorTemplate {
    message: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactCardQuery {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// GET /contact-card - Availability card for a CRM contact record
pub async fn show_contact_card(
    State(state): State<AppState>,
    Query(params): Query<ContactCardQuery>,
) -> Response {
    let query = ContactLocationQuery {
        city: params.city.clone(),
        state: params.state.clone(),
        country: params.country.clone(),
    };

    match state.contact_availability_service.check(&query).await {
        Ok(availability) => HtmlTemplate(card_template(&params, availability)).into_response(),
        Err(e) => {
            tracing::warn!("Contact card unavailable: {}", e);
            (
                e.status_code(),
                HtmlTemplate(ContactCardErrorTemplate {
                    message: e.message().to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn card_template(
    params: &ContactCardQuery,
    response: ContactAvailabilityResponse,
) -> ContactCardTemplate {
    let heading = match params.name.as_deref().filter(|n| !n.trim().is_empty()) {
        Some(name) => format!("Availability for {}", name),
        None => "Availability".to_string(),
    };

    let location = [&params.city, &params.state, &params.country]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    ContactCardTemplate {
        heading,
        location,
        status: response.availability.status.to_string(),
        in_office: response.availability.status == AvailabilityStatus::InOffice,
        date: response.datetime.date,
        local_time: response.datetime.local_time,
        timezone: response.datetime.timezone,
        holidays: response
            .holidays
            .into_iter()
            .map(|h| HolidayRow {
                date: h.date.to_string(),
                name: h.name,
            })
            .collect(),
        recommendation: response.availability.recommendation.to_string(),
    }
}

struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            )
                .into_response(),
        }
    }
}
