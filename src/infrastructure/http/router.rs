use crate::infrastructure::http::controllers;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::web;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route(
            "/api/abstract-timezone",
            get(controllers::timezone::get_current_time),
        )
        .route("/api/nager-date", get(controllers::holidays::list_holidays))
        .route(
            "/api/contact-availability",
            get(controllers::contact_availability::get_contact_availability),
        )
        .route("/contact-card", get(web::show_contact_card))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Contact Availability Service"
}

async fn health_handler() -> &'static str {
    "OK"
}
