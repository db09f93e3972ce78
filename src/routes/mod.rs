// Route exports
pub mod matches;
pub mod parties;

use actix_web::{http::StatusCode, web, HttpResponse};
use std::sync::Arc;
use crate::core::Matcher;
use crate::models::ErrorResponse;
use crate::services::{PartyRegistry, RegistryError, Vocabulary};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<PartyRegistry>,
    pub vocabulary: Arc<Vocabulary>,
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
    pub enforce_vocabulary: bool,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(parties::configure)
            .configure(matches::configure),
    );
}

/// Build a JSON error body with the given status
pub fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

/// Map registry failures to HTTP responses
pub fn registry_error_response(err: &RegistryError) -> HttpResponse {
    match err {
        RegistryError::NotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "Party not found", err.to_string())
        }
        RegistryError::WrongRole { .. } => {
            error_response(StatusCode::BAD_REQUEST, "Wrong party role", err.to_string())
        }
        RegistryError::UnknownTag { .. } => {
            error_response(StatusCode::BAD_REQUEST, "Unknown tag", err.to_string())
        }
    }
}
