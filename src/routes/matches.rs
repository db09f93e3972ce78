use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::reasons;
use crate::models::{
    FindMatchesRequest, FindMatchesResponse, HealthResponse, RoleKind, ScorePairRequest,
    ScorePairResponse,
};
use super::{error_response, registry_error_response, AppState};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/score", web::post().to(score_pair));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        parties: state.registry.len().await,
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "buyerId": "uuid",
///   "limit": 5
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let buyer_id = req.buyer_id;
    // Cap limit to keep responses small
    let limit = req.limit.unwrap_or(state.default_limit).min(state.max_limit) as usize;

    tracing::info!("Finding matches for buyer: {}, limit: {}", buyer_id, limit);

    let buyer = match state.registry.buyer(&buyer_id).await {
        Ok(buyer) => buyer,
        Err(e) => {
            tracing::info!("Cannot match for {}: {}", buyer_id, e);
            return registry_error_response(&e);
        }
    };

    // Cloned out of the registry so ranking never holds the lock
    let suppliers = state.registry.suppliers().await;
    let result = state.matcher.rank(&buyer, suppliers, limit);

    tracing::info!(
        "Returning {} matches for buyer {} (from {} candidates)",
        result.matches.len(),
        buyer_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        buyer_id,
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}

/// Score an unregistered buyer/supplier pair
///
/// POST /api/v1/matches/score
///
/// Request body: `{ "buyer": {...}, "supplier": {...} }`, each shaped like a
/// registration request.
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScorePairRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let req = req.into_inner();
    if req.buyer.role.kind() != RoleKind::Buyer || req.supplier.role.kind() != RoleKind::Supplier {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Wrong party role",
            "buyer must have role buyer and supplier must have role supplier".to_string(),
        );
    }

    let buyer = req.buyer.into_party();
    let supplier = req.supplier.into_party();
    let breakdown = state.matcher.score(&buyer, &supplier);

    tracing::debug!("Scored ad-hoc pair {} / {}: {}", buyer.name, supplier.name, breakdown.total);

    HttpResponse::Ok().json(ScorePairResponse {
        score: breakdown.total,
        reasons: reasons(&breakdown),
        contributions: breakdown.contributions,
    })
}

