use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ListPartiesQuery, PartyDraft, PartyId};
use super::{error_response, registry_error_response, AppState};

/// Configure registration and lookup routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/vocabulary", web::get().to(get_vocabulary))
        .route("/parties", web::post().to(register_party))
        .route("/parties", web::get().to(list_parties))
        .route("/parties/{id}", web::get().to(get_party));
}

/// Options offered by the registration form
async fn get_vocabulary(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.vocabulary.as_ref())
}

/// Register a company
///
/// POST /api/v1/parties
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "country": "Germany",
///   "size": "micro|small|medium|large",
///   "sectors": ["string"],
///   "certs": ["string"],
///   "partnerTypes": ["string"],
///   "role": "buyer",
///   "needs": ["string"],
///   "targets": ["string"],
///   "needsExporter": true
/// }
/// ```
/// Suppliers send `"role": "supplier"` with `offers` and `exportReady` instead.
async fn register_party(
    state: web::Data<AppState>,
    req: web::Json<PartyDraft>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for registration: field_errors={:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    if state.enforce_vocabulary {
        if let Err(e) = state.vocabulary.check(&req) {
            tracing::info!("Rejected registration of {}: {}", req.name, e);
            return registry_error_response(&e);
        }
    }

    let party = state.registry.register(req.into_inner()).await;

    HttpResponse::Created().json(party)
}

/// List registered companies
///
/// GET /api/v1/parties?role={buyer|supplier}
async fn list_parties(
    state: web::Data<AppState>,
    query: web::Query<ListPartiesQuery>,
) -> impl Responder {
    let parties = state.registry.list(query.role).await;
    tracing::debug!("Listing {} parties (role filter: {:?})", parties.len(), query.role);

    HttpResponse::Ok().json(parties)
}

/// GET /api/v1/parties/{id}
async fn get_party(
    state: web::Data<AppState>,
    path: web::Path<PartyId>,
) -> impl Responder {
    let id = path.into_inner();

    match state.registry.get(&id).await {
        Ok(party) => HttpResponse::Ok().json(party),
        Err(e) => registry_error_response(&e),
    }
}
