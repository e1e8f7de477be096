use actix_web::{web, HttpResponse, Responder};
use crate::core::MatchMaker;
use crate::error::ApiError;
use crate::models::{HealthResponse, MatchRequest, MatchResponse};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<dyn MatchMaker>,
}

impl AppState {
    pub fn new<M: MatchMaker + 'static>(matcher: M) -> Self {
        Self {
            matcher: Arc::new(matcher),
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/results", web::post().to(results));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match results endpoint
///
/// POST /results
///
/// Request body:
/// ```json
/// {
///   "sun": "Aries",
///   "moon": "Leo",
///   "rising": "Gemini"
/// }
/// ```
///
/// Response body:
/// ```json
/// { "matches": ["string"] }
/// ```
async fn results(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> Result<HttpResponse, ApiError> {
    let MatchRequest { sun, moon, rising } = req.into_inner();

    tracing::debug!("Finding matches for sun={}, moon={}, rising={}", sun, moon, rising);

    let matches = state.matcher.make_matches(&sun, &moon, &rising)?;

    Ok(HttpResponse::Ok().json(MatchResponse { matches }))
}
