use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::filters::{filter_creators, parse_criteria};
use crate::core::Matcher;
use crate::models::{CampaignSettings, ErrorResponse, FilterQuery, HealthResponse};
use crate::services::DatasetProvider;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: DatasetProvider,
    pub matcher: Matcher,
}

/// Configure all creator-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/creators", web::get().to(list_creators))
        .route("/creators/filter", web::get().to(filter_endpoint))
        .route("/match", web::post().to(match_creators));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        creators: state.dataset.len(),
    })
}

/// List all creators, unfiltered
///
/// GET /api/creators
async fn list_creators(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.dataset.creators())
}

/// Filter creators by query parameters
///
/// GET /api/creators/filter?platforms=&categories=&followerRange=&engagementRateMin=&regions=&verifiedOnly=
///
/// All parameters are optional; list parameters are comma-separated.
/// Malformed numeric values are skipped rather than rejected.
async fn filter_endpoint(
    state: web::Data<AppState>,
    query: web::Query<FilterQuery>,
) -> impl Responder {
    let criteria = parse_criteria(&query);
    let filtered = filter_creators(state.dataset.creators(), &criteria);

    tracing::debug!(
        "Filter kept {} of {} creators (criteria: {:?})",
        filtered.len(),
        state.dataset.len(),
        criteria
    );

    HttpResponse::Ok().json(filtered)
}

/// Score every creator against campaign settings
///
/// POST /api/match
///
/// Request body:
/// ```json
/// {
///   "campaignType": "Brand Awareness",
///   "budget": [40, 60],
///   "targetGenres": ["Gaming"],
///   "targetAgeGroups": ["18-24"],
///   "targetGenders": ["female"],
///   "platforms": ["TikTok"]
/// }
/// ```
///
/// Returns the full creator array, each entry augmented with `matchScore`.
async fn match_creators(
    state: web::Data<AppState>,
    req: web::Json<CampaignSettings>,
) -> impl Responder {
    // Platform fit divides by the number of campaign platforms, so an empty
    // list is rejected up front instead of silently skewing scores.
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let settings = req.into_inner();

    tracing::info!(
        "Scoring {} creators for {} campaign on {} platform(s)",
        state.dataset.len(),
        settings.campaign_type.as_str(),
        settings.platforms.len()
    );

    let scored = state.matcher.score_all(state.dataset.creators(), &settings);

    HttpResponse::Ok().json(scored)
}
