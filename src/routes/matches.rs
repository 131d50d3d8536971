use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::models::{
    ErrorResponse, HealthResponse, ScoreMatchRequest, TopMatchesRequest, TopMatchesResponse,
};
use crate::services::{OpportunityStore, TeamStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub teams: Arc<TeamStore>,
    pub opportunities: Arc<OpportunityStore>,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_match))
        .route("/matches/top", web::post().to(top_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub(crate) fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "Validation failed",
        errors.to_string(),
        400,
    ))
}

/// Score a single pair
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "team": { ... },
///   "opportunity": { ... }
/// }
/// ```
async fn score_match(
    state: web::Data<AppState>,
    req: web::Json<ScoreMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {}", errors);
        return validation_failed(errors);
    }

    let result = state.matcher.calculate_match(&req.team, &req.opportunity);

    tracing::info!(
        "Scored team {} against opportunity {}: {}",
        req.team.id,
        req.opportunity.id,
        result.score
    );

    HttpResponse::Ok().json(result)
}

/// Rank team/opportunity pairs
///
/// POST /api/v1/matches/top
///
/// Request body (all fields optional):
/// ```json
/// {
///   "teams": [ ... ],
///   "opportunities": [ ... ],
///   "limit": 5
/// }
/// ```
///
/// Lists left out are read from the stores.
async fn top_matches(
    state: web::Data<AppState>,
    req: web::Json<TopMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for top matches request: {}", errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let limit = state.matching.resolve_limit(req.limit);

    let teams = match req.teams {
        Some(teams) => teams,
        None => state.teams.list().await,
    };
    let opportunities = match req.opportunities {
        Some(opportunities) => opportunities,
        None => state.opportunities.list().await,
    };

    let total_pairs = teams.len() * opportunities.len();
    if total_pairs > state.matching.max_pairs {
        tracing::info!(
            "Rejected ranking of {} pairs (max {})",
            total_pairs,
            state.matching.max_pairs
        );
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Too many pairs",
            format!(
                "{} teams x {} opportunities exceeds the limit of {} pairs",
                teams.len(),
                opportunities.len(),
                state.matching.max_pairs
            ),
            400,
        ));
    }

    // Scoring is CPU bound; keep it off the async worker
    let matcher = state.matcher.clone();
    let ranked = web::block(move || {
        let matches = matcher.top_matches(&teams, &opportunities, limit);
        serde_json::to_value(TopMatchesResponse {
            matches,
            total_pairs,
        })
    })
    .await;

    match ranked {
        Ok(Ok(body)) => {
            tracing::info!("Ranked {} pairs (limit {})", total_pairs, limit);
            HttpResponse::Ok().json(body)
        }
        Ok(Err(e)) => {
            tracing::error!("Failed to serialize ranked matches: {}", e);
            internal_error(e.to_string())
        }
        Err(e) => {
            tracing::error!("Ranking task failed: {}", e);
            internal_error(e.to_string())
        }
    }
}

fn internal_error(message: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "Internal server error",
        message,
        500,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchResult, Opportunity, Team};
    use crate::routes::json_config;
    use crate::services::InMemoryStore;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;

    fn team_json(id: &str, size: u32) -> serde_json::Value {
        json!({
            "id": id,
            "industry": "Financial Services",
            "size": size,
            "location": "NYC",
            "remoteStatus": "hybrid",
            "yearsWorkingTogether": 4,
            "liftoutExperience": "experienced",
            "compensationExpectation": { "min": 150000.0, "max": 200000.0, "currency": "USD" },
            "skills": ["Python", "SQL"]
        })
    }

    fn opportunity_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "industry": "Fintech",
            "location": "SF",
            "workStyle": "hybrid",
            "compensation": { "min": 140000.0, "max": 190000.0, "currency": "USD", "type": "salary" },
            "teamSize": { "min": 3, "max": 5 },
            "skills": ["Python", "Machine Learning"],
            "liftoutType": "expansion",
            "confidential": false
        })
    }

    fn state(teams: Vec<Team>, opportunities: Vec<Opportunity>) -> AppState {
        AppState {
            matcher: Matcher::with_default_weights().with_seed(1),
            teams: Arc::new(InMemoryStore::with_records(teams)),
            opportunities: Arc::new(InMemoryStore::with_records(opportunities)),
            matching: MatchingSettings { default_limit: 5, max_limit: 10, max_pairs: 20 },
        }
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new().app_data(web::Data::new(state(vec![], vec![]))).configure(configure),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert!(resp.status().is_success());

        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, "healthy");
    }

    #[actix_web::test]
    async fn test_score_match() {
        let app = test::init_service(
            App::new().app_data(web::Data::new(state(vec![], vec![]))).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/score")
            .set_json(json!({ "team": team_json("t1", 4), "opportunity": opportunity_json("o1") }))
            .to_request();
        let result: MatchResult = test::call_and_read_body_json(&app, req).await;

        assert_eq!(result.score, 79);
        assert_eq!(result.reasons.len(), 6);
        assert_eq!(result.insights.len(), 3);
    }

    #[actix_web::test]
    async fn test_score_match_rejects_invalid_team() {
        let app = test::init_service(
            App::new().app_data(web::Data::new(state(vec![], vec![]))).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/score")
            .set_json(json!({ "team": team_json("t1", 0), "opportunity": opportunity_json("o1") }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_top_matches_from_stores() {
        let teams: Vec<Team> = (0..4)
            .map(|i| serde_json::from_value(team_json(&format!("t{}", i), 2 + i)).unwrap())
            .collect();
        let opportunities: Vec<Opportunity> = (0..3)
            .map(|i| serde_json::from_value(opportunity_json(&format!("o{}", i))).unwrap())
            .collect();

        let app = test::init_service(
            App::new().app_data(web::Data::new(state(teams, opportunities))).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/top")
            .set_json(json!({ "limit": 50 }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["totalPairs"], 12);
        // Capped by max_limit
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 10);
        assert!(matches[0]["match"]["score"].as_u64().unwrap() >= matches[9]["match"]["score"].as_u64().unwrap());
    }

    #[actix_web::test]
    async fn test_score_match_malformed_json() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(vec![], vec![])))
                .app_data(json_config())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/score")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"team\": {\"id\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_json");
        assert_eq!(body["statusCode"], 400);
    }

    #[actix_web::test]
    async fn test_top_matches_rejects_too_many_pairs() {
        let teams: Vec<Team> = (0..5)
            .map(|i| serde_json::from_value(team_json(&format!("t{}", i), 4)).unwrap())
            .collect();
        let opportunities: Vec<Opportunity> = (0..5)
            .map(|i| serde_json::from_value(opportunity_json(&format!("o{}", i))).unwrap())
            .collect();

        let app = test::init_service(
            App::new().app_data(web::Data::new(state(teams, opportunities))).configure(configure),
        )
        .await;

        // 25 stored pairs against a cap of 20
        let req = test::TestRequest::post()
            .uri("/matches/top")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["statusCode"], 400);
    }

    #[actix_web::test]
    async fn test_top_matches_rejects_oversized_lists() {
        let app = test::init_service(
            App::new().app_data(web::Data::new(state(vec![], vec![]))).configure(configure),
        )
        .await;

        let teams: Vec<serde_json::Value> = (0..1001).map(|i| team_json(&format!("t{}", i), 4)).collect();
        let req = test::TestRequest::post()
            .uri("/matches/top")
            .set_json(json!({ "teams": teams, "opportunities": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
