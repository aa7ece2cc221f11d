use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use payout_advisor::advisor::{
    Advisor, AnswerSet, Assessment, AvailabilityResult, CoverageResult, IntegrationFamily,
    Question, RegionAlias,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct CoverageRequest {
    pub(crate) integration: IntegrationFamily,
    #[serde(default)]
    pub(crate) source: Option<String>,
    #[serde(default)]
    pub(crate) destinations: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AvailabilityRequest {
    pub(crate) integration: IntegrationFamily,
    #[serde(default)]
    pub(crate) source: Option<String>,
}

/// Questionnaire and assessment endpoints backed by one shared advisor.
pub(crate) fn advisor_router(advisor: Arc<Advisor>) -> Router {
    Router::new()
        .route("/api/v1/advisor/questions", get(questions_handler))
        .route("/api/v1/advisor/regions", get(regions_handler))
        .route("/api/v1/advisor/assessment", post(assessment_handler))
        .route("/api/v1/advisor/coverage", post(coverage_handler))
        .route("/api/v1/advisor/availability", post(availability_handler))
        .with_state(advisor)
}

pub(crate) fn with_advisor_routes(advisor: Arc<Advisor>) -> Router {
    advisor_router(advisor)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questions_handler(State(advisor): State<Arc<Advisor>>) -> Json<Vec<Question>> {
    Json(advisor.questionnaire())
}

pub(crate) async fn regions_handler(State(advisor): State<Arc<Advisor>>) -> Json<Vec<RegionAlias>> {
    Json(advisor.tables().regions().to_vec())
}

pub(crate) async fn assessment_handler(
    State(advisor): State<Arc<Advisor>>,
    Json(answers): Json<AnswerSet>,
) -> Json<Assessment> {
    Json(advisor.assess(&answers))
}

pub(crate) async fn coverage_handler(
    State(advisor): State<Arc<Advisor>>,
    Json(request): Json<CoverageRequest>,
) -> Json<CoverageResult> {
    Json(advisor.classify(
        request.integration,
        request.source.as_deref(),
        request.destinations.as_deref(),
    ))
}

pub(crate) async fn availability_handler(
    State(advisor): State<Arc<Advisor>>,
    Json(request): Json<AvailabilityRequest>,
) -> Json<AvailabilityResult> {
    Json(advisor.availability(request.integration, request.source.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use payout_advisor::advisor::{AvailabilityStatus, CoverageStatus, RuleId};
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn advisor() -> Arc<Advisor> {
        Arc::new(Advisor::standard())
    }

    fn app_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn assessment_handler_recommends_and_annotates() {
        let answers = AnswerSet::from_flags(false, true, true, false, true)
            .with_source("United Kingdom")
            .with_destinations(["Canada"]);

        let Json(body) = assessment_handler(State(advisor()), Json(answers)).await;

        assert_eq!(body.recommendation.rule, RuleId::PlatformMerchantOfRecord);
        assert_eq!(body.recommendation.integration, IntegrationFamily::Connect);
        assert_eq!(body.market_availability.status, AvailabilityStatus::Supported);
        assert_eq!(body.coverage.status, CoverageStatus::FullySupported);
        assert!(body.conflict.is_none());
    }

    #[tokio::test]
    async fn coverage_handler_reports_unknown_without_source() {
        let request = CoverageRequest {
            integration: IntegrationFamily::GlobalPayouts,
            source: None,
            destinations: Some(vec!["France".to_string()]),
        };

        let Json(body) = coverage_handler(State(advisor()), Json(request)).await;

        assert_eq!(body.status, CoverageStatus::Unknown);
        assert_eq!(body.total(), 0);
    }

    #[tokio::test]
    async fn availability_handler_flags_unsupported_sender() {
        let request = AvailabilityRequest {
            integration: IntegrationFamily::GlobalPayouts,
            source: Some("Germany".to_string()),
        };

        let Json(body) = availability_handler(State(advisor()), Json(request)).await;

        assert_eq!(body.status, AvailabilityStatus::Partial);
        assert!(body.details.is_some());
    }

    #[tokio::test]
    async fn readiness_tracks_flag() {
        let ready = readiness_endpoint(Extension(app_state(true)))
            .await
            .into_response();
        assert_eq!(ready.status(), StatusCode::OK);

        let starting = readiness_endpoint(Extension(app_state(false)))
            .await
            .into_response();
        assert_eq!(starting.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn questions_route_lists_catalog() {
        let response = with_advisor_routes(advisor())
            .oneshot(
                Request::get("/api/v1/advisor/questions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        let questions = body.as_array().expect("array of questions");
        assert_eq!(questions.len(), 7);
        assert_eq!(questions[0]["id"], "own_funds");
        assert_eq!(questions[6]["type"], "multiselect");
    }

    #[tokio::test]
    async fn assessment_route_accepts_partial_answers() {
        let (status, body) = post_json(
            with_advisor_routes(advisor()),
            "/api/v1/advisor/assessment",
            json!({ "own_funds": true, "international_payouts": false }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendation"]["integration"], "global-payouts");
        assert_eq!(body["coverage"]["status"], "unknown");
    }

    #[tokio::test]
    async fn coverage_route_expands_regions() {
        let (status, body) = post_json(
            with_advisor_routes(advisor()),
            "/api/v1/advisor/coverage",
            json!({
                "integration": "global-payouts",
                "source": "United States",
                "destinations": ["North America"]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let supported = body["supported"].as_array().expect("supported bucket");
        assert!(supported.iter().any(|country| country == "Canada"));
    }

    #[tokio::test]
    async fn malformed_bodies_are_client_errors() {
        let response = with_advisor_routes(advisor())
            .oneshot(
                Request::post("/api/v1/advisor/availability")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());

        let response = with_advisor_routes(advisor())
            .oneshot(
                Request::post("/api/v1/advisor/availability")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"integration":"wire"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
