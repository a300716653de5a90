use crate::infra::{AppState, ScoringDefaults};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use credit_engine::batch::{score_csv, PortfolioSummary, ScoredCustomer};
use credit_engine::error::AppError;
use credit_engine::pricing::LoanQuote;
use credit_engine::scoring::{assess, CreditAssessment, CustomerRecord, LoanCategory};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

pub(crate) fn scoring_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/score", post(score_endpoint))
        .route("/api/v1/score/batch", post(batch_endpoint))
        .route("/api/v1/quote", post(quote_endpoint))
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchScoreRequest {
    /// Raw CSV content, header row included.
    pub(crate) csv: String,
    #[serde(default)]
    pub(crate) preview_limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchScoreResponse {
    pub(crate) rows: usize,
    pub(crate) summary: PortfolioSummary,
    pub(crate) preview: Vec<ScoredCustomer>,
    /// The input table with Credit_Score, Credit_Tier, and
    /// Default_Probability appended.
    pub(crate) csv: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteRequest {
    pub(crate) score: u16,
    #[serde(default)]
    pub(crate) category: LoanCategory,
    pub(crate) annual_income: f64,
    pub(crate) outstanding_debt: f64,
    pub(crate) principal: f64,
    pub(crate) term_months: u32,
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

pub(crate) async fn score_endpoint(
    Json(record): Json<CustomerRecord>,
) -> Json<CreditAssessment> {
    Json(assess(&record))
}

pub(crate) async fn batch_endpoint(
    Extension(defaults): Extension<ScoringDefaults>,
    Json(payload): Json<BatchScoreRequest>,
) -> Result<Json<BatchScoreResponse>, AppError> {
    let BatchScoreRequest { csv, preview_limit } = payload;
    let preview_limit = preview_limit.unwrap_or(defaults.preview_limit);

    let reader = Cursor::new(csv.into_bytes());
    let mut augmented = Vec::new();
    let outcome = score_csv(reader, &mut augmented, preview_limit)
        .map_err(AppError::from)?;
    let csv = String::from_utf8(augmented)
        .map_err(|err| AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))?;

    Ok(Json(BatchScoreResponse {
        rows: outcome.rows,
        summary: outcome.summary,
        preview: outcome.preview,
        csv,
    }))
}

pub(crate) async fn quote_endpoint(
    Json(payload): Json<QuoteRequest>,
) -> Result<Json<LoanQuote>, AppError> {
    let QuoteRequest {
        score,
        category,
        annual_income,
        outstanding_debt,
        principal,
        term_months,
    } = payload;

    let quote = LoanQuote::build(
        score,
        category,
        annual_income,
        outstanding_debt,
        principal,
        term_months,
    )?;
    Ok(Json(quote))
}
