use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use super::user::{greeting, UserQuery};
use super::{ApiError, AppState};
use crate::report::{self, CorrelationMatrix, PollutantStats, Summary};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/stats", get(stats))
        .route("/summary", get(summary))
        .route("/correlation", get(correlation))
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    greeting: String,
    stats: PollutantStats,
}

#[derive(Debug, Serialize)]
struct SummaryResponse {
    greeting: String,
    #[serde(flatten)]
    summary: Summary,
}

#[derive(Debug, Serialize)]
struct CorrelationResponse {
    greeting: String,
    title: String,
    #[serde(flatten)]
    matrix: CorrelationMatrix,
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Handle `GET /stats`: mean, min and max per pollutant over every date.
async fn stats(
    query: Result<Query<UserQuery>, QueryRejection>,
    State(dataset): State<AppState>,
) -> Result<Json<StatsResponse>, ApiError> {
    // ---
    info!("GET /stats");
    let Query(user) = query?;
    let name = user.display_name()?;

    let mut stats = report::pollutant_stats(dataset.readings()).ok_or(ApiError::Empty)?;
    for s in [&mut stats.pm25, &mut stats.pm10, &mut stats.no2] {
        s.mean = round1(s.mean);
    }

    Ok(Json(StatsResponse {
        greeting: greeting(&name),
        stats,
    }))
}

/// Handle `GET /summary`: how often each alert and category occurs.
async fn summary(
    query: Result<Query<UserQuery>, QueryRejection>,
    State(dataset): State<AppState>,
) -> Result<Json<SummaryResponse>, ApiError> {
    // ---
    info!("GET /summary");
    let Query(user) = query?;
    let name = user.display_name()?;

    Ok(Json(SummaryResponse {
        greeting: greeting(&name),
        summary: report::summary(dataset.readings()),
    }))
}

/// Handle `GET /correlation`: the matrix behind the heatmap view.
async fn correlation(
    query: Result<Query<UserQuery>, QueryRejection>,
    State(dataset): State<AppState>,
) -> Result<Json<CorrelationResponse>, ApiError> {
    // ---
    info!("GET /correlation");
    let Query(user) = query?;
    let name = user.display_name()?;

    Ok(Json(CorrelationResponse {
        greeting: greeting(&name),
        title: format!("Pollutant Correlations for {name}"),
        matrix: report::correlation_matrix(dataset.readings()),
    }))
}
