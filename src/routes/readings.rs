use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::user::{greeting, UserQuery};
use super::{ApiError, AppState};
use crate::dataset::{parse_date, ClassifiedReading, Dataset};
use crate::{lookup_advice, AlertStatus, AqiCategory, Concentration, Pollutant, Reading};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/readings/{date}", get(reading_by_date))
        .route("/comparison/{date}", get(comparison))
}

#[derive(Debug, Serialize)]
struct ReadingResponse {
    greeting: String,
    #[serde(flatten)]
    classified: ClassifiedReading,
    level: u8,
    advice: &'static str,
}

#[derive(Debug, Serialize)]
struct ComparisonResponse {
    greeting: String,
    date: NaiveDate,
    highest_pollutant: Pollutant,
    highest_value: Concentration,
    alert: AlertStatus,
    category: AqiCategory,
}

/// Validate name and date, then look the reading up.
fn resolve(
    dataset: &Dataset,
    user: &UserQuery,
    raw_date: &str,
) -> Result<(String, Reading), ApiError> {
    // ---
    let name = user.display_name()?;
    let date = parse_date(raw_date)?;
    debug!("Looking up reading for {}", date);

    match dataset.find_by_date(date) {
        Some(reading) => Ok((name, *reading)),
        None => {
            warn!("No reading for {}", date);
            Err(ApiError::NoData(date))
        }
    }
}

/// Handle `GET /readings/{date}`: the reading with its alert, category
/// and advice.
async fn reading_by_date(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<UserQuery>, QueryRejection>,
    State(dataset): State<AppState>,
) -> Result<Json<ReadingResponse>, ApiError> {
    // ---
    let Path(raw_date) = path?;
    let Query(user) = query?;
    info!("GET /readings/{}", raw_date);

    let (name, reading) = resolve(&dataset, &user, &raw_date)?;
    let classified = ClassifiedReading::new(reading);

    Ok(Json(ReadingResponse {
        greeting: greeting(&name),
        level: classified.category.level(),
        advice: lookup_advice(classified.category),
        classified,
    }))
}

/// Handle `GET /comparison/{date}`: the dominant pollutant on that day.
async fn comparison(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<UserQuery>, QueryRejection>,
    State(dataset): State<AppState>,
) -> Result<Json<ComparisonResponse>, ApiError> {
    // ---
    let Path(raw_date) = path?;
    let Query(user) = query?;
    info!("GET /comparison/{}", raw_date);

    let (name, reading) = resolve(&dataset, &user, &raw_date)?;
    let classified = ClassifiedReading::new(reading);
    let (highest_pollutant, highest_value) = reading.highest_pollutant();

    Ok(Json(ComparisonResponse {
        greeting: greeting(&name),
        date: reading.date(),
        highest_pollutant,
        highest_value,
        alert: classified.alert,
        category: classified.category,
    }))
}
