//! Result endpoints - raw scores and the rounded-up average

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use super::question::todays_question;
use crate::db::DbError;
use crate::http::error::{ApiError, ErrorBody};
use crate::models::ceiling_mean;
use crate::state::AppState;

/// One submitted score
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreEntry {
    #[schema(example = 7)]
    pub score: i64,
}

/// Average response
#[derive(Debug, Serialize, ToSchema)]
pub struct AverageResponse {
    /// Mean of all scores, rounded up
    #[schema(example = 4)]
    pub average: i64,
}

/// GET /resultaten - every score submitted for today's question
#[utoipa::path(
    get,
    path = "/resultaten",
    tag = "vraag",
    responses(
        (status = 200, description = "Scores in submission order", body = [ScoreEntry]),
        (status = 404, description = "No question planned for today", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn get_results(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScoreEntry>>, ApiError> {
    let question = todays_question(&state).await?;
    let scores = state.store().answers(question.id).await?;

    Ok(Json(
        scores.into_iter().map(|score| ScoreEntry { score }).collect(),
    ))
}

/// GET /gemiddelde - average score for today's question
#[utoipa::path(
    get,
    path = "/gemiddelde",
    tag = "vraag",
    responses(
        (status = 200, description = "Average score, rounded up to a whole number", body = AverageResponse),
        (status = 404, description = "No question planned for today, or no scores yet", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn get_average(
    State(state): State<AppState>,
) -> Result<Json<AverageResponse>, ApiError> {
    let question = todays_question(&state).await?;
    let scores = state.store().answers(question.id).await?;

    let average = ceiling_mean(&scores).ok_or_else(DbError::no_scores)?;

    Ok(Json(AverageResponse { average }))
}

/// Result routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/resultaten", get(get_results))
        .route("/gemiddelde", get(get_average))
}
