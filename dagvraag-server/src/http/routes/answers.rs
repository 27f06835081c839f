//! Answer submission endpoint

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::question::todays_question;
use crate::http::error::{ApiError, ErrorBody};
use crate::http::extractors::JsonBody;
use crate::models::Score;
use crate::state::AppState;

/// Submit answer request
///
/// `score` is optional at the type level so that `null` and an absent
/// field both reach validation instead of failing deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitAnswerRequest {
    #[serde(default)]
    #[schema(example = 5)]
    pub score: Option<i64>,
}

/// Confirmation message
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Score added successfully")]
    pub message: String,
}

/// POST /antwoorden - record a score for today's question
#[utoipa::path(
    post,
    path = "/antwoorden",
    tag = "vraag",
    request_body(
        content = SubmitAnswerRequest,
        description = "Score for today's question",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Score stored", body = MessageResponse),
        (status = 400, description = "Score is null, missing or not an integer", body = ErrorBody),
        (status = 404, description = "No question planned for today", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn submit_answer(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SubmitAnswerRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let score = Score::from_field(req.score)?;
    let question = todays_question(&state).await?;

    state.store().insert_answer(question.id, score).await?;
    tracing::info!(question_id = question.id, score = score.value(), "score added");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Score added successfully".to_owned(),
        }),
    ))
}

/// Answer routes
pub fn router() -> Router<AppState> {
    Router::new().route("/antwoorden", post(submit_answer))
}
