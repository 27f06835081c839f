//! Question of the day endpoint

use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::db::Question;
use crate::http::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Question response
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionResponse {
    #[schema(example = 12)]
    pub id: i64,
    #[schema(example = "Hoe tevreden ben je vandaag, van 1 tot 10?")]
    pub question_text: String,
    #[schema(value_type = String, format = Date, example = "2024-05-17")]
    pub scheduled_date: NaiveDate,
    /// Remaining columns of the question row, passed through as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question_text: q.question_text,
            scheduled_date: q.scheduled_date,
            extra: q.extra,
        }
    }
}

/// Look up the question scheduled for today.
pub(crate) async fn todays_question(state: &AppState) -> Result<Question, ApiError> {
    let today = state.today();
    let question = state.store().question_for(today).await?;
    tracing::debug!(question_id = question.id, %today, "question of the day");
    Ok(question)
}

/// GET /vraagvanvandaag - the question scheduled for today
#[utoipa::path(
    get,
    path = "/vraagvanvandaag",
    tag = "vraag",
    responses(
        (status = 200, description = "Today's question", body = QuestionResponse),
        (status = 404, description = "No question planned for today", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn get_question_of_the_day(
    State(state): State<AppState>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = todays_question(&state).await?;
    Ok(Json(QuestionResponse::from(question)))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new().route("/vraagvanvandaag", get(get_question_of_the_day))
}
