//! OpenAPI description assembled from the handler annotations

use utoipa::OpenApi;

use super::error::ErrorBody;
use super::routes::{answers, question, results};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "De vraag van de dag API",
        version = "1.0.0",
        description = "API documentatie voor de vraag van de dag"
    ),
    servers(
        (url = "http://localhost:1234", description = "Local server")
    ),
    paths(
        question::get_question_of_the_day,
        results::get_results,
        results::get_average,
        answers::submit_answer,
    ),
    components(
        schemas(
            question::QuestionResponse,
            results::ScoreEntry,
            results::AverageResponse,
            answers::SubmitAnswerRequest,
            answers::MessageResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "vraag", description = "Question of the day, answers and averages")
    )
)]
pub struct ApiDoc;

/// Render the OpenAPI document as JSON.
pub fn to_json(pretty: bool) -> Result<String, serde_json::Error> {
    let doc = ApiDoc::openapi();
    if pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
}
