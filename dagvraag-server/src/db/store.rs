//! Storage seam between the HTTP handlers and the database
//!
//! Handlers only talk to a `DailyStore`. The MySQL pool implements it by
//! delegating to the repositories; tests use [`MemoryStore`](super::MemoryStore).

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::MySqlPool;

use super::repos::{AnswerRepo, DbError, Question, QuestionRepo};
use crate::models::Score;

/// Everything the question-of-the-day endpoints need from storage
#[async_trait]
pub trait DailyStore: Send + Sync {
    /// The question scheduled on `day`, lowest id first.
    /// Fails with `DbError::NotFound` when nothing is scheduled.
    async fn question_for(&self, day: NaiveDate) -> Result<Question, DbError>;

    /// Scores submitted for a question, in storage order.
    async fn answers(&self, question_id: i64) -> Result<Vec<i64>, DbError>;

    /// Append one answer for a question.
    async fn insert_answer(&self, question_id: i64, score: Score) -> Result<(), DbError>;
}

#[async_trait]
impl DailyStore for MySqlPool {
    async fn question_for(&self, day: NaiveDate) -> Result<Question, DbError> {
        QuestionRepo::new(self).scheduled_on(day).await
    }

    async fn answers(&self, question_id: i64) -> Result<Vec<i64>, DbError> {
        AnswerRepo::new(self).scores_for(question_id).await
    }

    async fn insert_answer(&self, question_id: i64, score: Score) -> Result<(), DbError> {
        AnswerRepo::new(self).insert(question_id, score).await
    }
}
