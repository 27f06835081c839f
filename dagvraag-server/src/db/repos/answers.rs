//! Answer repository
//!
//! Answers are append-only rows in `antwoorden`.

use sqlx::MySqlPool;

use super::DbError;
use crate::models::Score;

/// Answer repository
pub struct AnswerRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> AnswerRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Scores for a question in storage order. Empty is not an error.
    ///
    /// Rows with a NULL score are skipped. Older clients could insert
    /// them by leaving the field out.
    pub async fn scores_for(&self, question_id: i64) -> Result<Vec<i64>, DbError> {
        let scores = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT CAST(score AS SIGNED) AS score
            FROM antwoorden
            WHERE vraag_id = ? AND score IS NOT NULL
            ORDER BY id ASC
            "#,
        )
        .bind(question_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    /// Append one answer. A single-row insert, so autocommit keeps
    /// concurrent submissions independent.
    pub async fn insert(&self, question_id: i64, score: Score) -> Result<(), DbError> {
        sqlx::query("INSERT INTO antwoorden (vraag_id, score) VALUES (?, ?)")
            .bind(question_id)
            .bind(score.value())
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
