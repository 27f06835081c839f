//! In-memory store
//!
//! Mirrors the two tables as vectors behind a lock. Used to drive the
//! router without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use super::repos::{DbError, Question};
use super::store::DailyStore;
use crate::models::Score;

/// Stored answer row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRow {
    pub id: i64,
    pub question_id: i64,
    /// `None` for rows written by clients that left the score out
    pub score: Option<i64>,
}

#[derive(Default)]
struct Tables {
    questions: Vec<Question>,
    answers: Vec<AnswerRow>,
}

/// Store backed by process memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision a question, as an operator would directly in the database.
    pub async fn schedule(&self, id: i64, text: &str, day: NaiveDate) {
        self.add_question(Question {
            id,
            question_text: text.to_owned(),
            scheduled_date: day,
            extra: BTreeMap::new(),
        })
        .await;
    }

    /// Provision a fully specified question row, extra columns included.
    pub async fn add_question(&self, question: Question) {
        self.tables.write().await.questions.push(question);
    }

    /// Append an answer row without a score.
    pub async fn insert_null_score(&self, question_id: i64) {
        self.push_answer(question_id, None).await;
    }

    async fn push_answer(&self, question_id: i64, score: Option<i64>) {
        let mut tables = self.tables.write().await;
        let id = tables.answers.len() as i64 + 1;
        tables.answers.push(AnswerRow {
            id,
            question_id,
            score,
        });
    }

    /// All stored answers in insertion order.
    pub async fn answer_rows(&self) -> Vec<AnswerRow> {
        self.tables.read().await.answers.clone()
    }
}

#[async_trait]
impl DailyStore for MemoryStore {
    async fn question_for(&self, day: NaiveDate) -> Result<Question, DbError> {
        self.tables
            .read()
            .await
            .questions
            .iter()
            .filter(|q| q.scheduled_date == day)
            .min_by_key(|q| q.id)
            .cloned()
            .ok_or_else(DbError::no_question)
    }

    async fn answers(&self, question_id: i64) -> Result<Vec<i64>, DbError> {
        Ok(self
            .tables
            .read()
            .await
            .answers
            .iter()
            .filter(|a| a.question_id == question_id)
            .filter_map(|a| a.score)
            .collect())
    }

    async fn insert_answer(&self, question_id: i64, score: Score) -> Result<(), DbError> {
        self.push_answer(question_id, Some(score.value())).await;
        Ok(())
    }
}
