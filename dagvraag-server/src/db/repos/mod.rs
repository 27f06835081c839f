//! Repository implementations for database access
//!
//! Each repository borrows the pool and runs parameterized queries only.
//! The schema is owned elsewhere; nothing here creates or alters tables.

pub mod answers;
pub mod questions;

pub use answers::AnswerRepo;
pub use questions::{Question, QuestionRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{message}")]
    NotFound { resource: &'static str, message: String },
}

impl DbError {
    /// No question is scheduled for the requested day.
    pub fn no_question() -> Self {
        Self::NotFound {
            resource: "question",
            message: "No question planned for today".to_owned(),
        }
    }

    /// Today's question exists but nobody has answered it yet.
    pub fn no_scores() -> Self {
        Self::NotFound {
            resource: "answer",
            message: "No scores found for today's question".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_message() {
        assert_eq!(DbError::no_question().to_string(), "No question planned for today");
        assert_eq!(
            DbError::no_scores().to_string(),
            "No scores found for today's question"
        );
    }
}
