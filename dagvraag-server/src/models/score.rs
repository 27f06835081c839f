//! Answer scores
//!
//! Scores are plain integers with no enforced range. The only rule is
//! that a submitted score must be present.

use super::ValidationError;

/// Validated answer score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score(i64);

impl Score {
    /// Wrap a score value. Any integer is accepted.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Build a score from an optional request field.
    ///
    /// `None` covers both an explicit JSON `null` and an absent field;
    /// both are rejected.
    ///
    /// # Example
    /// ```
    /// use dagvraag_server::models::Score;
    ///
    /// assert!(Score::from_field(Some(5)).is_ok());
    /// assert!(Score::from_field(None).is_err());
    /// ```
    pub fn from_field(value: Option<i64>) -> Result<Self, ValidationError> {
        value
            .map(Self)
            .ok_or(ValidationError::Missing { field: "score" })
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_integer() {
        assert_eq!(Score::from_field(Some(0)).unwrap().value(), 0);
        assert_eq!(Score::from_field(Some(-12)).unwrap().value(), -12);
        assert_eq!(Score::from_field(Some(i64::MAX)).unwrap().value(), i64::MAX);
    }

    #[test]
    fn rejects_missing() {
        let err = Score::from_field(None).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "score" });
    }
}
