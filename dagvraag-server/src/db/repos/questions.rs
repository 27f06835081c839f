//! Question repository
//!
//! Questions live in `vragen` and are scheduled by `gepland_op`.
//! This service only reads them. Columns beyond the three it knows about
//! are carried along untyped so the response passes them through.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use sqlx::mysql::MySqlRow;
use sqlx::{Column, FromRow, MySqlPool, Row, ValueRef};

use super::DbError;

/// Columns of `vragen` that map onto typed fields
const MAPPED_COLUMNS: [&str; 3] = ["id", "vraag", "gepland_op"];

/// Aliases for the typed projections, never part of `extra`
const ID_ALIAS: &str = "dagvraag_id";
const TEXT_ALIAS: &str = "dagvraag_text";
const DATE_ALIAS: &str = "dagvraag_date";

/// Question record from database
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub scheduled_date: NaiveDate,
    /// Any other columns of the row, keyed by column name
    pub extra: BTreeMap<String, Value>,
}

impl<'r> FromRow<'r, MySqlRow> for Question {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        let mut extra = BTreeMap::new();
        for column in row.columns() {
            let name = column.name();
            if MAPPED_COLUMNS.contains(&name) || name.starts_with("dagvraag_") {
                continue;
            }
            extra.insert(name.to_owned(), column_json(row, column.ordinal())?);
        }

        Ok(Self {
            id: row.try_get(ID_ALIAS)?,
            question_text: row.try_get(TEXT_ALIAS)?,
            scheduled_date: row.try_get(DATE_ALIAS)?,
            extra,
        })
    }
}

/// Decode one column of unknown type into JSON.
///
/// Types without a mapping here (DECIMAL, BLOB, ...) come out as `null`.
fn column_json(row: &MySqlRow, index: usize) -> Result<Value, sqlx::Error> {
    if row.try_get_raw(index)?.is_null() {
        return Ok(Value::Null);
    }

    let value = if let Ok(v) = row.try_get::<i64, _>(index) {
        Value::from(v)
    } else if let Ok(v) = row.try_get::<u64, _>(index) {
        Value::from(v)
    } else if let Ok(v) = row.try_get::<f64, _>(index) {
        Value::from(v)
    } else if let Ok(v) = row.try_get::<f32, _>(index) {
        Value::from(f64::from(v))
    } else if let Ok(v) = row.try_get::<String, _>(index) {
        Value::from(v)
    } else if let Ok(v) = row.try_get::<NaiveDate, _>(index) {
        Value::from(v.to_string())
    } else if let Ok(v) = row.try_get::<NaiveDateTime, _>(index) {
        Value::from(v.format("%Y-%m-%dT%H:%M:%S").to_string())
    } else if let Ok(v) = row.try_get::<DateTime<Utc>, _>(index) {
        Value::from(v.to_rfc3339())
    } else {
        Value::Null
    };

    Ok(value)
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Get the question scheduled on `day`.
    ///
    /// When several questions share a day the lowest id wins, so the
    /// choice does not depend on the storage engine's row order.
    pub async fn scheduled_on(&self, day: NaiveDate) -> Result<Question, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT
                v.*,
                CAST(v.id AS SIGNED) AS dagvraag_id,
                v.vraag AS dagvraag_text,
                DATE(v.gepland_op) AS dagvraag_date
            FROM vragen v
            WHERE DATE(v.gepland_op) = ?
            ORDER BY v.id ASC
            LIMIT 1
            "#,
        )
        .bind(day)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(DbError::no_question)?;

        Ok(question)
    }
}
