use quiz_core::model::{Quiz, QuizId};
use sqlx::Row;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn map_quiz_row(row: &sqlx::sqlite::SqliteRow) -> Result<Quiz, StorageError> {
    let id: i64 = row.try_get("id").map_err(ser)?;
    let question: String = row.try_get("question").map_err(ser)?;
    let answer: String = row.try_get("answer").map_err(ser)?;
    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(ser)?;

    Ok(Quiz {
        id: QuizId::new(id),
        question,
        answer,
        created_at,
    })
}
