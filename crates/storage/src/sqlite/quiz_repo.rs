use quiz_core::model::{Quiz, QuizId, ValidatedQuiz};

use super::{SqliteRepository, mapping::map_quiz_row};
use crate::repository::{QuizRepository, StorageError};

#[async_trait::async_trait]
impl QuizRepository for SqliteRepository {
    async fn find_all(&self) -> Result<Vec<Quiz>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, question, answer, created_at
            FROM quizzes
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut quizzes = Vec::with_capacity(rows.len());
        for row in rows {
            quizzes.push(map_quiz_row(&row)?);
        }
        Ok(quizzes)
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, question, answer, created_at
            FROM quizzes
            WHERE id = ?1
            ",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.map(|row| map_quiz_row(&row)).transpose()
    }

    async fn create(&self, draft: ValidatedQuiz) -> Result<Quiz, StorageError> {
        let result = sqlx::query(
            r"
            INSERT INTO quizzes (question, answer, created_at)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(&draft.question)
        .bind(&draft.answer)
        .bind(draft.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(draft.assign_id(QuizId::new(result.last_insert_rowid())))
    }

    async fn save(&self, quiz: &Quiz) -> Result<(), StorageError> {
        let result = sqlx::query(
            r"
            UPDATE quizzes
            SET question = ?2, answer = ?3
            WHERE id = ?1
            ",
        )
        .bind(quiz.id.value())
        .bind(&quiz.question)
        .bind(&quiz.answer)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: QuizId) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = ?1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
