use async_trait::async_trait;
use quiz_core::model::{Quiz, QuizId, ValidatedQuiz};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for quiz records.
///
/// Content validation happens before this boundary: `create` only accepts a
/// `ValidatedQuiz`, so adapters never see empty questions or answers.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Fetch every quiz, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the records cannot be read.
    async fn find_all(&self) -> Result<Vec<Quiz>, StorageError>;

    /// Fetch a single quiz by id; `None` when no record matches.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for storage failures (a missing record is not
    /// a failure).
    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StorageError>;

    /// Persist a new quiz, assigning its id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the quiz cannot be stored.
    async fn create(&self, draft: ValidatedQuiz) -> Result<Quiz, StorageError>;

    /// Persist mutations made to a previously fetched quiz.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the quiz no longer exists, or
    /// other storage errors.
    async fn save(&self, quiz: &Quiz) -> Result<(), StorageError>;

    /// Delete the quiz with the given id, returning the number of records
    /// removed. Deleting a missing id is a no-op that returns 0.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete cannot be executed.
    async fn delete(&self, id: QuizId) -> Result<u64, StorageError>;
}

#[derive(Default)]
struct InMemoryState {
    quizzes: HashMap<QuizId, Quiz>,
    next_id: i64,
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Quiz>, StorageError> {
        let guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut all: Vec<Quiz> = guard.quizzes.values().cloned().collect();
        all.sort_by_key(|quiz| quiz.id);
        Ok(all)
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StorageError> {
        let guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.quizzes.get(&id).cloned())
    }

    async fn create(&self, draft: ValidatedQuiz) -> Result<Quiz, StorageError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.next_id += 1;
        let quiz = draft.assign_id(QuizId::new(guard.next_id));
        guard.quizzes.insert(quiz.id, quiz.clone());
        Ok(quiz)
    }

    async fn save(&self, quiz: &Quiz) -> Result<(), StorageError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        match guard.quizzes.get_mut(&quiz.id) {
            Some(existing) => {
                *existing = quiz.clone();
                Ok(())
            }
            None => Err(StorageError::NotFound),
        }
    }

    async fn delete(&self, id: QuizId) -> Result<u64, StorageError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(u64::from(guard.quizzes.remove(&id).is_some()))
    }
}

/// Aggregates the quiz repository behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub quizzes: Arc<dyn QuizRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            quizzes: Arc::new(InMemoryRepository::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuizDraft;
    use quiz_core::time::fixed_now;

    fn build_draft(question: &str, answer: &str) -> ValidatedQuiz {
        QuizDraft::new(question, answer).validate(fixed_now()).unwrap()
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryRepository::new();
        let first = repo.create(build_draft("Q1", "A1")).await.unwrap();
        let second = repo.create(build_draft("Q2", "A2")).await.unwrap();
        assert_eq!(first.id, QuizId::new(1));
        assert_eq!(second.id, QuizId::new(2));
    }

    #[tokio::test]
    async fn find_all_orders_by_id() {
        let repo = InMemoryRepository::new();
        for i in 1..=3 {
            repo.create(build_draft(&format!("Q{i}"), &format!("A{i}")))
                .await
                .unwrap();
        }
        let all = repo.find_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|q| q.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn find_by_id_misses_for_unknown_id() {
        let repo = InMemoryRepository::new();
        repo.create(build_draft("Q", "A")).await.unwrap();
        assert!(repo.find_by_id(QuizId::new(99)).await.unwrap().is_none());
        assert!(repo.find_by_id(QuizId::new(-1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_updates_existing_quiz() {
        let repo = InMemoryRepository::new();
        let mut quiz = repo.create(build_draft("Q", "A")).await.unwrap();
        quiz.question = "Q2".into();
        quiz.answer = "A2".into();
        repo.save(&quiz).await.unwrap();

        let fetched = repo.find_by_id(quiz.id).await.unwrap().unwrap();
        assert_eq!(fetched.question, "Q2");
        assert_eq!(fetched.answer, "A2");
    }

    #[tokio::test]
    async fn save_fails_for_missing_quiz() {
        let repo = InMemoryRepository::new();
        let quiz = build_draft("Q", "A").assign_id(QuizId::new(7));
        let err = repo.save(&quiz).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn delete_reports_removed_count() {
        let repo = InMemoryRepository::new();
        let quiz = repo.create(build_draft("Q", "A")).await.unwrap();
        assert_eq!(repo.delete(quiz.id).await.unwrap(), 1);
        assert_eq!(repo.delete(quiz.id).await.unwrap(), 0);
        assert_eq!(repo.delete(QuizId::new(123)).await.unwrap(), 0);
    }
}
