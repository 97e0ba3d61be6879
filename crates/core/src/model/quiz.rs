use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuizId;

//
// ─── QUIZ TYPES ────────────────────────────────────────────────────────────────
//

/// Raw question/answer text as entered by the user, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub question: String,
    pub answer: String,
}

impl QuizDraft {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Trim both fields and check the content invariant.
    ///
    /// Every empty field yields its own violation, so callers can report
    /// all problems at once rather than stopping at the first.
    ///
    /// # Errors
    ///
    /// Returns `QuizValidationError` listing each empty field.
    pub fn validate(self, now: DateTime<Utc>) -> Result<ValidatedQuiz, QuizValidationError> {
        let question = self.question.trim().to_owned();
        let answer = self.answer.trim().to_owned();

        let mut violations = Vec::new();
        if question.is_empty() {
            violations.push(FieldViolation::EmptyQuestion);
        }
        if answer.is_empty() {
            violations.push(FieldViolation::EmptyAnswer);
        }
        if !violations.is_empty() {
            return Err(QuizValidationError { violations });
        }

        Ok(ValidatedQuiz {
            question,
            answer,
            created_at: now,
        })
    }
}

/// Quiz content that passed validation but has no identity yet.
///
/// Repositories accept this shape on create, so invalid content cannot
/// reach storage in the first place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuiz {
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

impl ValidatedQuiz {
    #[must_use]
    pub fn assign_id(self, id: QuizId) -> Quiz {
        Quiz {
            id,
            question: self.question,
            answer: self.answer,
            created_at: self.created_at,
        }
    }
}

/// A persisted question/answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    /// Whether `response` matches the stored answer, comparing both sides
    /// trimmed and lowercased.
    #[must_use]
    pub fn matches_answer(&self, response: &str) -> bool {
        self.answer.trim().to_lowercase() == response.trim().to_lowercase()
    }
}

//
// ─── QUIZ VALIDATION ERRORS ────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolation {
    #[error("question must not be empty")]
    EmptyQuestion,

    #[error("answer must not be empty")]
    EmptyAnswer,
}

/// The quiz content was rejected; one violation per offending field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid quiz content")]
pub struct QuizValidationError {
    pub violations: Vec<FieldViolation>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
