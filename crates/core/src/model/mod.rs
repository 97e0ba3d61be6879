mod ids;
mod quiz;

pub use ids::{ParseIdError, QuizId};
pub use quiz::{FieldViolation, Quiz, QuizDraft, QuizValidationError, ValidatedQuiz};
