//! Shared error types for the command engine.

use thiserror::Error;

use quiz_core::model::{QuizId, QuizValidationError};
use storage::repository::StorageError;

use crate::console::ConsoleError;

/// Everything a command operation can fail with.
///
/// All variants are caught at the `CommandService::execute` boundary and
/// written to the console as error output; none of them escape the
/// operation or end the process.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CommandError {
    #[error("missing <id> parameter")]
    MissingParameter,

    #[error("the <id> parameter is not a number: {raw:?}")]
    NotANumber { raw: String },

    #[error("no quiz found for id={0}")]
    NotFound(QuizId),

    #[error(transparent)]
    Validation(#[from] QuizValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Console(#[from] ConsoleError),
}
