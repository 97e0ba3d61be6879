use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the prompt surface.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConsoleError {
    #[error("input stream closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The line-based prompt surface consumed by command operations.
///
/// `ask` is the single suspension primitive: one question, one trimmed
/// answer. Operations never issue a second `ask` before the first has
/// resolved, so implementations may share a single input stream.
#[async_trait]
pub trait Console: Send + Sync {
    /// Print `prompt` and wait for one line of input, trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Closed` when the input stream has ended.
    async fn ask(&self, prompt: &str) -> Result<String, ConsoleError>;

    /// Like `ask`, but showing `current` as the value kept when the user
    /// submits an empty line. Plain stdin cannot pre-fill an editable
    /// buffer, so this is the editing affordance instead.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Closed` when the input stream has ended.
    async fn ask_with_default(&self, prompt: &str, current: &str) -> Result<String, ConsoleError> {
        let response = self.ask(&format!("{prompt} [{current}]: ")).await?;
        if response.is_empty() {
            Ok(current.to_string())
        } else {
            Ok(response)
        }
    }

    /// Write one line of regular output.
    fn display(&self, line: &str);

    /// Write one line of error output.
    fn display_error(&self, line: &str);

    /// Signal command completion so the dispatcher shows its prompt again.
    fn resume_prompt(&self);
}
