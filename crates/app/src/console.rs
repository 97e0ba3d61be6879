use std::io::Write;

use async_trait::async_trait;
use engine::console::{Console, ConsoleError};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Prompt surface over stdin/stdout.
///
/// The dispatcher and the command operations read from the same line
/// stream; the engine guarantees only one of them is waiting at a time.
pub struct StdConsole {
    input: Mutex<Lines<BufReader<Stdin>>>,
}

impl StdConsole {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Read the next command line; `None` on end of input.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if reading from stdin fails.
    pub async fn read_command(&self) -> Result<Option<String>, ConsoleError> {
        Ok(self.input.lock().await.next_line().await?)
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

fn write_inline(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}

#[async_trait]
impl Console for StdConsole {
    async fn ask(&self, prompt: &str) -> Result<String, ConsoleError> {
        write_inline(prompt);
        let line = self.input.lock().await.next_line().await?;
        line.map(|l| l.trim().to_string())
            .ok_or(ConsoleError::Closed)
    }

    fn display(&self, line: &str) {
        println!("{line}");
    }

    fn display_error(&self, line: &str) {
        eprintln!("{line}");
    }

    fn resume_prompt(&self) {
        write_inline("quiz> ");
    }
}
