use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::Clock;
use quiz_core::model::{Quiz, QuizDraft};
use storage::repository::QuizRepository;

use crate::console::Console;
use crate::error::CommandError;
use crate::session::{PlaySession, SessionOutcome};
use crate::validator::validate_id;

/// One user command, as handed over by the dispatcher. Commands that take a
/// raw `<id>` argument carry it unparsed; validation happens inside the
/// operation so that failures surface uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show(Option<String>),
    Add,
    Delete(Option<String>),
    Edit(Option<String>),
    Test(Option<String>),
    Play,
}

impl Command {
    /// Map a command word plus optional argument to a `Command`.
    ///
    /// Returns `None` for words this engine does not own (`help`, `quit`
    /// and anything unknown stay with the dispatcher).
    #[must_use]
    pub fn parse(name: &str, arg: Option<&str>) -> Option<Self> {
        let arg = arg.map(str::to_string);
        match name {
            "list" => Some(Self::List),
            "show" => Some(Self::Show(arg)),
            "add" => Some(Self::Add),
            "delete" => Some(Self::Delete(arg)),
            "edit" => Some(Self::Edit(arg)),
            "test" => Some(Self::Test(arg)),
            "p" | "play" => Some(Self::Play),
            _ => None,
        }
    }
}

/// Resumes the dispatcher prompt when dropped, so every exit path of a
/// command pipeline signals completion exactly once.
struct PromptGuard<'a> {
    console: &'a dyn Console,
}

impl Drop for PromptGuard<'_> {
    fn drop(&mut self) {
        self.console.resume_prompt();
    }
}

/// Runs one command operation at a time against the quiz repository.
#[derive(Clone)]
pub struct CommandService {
    clock: Clock,
    quizzes: Arc<dyn QuizRepository>,
}

impl CommandService {
    #[must_use]
    pub fn new(clock: Clock, quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { clock, quizzes }
    }

    /// Run `command` to completion: validate, talk to the repository,
    /// prompt as needed, report. Errors are written to the console and
    /// never propagate; the dispatcher prompt is resumed on every path.
    pub async fn execute(&self, console: &dyn Console, command: Command) {
        log::debug!("executing {command:?}");
        let _guard = PromptGuard { console };
        let result = match command {
            Command::List => self.list(console).await,
            Command::Show(raw_id) => self.show(console, raw_id.as_deref()).await,
            Command::Add => self.add(console).await,
            Command::Delete(raw_id) => self.delete(raw_id.as_deref()).await,
            Command::Edit(raw_id) => self.edit(console, raw_id.as_deref()).await,
            Command::Test(raw_id) => self.test(console, raw_id.as_deref()).await,
            Command::Play => self.play(console).await,
        };
        if let Err(err) = result {
            report_error(console, &err);
        }
    }

    async fn list(&self, console: &dyn Console) -> Result<(), CommandError> {
        let quizzes = self.quizzes.find_all().await?;
        for quiz in quizzes {
            console.display(&format!("[{}] {}", quiz.id, quiz.question));
        }
        Ok(())
    }

    async fn show(&self, console: &dyn Console, raw_id: Option<&str>) -> Result<(), CommandError> {
        let quiz = self.fetch(raw_id).await?;
        console.display(&format!("[{}] {} => {}", quiz.id, quiz.question, quiz.answer));
        Ok(())
    }

    async fn add(&self, console: &dyn Console) -> Result<(), CommandError> {
        let question = console.ask("Enter a question: ").await?;
        let answer = console.ask("Enter the answer: ").await?;
        let draft = QuizDraft::new(question, answer).validate(self.clock.now())?;
        let quiz = self.quizzes.create(draft).await?;
        console.display(&format!("Added: {} => {}", quiz.question, quiz.answer));
        Ok(())
    }

    async fn delete(&self, raw_id: Option<&str>) -> Result<(), CommandError> {
        let id = validate_id(raw_id)?;
        // deleting a missing id is a silent no-op
        self.quizzes.delete(id).await?;
        Ok(())
    }

    async fn edit(&self, console: &dyn Console, raw_id: Option<&str>) -> Result<(), CommandError> {
        let mut quiz = self.fetch(raw_id).await?;
        let question = console.ask_with_default("Question", &quiz.question).await?;
        let answer = console.ask_with_default("Answer", &quiz.answer).await?;
        let validated = QuizDraft::new(question, answer).validate(self.clock.now())?;
        quiz.question = validated.question;
        quiz.answer = validated.answer;
        self.quizzes.save(&quiz).await?;
        console.display(&format!(
            "Updated quiz {}: {} => {}",
            quiz.id, quiz.question, quiz.answer
        ));
        Ok(())
    }

    async fn test(&self, console: &dyn Console, raw_id: Option<&str>) -> Result<(), CommandError> {
        let quiz = self.fetch(raw_id).await?;
        console.display(&format!("[{}] {}", quiz.id, quiz.question));
        let response = console.ask("Your answer: ").await?;
        if quiz.matches_answer(&response) {
            console.display("Correct.");
        } else {
            console.display("Incorrect.");
        }
        Ok(())
    }

    async fn play(&self, console: &dyn Console) -> Result<(), CommandError> {
        // one fetch per session; records added mid-round stay invisible
        let quizzes = self.quizzes.find_all().await?;
        let mut rng = StdRng::from_os_rng();
        let mut session = PlaySession::new(quizzes);

        while let Some(quiz) = session.draw(&mut rng) {
            let response = console.ask(&format!("{}? ", quiz.question)).await?;
            if session.submit(&quiz, &response) {
                console.display(&format!("Correct - {} in a row", session.score()));
            } else {
                console.display("Incorrect.");
            }
        }

        if session.outcome() == Some(SessionOutcome::Won) {
            console.display("Nothing left to ask.");
        }
        console.display(&format!("Round over. Score: {}", session.score()));
        Ok(())
    }

    async fn fetch(&self, raw_id: Option<&str>) -> Result<Quiz, CommandError> {
        let id = validate_id(raw_id)?;
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or(CommandError::NotFound(id))
    }
}

fn report_error(console: &dyn Console, err: &CommandError) {
    match err {
        CommandError::Validation(err) => {
            console.display_error("The quiz is invalid:");
            for violation in &err.violations {
                console.display_error(&format!("  {violation}"));
            }
        }
        other => console.display_error(&other.to_string()),
    }
}
