#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use engine::console::{Console, ConsoleError};
use quiz_core::model::{Quiz, QuizDraft, QuizId, ValidatedQuiz};
use quiz_core::time::fixed_now;
use storage::repository::{InMemoryRepository, QuizRepository, StorageError};

/// Console double fed a fixed script of answers; records everything the
/// operation wrote and how often the prompt was resumed.
#[derive(Default)]
pub struct ScriptedConsole {
    answers: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
    lines: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    resumes: AtomicUsize,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(ToString::to_string).collect()),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn resume_count(&self) -> usize {
        self.resumes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn ask(&self, prompt: &str) -> Result<String, ConsoleError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or(ConsoleError::Closed)
    }

    fn display(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }

    fn display_error(&self, line: &str) {
        self.errors.lock().unwrap().push(line.to_string());
    }

    fn resume_prompt(&self) {
        self.resumes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Repository double that counts calls while delegating to the in-memory
/// implementation.
#[derive(Default)]
pub struct CountingRepo {
    pub inner: InMemoryRepository,
    pub find_all_calls: AtomicUsize,
    pub find_by_id_calls: AtomicUsize,
}

#[async_trait]
impl QuizRepository for CountingRepo {
    async fn find_all(&self) -> Result<Vec<Quiz>, StorageError> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StorageError> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn create(&self, draft: ValidatedQuiz) -> Result<Quiz, StorageError> {
        self.inner.create(draft).await
    }

    async fn save(&self, quiz: &Quiz) -> Result<(), StorageError> {
        self.inner.save(quiz).await
    }

    async fn delete(&self, id: QuizId) -> Result<u64, StorageError> {
        self.inner.delete(id).await
    }
}

pub async fn seed(repo: &dyn QuizRepository, pairs: &[(&str, &str)]) -> Vec<Quiz> {
    let mut created = Vec::with_capacity(pairs.len());
    for (question, answer) in pairs {
        let draft = QuizDraft::new(*question, *answer).validate(fixed_now()).unwrap();
        created.push(repo.create(draft).await.unwrap());
    }
    created
}
