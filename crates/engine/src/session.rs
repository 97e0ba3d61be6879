use quiz_core::model::Quiz;
use rand::Rng;

/// Terminal state of a play round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every question was answered correctly.
    Won,
    /// A question was answered incorrectly; the rest were discarded unasked.
    Lost,
}

/// One randomized quiz round: a pending-answer set drawn from without
/// replacement, plus the running score.
///
/// Exclusively owned by a single `play` invocation. Once an outcome is set
/// the session is inert: no further draws succeed and the score is frozen.
#[derive(Debug)]
pub struct PlaySession {
    remaining: Vec<Quiz>,
    score: u32,
    outcome: Option<SessionOutcome>,
}

impl PlaySession {
    /// Start a round over the given records with a score of zero.
    #[must_use]
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self {
            remaining: quizzes,
            score: 0,
            outcome: None,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of records not yet asked.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Pick the next question uniformly at random, removing it from the
    /// pending set the instant it is selected.
    ///
    /// Returns `None` once the round is over; an exhausted pending set
    /// finishes the round as a win.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Quiz> {
        if self.outcome.is_some() {
            return None;
        }
        if self.remaining.is_empty() {
            self.outcome = Some(SessionOutcome::Won);
            return None;
        }
        let index = rng.random_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(index))
    }

    /// Score `response` against the drawn quiz.
    ///
    /// A match increments the score; a mismatch finishes the round as a
    /// loss. Submitting after the round is over changes nothing.
    pub fn submit(&mut self, quiz: &Quiz, response: &str) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        if quiz.matches_answer(response) {
            self.score += 1;
            true
        } else {
            self.outcome = Some(SessionOutcome::Lost);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuizDraft, QuizId};
    use quiz_core::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build_quiz(id: i64) -> Quiz {
        QuizDraft::new(format!("Q{id}"), format!("A{id}"))
            .validate(fixed_now())
            .unwrap()
            .assign_id(QuizId::new(id))
    }

    #[test]
    fn empty_set_finishes_immediately_as_win() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = PlaySession::new(Vec::new());
        assert!(session.draw(&mut rng).is_none());
        assert_eq!(session.outcome(), Some(SessionOutcome::Won));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn draws_each_record_exactly_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let quizzes: Vec<Quiz> = (1..=20).map(build_quiz).collect();
        let mut session = PlaySession::new(quizzes);

        let mut seen = Vec::new();
        while let Some(quiz) = session.draw(&mut rng) {
            assert!(!seen.contains(&quiz.id), "record drawn twice");
            seen.push(quiz.id);
            assert!(session.submit(&quiz, &quiz.answer));
        }

        assert_eq!(seen.len(), 20);
        assert_eq!(session.score(), 20);
        assert_eq!(session.outcome(), Some(SessionOutcome::Won));
    }

    #[test]
    fn wrong_answer_finishes_as_loss_with_score_frozen() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = PlaySession::new(vec![build_quiz(1), build_quiz(2)]);

        let first = session.draw(&mut rng).unwrap();
        assert!(session.submit(&first, &first.answer));
        assert_eq!(session.score(), 1);

        let second = session.draw(&mut rng).unwrap();
        assert!(!session.submit(&second, "wrong"));
        assert_eq!(session.outcome(), Some(SessionOutcome::Lost));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn finished_session_is_inert() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = PlaySession::new(vec![build_quiz(1), build_quiz(2), build_quiz(3)]);

        let first = session.draw(&mut rng).unwrap();
        assert!(!session.submit(&first, "wrong"));

        // no further questions, score never changes
        assert!(session.draw(&mut rng).is_none());
        assert!(!session.submit(&first, &first.answer));
        assert_eq!(session.score(), 0);
        assert_eq!(session.outcome(), Some(SessionOutcome::Lost));
        assert_eq!(session.remaining(), 2);
    }

    #[test]
    fn correct_answers_ignore_case_and_whitespace() {
        let quiz = build_quiz(1);
        let mut session = PlaySession::new(vec![quiz.clone()]);
        let mut rng = StdRng::seed_from_u64(0);
        let drawn = session.draw(&mut rng).unwrap();
        assert!(session.submit(&drawn, &format!("  {}  ", quiz.answer.to_uppercase())));
        assert_eq!(session.score(), 1);
    }
}
