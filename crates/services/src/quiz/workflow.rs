use std::sync::Arc;

use dataset::CategoryRepository;
use kana_core::Clock;
use kana_core::model::{QuizMode, QuizResult};
use kana_core::random::{entropy_rng, seeded_rng};
use rand::rngs::StdRng;

use super::builder::build_session;
use super::session::QuizSession;
use super::view::QuizReport;
use crate::error::QuizError;
use crate::modes::ModeTable;

/// Result of answering a single question in a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub result: QuizResult,
    pub is_complete: bool,
}

/// Orchestrates quiz start, answering and reporting.
///
/// Owns the time source and the random source so sessions stay deterministic
/// under a fixed clock and seed.
pub struct QuizService {
    clock: Clock,
    repo: Arc<dyn CategoryRepository>,
    modes: ModeTable,
    rng: StdRng,
}

impl QuizService {
    #[must_use]
    pub fn new(repo: Arc<dyn CategoryRepository>, modes: ModeTable) -> Self {
        Self {
            clock: Clock::default(),
            repo,
            modes,
            rng: entropy_rng(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Makes question generation reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = seeded_rng(seed);
        self
    }

    #[must_use]
    pub fn modes(&self) -> &ModeTable {
        &self.modes
    }

    /// Generate a fresh quiz for `mode`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownMode` if the mode table has no row for `mode`,
    /// or a dataset error while building questions.
    pub fn start_quiz(&mut self, mode: QuizMode) -> Result<QuizSession, QuizError> {
        let now = self.clock.now();
        let session = build_session(mode, &self.modes, self.repo.as_ref(), &mut self.rng, now)?;
        log::info!(
            "started {mode} quiz with {} questions",
            session.total_questions()
        );
        Ok(session)
    }

    /// Answer the current question with the option at `option_index`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` or `QuizError::InvalidOption` from the session.
    pub fn answer_current(
        &self,
        session: &mut QuizSession,
        option_index: usize,
    ) -> Result<QuizAnswerResult, QuizError> {
        let now = self.clock.now();
        let result = session.answer_current(option_index, now)?.clone();
        let is_complete = session.is_complete();
        if is_complete {
            log::info!(
                "finished {} quiz: {}/{}",
                session.mode(),
                session.final_score(),
                session.total_questions()
            );
        }
        Ok(QuizAnswerResult {
            result,
            is_complete,
        })
    }

    /// Result screen for a finished quiz, `None` while questions remain.
    #[must_use]
    pub fn report(&self, session: &QuizSession) -> Option<QuizReport> {
        session
            .is_complete()
            .then(|| QuizReport::from_session(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::builtin;
    use kana_core::time::fixed_now;

    fn service(seed: u64) -> QuizService {
        QuizService::new(Arc::new(builtin().unwrap()), ModeTable::builtin().unwrap())
            .with_clock(Clock::fixed(fixed_now()))
            .with_seed(seed)
    }

    #[test]
    fn seeded_services_generate_identical_quizzes() {
        let a = service(11).start_quiz(QuizMode::FullMix).unwrap();
        let b = service(11).start_quiz(QuizMode::FullMix).unwrap();
        assert_eq!(a.questions(), b.questions());
        assert_eq!(a.started_at(), fixed_now());
    }

    #[test]
    fn answering_all_correct_gives_perfect_report() {
        let mut svc = service(2);
        let mut session = svc.start_quiz(QuizMode::KatakanaOnly).unwrap();
        assert!(svc.report(&session).is_none());

        let mut last = None;
        while let Some(q) = session.current_question() {
            let correct = q.correct_index();
            last = Some(svc.answer_current(&mut session, correct).unwrap());
        }
        assert!(last.unwrap().is_complete);

        let report = svc.report(&session).unwrap();
        assert_eq!(report.summary.score, 30);
        assert_eq!(report.summary.verdict, kana_core::model::Verdict::Perfect);
        assert_eq!(report.mistakes().count(), 0);
    }

    #[test]
    fn answer_after_completion_fails() {
        let mut svc = service(3);
        let mut session = svc.start_quiz(QuizMode::VocabOnly).unwrap();
        while session.current_question().is_some() {
            svc.answer_current(&mut session, 0).unwrap();
        }
        let err = svc.answer_current(&mut session, 0).unwrap_err();
        assert!(matches!(err, QuizError::Completed));
    }
}
