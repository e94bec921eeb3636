use std::fmt;

use chrono::{DateTime, Utc};
use kana_core::model::{
    Entry, QuizMode, QuizQuestion, QuizResult, ResultLog, ResultRow, ScoreSummary,
};

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// A generated quiz being answered front to back.
///
/// Questions are answered strictly in order; each answer is graded and
/// appended to the result log. After the last answer the session is complete
/// and further answers are rejected.
#[derive(Clone)]
pub struct QuizSession {
    mode: QuizMode,
    title: String,
    questions: Vec<QuizQuestion>,
    current: usize,
    log: ResultLog,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Creates a session over `questions`.
    ///
    /// A session without questions is complete from the start.
    #[must_use]
    pub fn new(
        mode: QuizMode,
        title: impl Into<String>,
        questions: Vec<QuizQuestion>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let completed_at = questions.is_empty().then_some(started_at);
        Self {
            mode,
            title: title.into(),
            questions,
            current: 0,
            log: ResultLog::new(),
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn log(&self) -> &ResultLog {
        &self.log
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based index of the question awaiting an answer.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.questions.len(),
            answered: self.log.len(),
            remaining: self.questions.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// Grades `selected` for question `index` and advances.
    ///
    /// `answered_at` should come from the services layer clock; it becomes the
    /// completion time when this was the last question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` once every question is answered, and
    /// `QuizError::OutOfOrder` if `index` is not the current question. The log
    /// is left untouched in both cases.
    pub fn record_answer(
        &mut self,
        index: usize,
        selected: &Entry,
        answered_at: DateTime<Utc>,
    ) -> Result<&QuizResult, QuizError> {
        if self.is_complete() {
            log::warn!("answer for question {index} after the quiz completed");
            return Err(QuizError::Completed);
        }
        if index != self.current {
            return Err(QuizError::OutOfOrder {
                expected: self.current,
                got: index,
            });
        }
        let Some(question) = self.questions.get(index) else {
            return Err(QuizError::Completed);
        };

        let result = QuizResult::grade(question.clone(), selected.clone());
        self.current += 1;
        if self.current >= self.questions.len() {
            self.completed_at = Some(answered_at);
        }
        Ok(self.log.append(result))
    }

    /// Answers the current question with the option at `option_index`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` if nothing is left to answer and
    /// `QuizError::InvalidOption` if the question has no such option.
    pub fn answer_current(
        &mut self,
        option_index: usize,
        answered_at: DateTime<Utc>,
    ) -> Result<&QuizResult, QuizError> {
        let Some(question) = self.current_question() else {
            log::warn!("answer after the quiz completed");
            return Err(QuizError::Completed);
        };
        let selected = question
            .option(option_index)
            .cloned()
            .ok_or(QuizError::InvalidOption {
                index: option_index,
                len: question.options().len(),
            })?;
        self.record_answer(self.current, &selected, answered_at)
    }

    /// Number of correct answers so far.
    #[must_use]
    pub fn final_score(&self) -> usize {
        self.log.final_score()
    }

    /// Share of correct answers among those given.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.log.accuracy()
    }

    #[must_use]
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::from_log(&self.log, self.questions.len())
    }

    #[must_use]
    pub fn rows(&self) -> Vec<ResultRow> {
        ResultRow::from_log(&self.log)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("mode", &self.mode)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("results_len", &self.log.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
