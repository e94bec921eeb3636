use crate::model::entry::Entry;
use crate::model::question::QuizQuestion;

//
// ─── QUIZ RESULT ───────────────────────────────────────────────────────────────
//

/// Outcome of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub question: QuizQuestion,
    pub selected: Entry,
    pub is_correct: bool,
}

impl QuizResult {
    /// Scores `selected` against the question's target.
    #[must_use]
    pub fn grade(question: QuizQuestion, selected: Entry) -> Self {
        let is_correct = question.is_correct(&selected);
        Self {
            question,
            selected,
            is_correct,
        }
    }
}

//
// ─── RESULT LOG ────────────────────────────────────────────────────────────────
//

/// Append-only record of answers in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultLog {
    results: Vec<QuizResult>,
}

impl ResultLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, result: QuizResult) -> &QuizResult {
        self.results.push(result);
        &self.results[self.results.len() - 1]
    }

    #[must_use]
    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of correct answers.
    #[must_use]
    pub fn final_score(&self) -> usize {
        self.results.iter().filter(|r| r.is_correct).count()
    }

    /// Share of correct answers among those given; `0.0` for an empty log.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.final_score() as f64 / self.results.len() as f64
    }
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Coarse grade band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every question answered correctly.
    Perfect,
    /// At least 80% correct.
    Great,
    KeepPracticing,
}

impl Verdict {
    /// Grades `score` out of `total` questions.
    #[must_use]
    pub fn from_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return Self::KeepPracticing;
        }
        if score >= total {
            Self::Perfect
        } else if score * 5 >= total * 4 {
            Self::Great
        } else {
            Self::KeepPracticing
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Perfect => "Perfect! You're a master!",
            Verdict::Great => "Very good! Keep it up.",
            Verdict::KeepPracticing => "A little more practice needed.",
        }
    }
}

/// Aggregate numbers for a quiz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
    pub answered: usize,
    pub accuracy: f64,
    pub verdict: Verdict,
}

impl ScoreSummary {
    /// Summarizes `log` against a quiz of `total` questions.
    #[must_use]
    pub fn from_log(log: &ResultLog, total: usize) -> Self {
        let score = log.final_score();
        Self {
            score,
            total,
            answered: log.len(),
            accuracy: log.accuracy(),
            verdict: Verdict::from_score(score, total),
        }
    }
}

/// One line of the per-question breakdown.
///
/// Carries plain text only; formatting is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// 1-based question number.
    pub position: usize,
    pub glyph: String,
    pub expected: String,
    pub chosen: String,
    pub is_correct: bool,
}

impl ResultRow {
    #[must_use]
    pub fn from_result(position: usize, result: &QuizResult) -> Self {
        let target = result.question.target();
        Self {
            position,
            glyph: target.glyph().to_owned(),
            expected: target.answer_text().to_owned(),
            chosen: result.selected.answer_text().to_owned(),
            is_correct: result.is_correct,
        }
    }

    /// Rows for every result in `log`, numbered from 1.
    #[must_use]
    pub fn from_log(log: &ResultLog) -> Vec<Self> {
        log.results()
            .iter()
            .enumerate()
            .map(|(i, r)| Self::from_result(i + 1, r))
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
