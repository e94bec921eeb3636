use chrono::{DateTime, Utc};

use kana_core::model::{QuizMode, ResultRow, ScoreSummary};

use super::session::QuizSession;

/// Presentation-agnostic result screen for a quiz.
///
/// No pre-formatted strings beyond the entries' own text; the caller decides
/// how to render percentages and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizReport {
    pub mode: QuizMode,
    pub title: String,
    pub summary: ScoreSummary,
    pub rows: Vec<ResultRow>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl QuizReport {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            mode: session.mode(),
            title: session.title().to_owned(),
            summary: session.summary(),
            rows: session.rows(),
            started_at: session.started_at(),
            completed_at: session.completed_at(),
        }
    }

    /// Rows answered incorrectly, for a review list.
    pub fn mistakes(&self) -> impl Iterator<Item = &ResultRow> {
        self.rows.iter().filter(|r| !r.is_correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kana_core::model::{AlphabetKind, CategoryId, Entry, QuizQuestion, Verdict};
    use kana_core::time::fixed_now;

    fn word(glyph: &str, meaning: &str) -> Entry {
        Entry::new(
            glyph,
            glyph,
            "",
            AlphabetKind::Kanji,
            CategoryId::N5KanjiBasic,
            Some(meaning.into()),
        )
        .unwrap()
    }

    #[test]
    fn report_lists_mistakes() {
        let sun = word("日", "sun");
        let moon = word("月", "moon");
        let questions = vec![
            QuizQuestion::new(sun.clone(), vec![sun.clone(), moon.clone()]).unwrap(),
            QuizQuestion::new(moon.clone(), vec![sun.clone(), moon.clone()]).unwrap(),
        ];
        let mut session =
            QuizSession::new(QuizMode::KanjiGrammar, "Kanji & Grammar", questions, fixed_now());
        session.answer_current(0, fixed_now()).unwrap();
        session.answer_current(0, fixed_now()).unwrap();

        let report = QuizReport::from_session(&session);
        assert_eq!(report.title, "Kanji & Grammar");
        assert_eq!(report.summary.score, 1);
        assert_eq!(report.summary.verdict, Verdict::KeepPracticing);
        assert_eq!(report.completed_at, Some(fixed_now()));

        let mistakes: Vec<_> = report.mistakes().collect();
        assert_eq!(mistakes.len(), 1);
        assert_eq!(mistakes[0].glyph, "月");
        assert_eq!(mistakes[0].expected, "moon");
        assert_eq!(mistakes[0].chosen, "sun");
    }
}
