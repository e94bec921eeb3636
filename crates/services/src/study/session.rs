use std::fmt;

use dataset::CategoryRepository;
use kana_core::RandomSource;
use kana_core::model::{CategoryId, Entry};

use super::deck::{StudyDeck, StudyOrder, build_deck};

/// Where the learner is in a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyProgress {
    /// 1-based position of the current card, 0 for an empty deck.
    pub position: usize,
    pub total: usize,
    pub is_finished: bool,
}

impl StudyProgress {
    /// Fraction of the deck reached so far; `0.0` for an empty deck.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position as f64 / self.total as f64
    }
}

/// Flip-card browsing over one deck.
#[derive(Clone)]
pub struct StudySession {
    deck: StudyDeck,
    current: usize,
    finished: bool,
}

impl StudySession {
    #[must_use]
    pub fn new(deck: StudyDeck) -> Self {
        Self {
            deck,
            current: 0,
            finished: false,
        }
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.deck.category
    }

    #[must_use]
    pub fn order(&self) -> StudyOrder {
        self.deck.order
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.deck.category.label()
    }

    #[must_use]
    pub fn deck(&self) -> &StudyDeck {
        &self.deck
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_entry(&self) -> Option<&Entry> {
        self.deck.entries.get(self.current)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Moves to the next card; on the last card the session becomes finished.
    pub fn next(&mut self) {
        if self.current + 1 < self.deck.len() {
            self.current += 1;
        } else {
            self.finished = true;
        }
    }

    /// Moves back one card. Does nothing on the first card.
    pub fn prev(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    #[must_use]
    pub fn progress(&self) -> StudyProgress {
        let total = self.deck.len();
        StudyProgress {
            position: if total == 0 { 0 } else { self.current + 1 },
            total,
            is_finished: self.finished,
        }
    }

    /// Starts over with the same category and order. A shuffled deck gets a
    /// new permutation.
    pub fn restart<D, R>(&mut self, repo: &D, rng: &mut R)
    where
        D: CategoryRepository + ?Sized,
        R: RandomSource + ?Sized,
    {
        self.deck = build_deck(repo, self.deck.category, self.deck.order, rng);
        self.current = 0;
        self.finished = false;
    }
}

impl fmt::Debug for StudySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudySession")
            .field("category", &self.deck.category)
            .field("order", &self.deck.order)
            .field("deck_len", &self.deck.len())
            .field("current", &self.current)
            .field("finished", &self.finished)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::builtin;
    use kana_core::random::seeded_rng;

    fn ordered(category: CategoryId) -> StudySession {
        let repo = builtin().unwrap();
        StudySession::new(build_deck(
            &repo,
            category,
            StudyOrder::Ordered,
            &mut seeded_rng(0),
        ))
    }

    #[test]
    fn walks_forward_and_finishes_on_last_card() {
        let mut session = ordered(CategoryId::N5Particles);
        let total = session.deck().len();
        assert_eq!(session.current_entry().unwrap().glyph(), "は");

        for _ in 1..total {
            session.next();
        }
        assert_eq!(session.current_index(), total - 1);
        assert!(!session.is_finished());

        session.next();
        assert!(session.is_finished());
        assert_eq!(session.current_index(), total - 1);
        assert!((session.progress().fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn prev_is_a_no_op_on_first_card() {
        let mut session = ordered(CategoryId::HiraganaBasic);
        session.prev();
        assert_eq!(session.current_index(), 0);
        session.next();
        session.next();
        session.prev();
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.current_entry().unwrap().glyph(), "い");
    }

    #[test]
    fn restart_resets_position() {
        let repo = builtin().unwrap();
        let mut rng = seeded_rng(3);
        let mut session = StudySession::new(build_deck(
            &repo,
            CategoryId::KatakanaBasic,
            StudyOrder::Shuffled,
            &mut rng,
        ));
        let before = session.deck().entries.clone();
        session.next();
        session.next();

        session.restart(&repo, &mut rng);
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_finished());
        assert_eq!(session.order(), StudyOrder::Shuffled);
        assert_eq!(session.deck().len(), before.len());
        assert_ne!(session.deck().entries, before);
    }

    #[test]
    fn empty_deck_reports_zero_progress() {
        let repo = dataset::InMemoryRepository::new();
        let mut session = StudySession::new(build_deck(
            &repo,
            CategoryId::Dates,
            StudyOrder::Ordered,
            &mut seeded_rng(0),
        ));
        assert!(session.current_entry().is_none());
        let progress = session.progress();
        assert_eq!(progress.position, 0);
        assert!(progress.fraction().abs() < f64::EPSILON);
        session.next();
        assert!(session.is_finished());
    }

    #[test]
    fn title_is_category_label() {
        let session = ordered(CategoryId::N5Greetings);
        assert_eq!(session.title(), "Greetings & Phrases");
    }
}
