use std::collections::HashSet;

use thiserror::Error;

use crate::model::category::CategoryId;
use crate::model::entry::Entry;

/// Number of options a well-stocked question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("target {glyph} is not among the options")]
    TargetMissing { glyph: String },

    #[error("option {glyph} appears more than once")]
    DuplicateOption { glyph: String },

    #[error("distractor {glyph} is from {found}, expected {expected}")]
    ForeignDistractor {
        glyph: String,
        expected: CategoryId,
        found: CategoryId,
    },

    #[error("too many options: {len}")]
    TooManyOptions { len: usize },
}

/// A target entry and the shuffled options offered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    target: Entry,
    options: Vec<Entry>,
}

impl QuizQuestion {
    /// Builds a question, checking that the target appears once, options are
    /// distinct by glyph, and every distractor shares the target's category.
    ///
    /// # Errors
    ///
    /// Returns the first `QuestionError` found.
    pub fn new(target: Entry, options: Vec<Entry>) -> Result<Self, QuestionError> {
        if options.len() > OPTIONS_PER_QUESTION {
            return Err(QuestionError::TooManyOptions { len: options.len() });
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.glyph()) {
                return Err(QuestionError::DuplicateOption {
                    glyph: option.glyph().to_owned(),
                });
            }
            if !option.same_glyph(&target) && option.category() != target.category() {
                return Err(QuestionError::ForeignDistractor {
                    glyph: option.glyph().to_owned(),
                    expected: target.category(),
                    found: option.category(),
                });
            }
        }
        if !seen.contains(target.glyph()) {
            return Err(QuestionError::TargetMissing {
                glyph: target.glyph().to_owned(),
            });
        }

        Ok(Self { target, options })
    }

    #[must_use]
    pub fn target(&self) -> &Entry {
        &self.target
    }

    #[must_use]
    pub fn options(&self) -> &[Entry] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&Entry> {
        self.options.get(index)
    }

    /// Position of the target among the options.
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| o.same_glyph(&self.target))
            .unwrap_or_default()
    }

    /// Distractors in option order.
    pub fn distractors(&self) -> impl Iterator<Item = &Entry> {
        self.options.iter().filter(|o| !o.same_glyph(&self.target))
    }

    #[must_use]
    pub fn is_correct(&self, selected: &Entry) -> bool {
        selected.same_glyph(&self.target)
    }
}
