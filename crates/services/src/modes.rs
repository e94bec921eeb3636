//! Quiz mode table.
//!
//! Which categories a quiz draws from, and how, is configuration data rather
//! than code. The table ships as `data/modes.json` and may be replaced by a
//! file at runtime.

use std::collections::HashSet;
use std::path::Path;

use kana_core::model::{CategoryId, QuizMode};
use serde::{Deserialize, Serialize};

use crate::error::{ModeConfigError, QuizError};

/// Mode table shipped with the crate.
pub const BUILTIN_MODES: &str = include_str!("../data/modes.json");

/// Number of questions a quiz aims for unless configured otherwise.
pub const DEFAULT_TARGET_QUESTIONS: usize = 30;

/// A topic area of a balanced quiz and the number of targets drawn from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub categories: Vec<CategoryId>,
    pub count: usize,
}

/// How quiz targets are selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Merge all categories into one pool and sample from it.
    Pooled { categories: Vec<CategoryId> },
    /// Sample a fixed count from each bucket independently.
    Balanced { buckets: Vec<Bucket> },
}

impl Strategy {
    /// Every category the strategy may draw from, in configuration order.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryId> {
        match self {
            Strategy::Pooled { categories } => categories.clone(),
            Strategy::Balanced { buckets } => buckets
                .iter()
                .flat_map(|b| b.categories.iter().copied())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeConfig {
    pub id: QuizMode,
    pub title: String,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeTable {
    target_questions: usize,
    modes: Vec<ModeConfig>,
}

impl ModeTable {
    /// Builds a validated table.
    ///
    /// # Errors
    ///
    /// Returns `ModeConfigError::ZeroTarget` if `target_questions` is 0,
    /// `DuplicateMode` if a mode appears twice, `DuplicateCategory` if a mode
    /// names a category twice (within a pool or across buckets), and
    /// `OverBudget` if a balanced mode's bucket counts add up to more than
    /// `target_questions`.
    pub fn new(target_questions: usize, modes: Vec<ModeConfig>) -> Result<Self, ModeConfigError> {
        let table = Self {
            target_questions,
            modes,
        };
        table.validate()?;
        Ok(table)
    }

    /// Parses the shipped table.
    ///
    /// # Errors
    ///
    /// Only fails if the shipped file is malformed.
    pub fn builtin() -> Result<Self, ModeConfigError> {
        Self::parse_str(BUILTIN_MODES)
    }

    /// Parses and validates a JSON table.
    ///
    /// # Errors
    ///
    /// Returns `ModeConfigError::Parse` on malformed JSON, otherwise as [`ModeTable::new`].
    pub fn parse_str(raw: &str) -> Result<Self, ModeConfigError> {
        let table: Self = serde_json::from_str(raw)?;
        table.validate()?;
        Ok(table)
    }

    /// Reads, parses and validates a JSON table from disk.
    ///
    /// # Errors
    ///
    /// Returns `ModeConfigError::Io` if the file cannot be read, otherwise as
    /// [`ModeTable::parse_str`].
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ModeConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModeConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse_str(&raw)
    }

    fn validate(&self) -> Result<(), ModeConfigError> {
        if self.target_questions == 0 {
            return Err(ModeConfigError::ZeroTarget);
        }
        let mut seen = HashSet::new();
        for mode in &self.modes {
            if !seen.insert(mode.id) {
                return Err(ModeConfigError::DuplicateMode(mode.id));
            }
            let mut categories = HashSet::new();
            for category in mode.strategy.categories() {
                if !categories.insert(category) {
                    return Err(ModeConfigError::DuplicateCategory {
                        mode: mode.id,
                        category,
                    });
                }
            }
            if let Strategy::Balanced { buckets } = &mode.strategy {
                let requested: usize = buckets.iter().map(|b| b.count).sum();
                if requested > self.target_questions {
                    return Err(ModeConfigError::OverBudget {
                        mode: mode.id,
                        requested,
                        target: self.target_questions,
                    });
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn target_questions(&self) -> usize {
        self.target_questions
    }

    #[must_use]
    pub fn modes(&self) -> &[ModeConfig] {
        &self.modes
    }

    /// Looks up the configuration of `mode`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownMode` if the table has no row for `mode`.
    pub fn get(&self, mode: QuizMode) -> Result<&ModeConfig, QuizError> {
        self.modes
            .iter()
            .find(|m| m.id == mode)
            .ok_or(QuizError::UnknownMode(mode))
    }
}
