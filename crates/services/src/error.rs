//! Shared error types for the services crate.

use thiserror::Error;

use dataset::DatasetError;
use kana_core::model::{CategoryId, QuestionError, QuizMode};

/// Errors raised while loading or validating the quiz mode table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModeConfigError {
    #[error("target question count must be > 0")]
    ZeroTarget,
    #[error("mode {0} is configured more than once")]
    DuplicateMode(QuizMode),
    #[error("mode {mode} asks for {requested} questions, above the target of {target}")]
    OverBudget {
        mode: QuizMode,
        requested: usize,
        target: usize,
    },
    #[error("mode {mode} lists category {category} more than once")]
    DuplicateCategory { mode: QuizMode, category: CategoryId },
    #[error("malformed mode table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors emitted by quiz sessions and the quiz service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz mode {0} is not configured")]
    UnknownMode(QuizMode),
    #[error("quiz already completed")]
    Completed,
    #[error("answer for question {got} arrived while question {expected} is current")]
    OutOfOrder { expected: usize, got: usize },
    #[error("option {index} does not exist (question has {len} options)")]
    InvalidOption { index: usize, len: usize },
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Errors emitted by study sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudyError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
