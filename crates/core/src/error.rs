use thiserror::Error;

use crate::model::{EntryError, ParseCategoryError, ParseModeError, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Category(#[from] ParseCategoryError),
    #[error(transparent)]
    Mode(#[from] ParseModeError),
}
