#![forbid(unsafe_code)]

pub mod error;
pub mod modes;
pub mod quiz;
pub mod study;

pub use kana_core::Clock;

pub use error::{ModeConfigError, QuizError, StudyError};
pub use modes::{Bucket, ModeConfig, ModeTable, Strategy};

pub use quiz::{
    QuizAnswerResult, QuizProgress, QuizReport, QuizService, QuizSession, build_session,
};
pub use study::{
    CategoryOverview, StudyDeck, StudyOrder, StudyProgress, StudyService, StudySession, build_deck,
};
