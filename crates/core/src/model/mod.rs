mod category;
mod entry;
mod mode;
mod question;
mod result;

pub use category::{CategoryId, ParseCategoryError};
pub use entry::{AlphabetKind, Entry, EntryError};
pub use mode::{ParseModeError, QuizMode};
pub use question::{OPTIONS_PER_QUESTION, QuestionError, QuizQuestion};
pub use result::{QuizResult, ResultLog, ResultRow, ScoreSummary, Verdict};
