mod builder;
mod plan;
mod progress;
mod session;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use builder::{build_question, build_session};
pub use plan::{BucketDraw, TargetPlan, select_targets};
pub use progress::QuizProgress;
pub use session::QuizSession;
pub use view::QuizReport;
pub use workflow::{QuizAnswerResult, QuizService};
