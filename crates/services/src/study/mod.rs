mod deck;
mod service;
mod session;

pub use deck::{StudyDeck, StudyOrder, build_deck};
pub use service::{CategoryOverview, StudyService};
pub use session::{StudyProgress, StudySession};
