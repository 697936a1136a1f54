mod question;

pub use question::{OptionLabel, QuestionRecord, QuizOption, Reference};

/// Screen the terminal front end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
