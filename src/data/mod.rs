mod loader;
mod store;

pub use loader::{load_questions_from_csv, read_questions};
pub use store::{QuestionSource, QuestionStore};
