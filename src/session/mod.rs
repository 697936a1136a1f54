//! Quiz session lifecycle: sampling, answering, submitting, scoring.

mod quiz;
mod registry;
mod score;

pub use quiz::{QuizSession, SessionPhase, start_quiz};
pub use registry::{SessionId, SessionRegistry};
pub use score::{Grade, ScoreReport, Verdict};
