//! Error types for loading the question bank and driving quiz sessions.

use std::io;
use std::path::PathBuf;

use uuid::Uuid;

/// Errors raised while loading the question bank. All of them are fatal at
/// startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The question file does not exist.
    #[error("question file not found: '{}'", path.display())]
    NotFound { path: PathBuf },

    /// The question file exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid CSV (or not valid UTF-8).
    #[error("failed to parse '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No question rows were found below the header.
    #[error("'{}' contains no questions", path.display())]
    Empty { path: PathBuf },

    /// No row in the header window names every required column.
    #[error("'{}' is missing required columns: {}", path.display(), missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },

    /// A question row breaks a record invariant.
    #[error("malformed question on line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    /// A record handed to the store directly breaks a record invariant.
    #[error("invalid question at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

impl LoadError {
    /// Creates a new `Malformed` error.
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

/// Caller-contract violations on a quiz session. None of them mutate the
/// session they were raised for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot pick {requested} questions from a bank of {available}")]
    InvalidCount { requested: usize, available: usize },

    #[error("question {id} is not part of this quiz")]
    UnknownQuestion { id: usize },

    #[error("'{value}' is not an option of question {id}")]
    InvalidAnswer { id: usize, value: String },

    #[error("question {id} has no option for its answer key")]
    BrokenAnswerKey { id: usize },

    #[error("quiz already submitted")]
    SessionClosed,

    #[error("quiz has not been submitted yet")]
    NotSubmitted,

    #[error("no quiz session with id {id}")]
    UnknownSession { id: Uuid },
}

/// Top-level error for running a quiz.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
