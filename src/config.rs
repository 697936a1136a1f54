use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

/// Question file read when none is given on the command line.
pub const DEFAULT_QUESTIONS_PATH: &str = "questions.csv";

/// Startup options for a quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub questions: PathBuf,
    /// Initial value of the question-count picker. Falls back to the
    /// store's default and is clamped to the bank size.
    pub count: Option<usize>,
    /// Seed for the sampler; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions: PathBuf::from(DEFAULT_QUESTIONS_PATH),
            count: None,
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Picker start value for a bank of `available` questions.
    pub fn initial_count(&self, default: usize, available: usize) -> usize {
        self.count.unwrap_or(default).clamp(1, available.max(1))
    }
}

/// Logging options for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub verbose: bool,
    /// Logs go to a file instead of stderr.
    pub to_file: bool,
}

impl LogSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> &'static str {
        match (self.to_file, self.verbose) {
            (true, true) => "debug",
            (true, false) => "info",
            (false, _) => "warn",
        }
    }

    /// Most detailed level that is written at all. The quiz screens own the
    /// terminal, so stderr never gets more than warnings, whatever
    /// `RUST_LOG` asks for.
    pub fn ceiling(&self) -> LevelFilter {
        if self.to_file {
            LevelFilter::TRACE
        } else {
            LevelFilter::WARN
        }
    }
}
