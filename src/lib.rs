//! # quiz-bank
//!
//! Practice multiple-choice questions from a CSV question bank in the
//! terminal: pick how many questions to draw, answer them in any order,
//! submit, and review each answer against the key with its reference.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_bank::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a CSV file
//!     let quiz = Quiz::from_csv("questions.csv")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The session lifecycle can also be driven without a terminal:
//!
//! ```rust,no_run
//! use quiz_bank::{QuestionSource, start_quiz};
//!
//! # fn main() -> Result<(), quiz_bank::QuizError> {
//! let store = QuestionSource::new("questions.csv").load()?;
//! let mut session = start_quiz(&store, 5, &mut rand::thread_rng())?;
//! let first = session.selected_ids()[0];
//! session.record_choice(&store, first, "Article 9")?;
//! session.submit()?;
//! let report = session.score(&store)?;
//! println!("{}/{}", report.correct_count, report.total_count);
//! # Ok(())
//! # }
//! ```

mod app;
pub mod config;
mod data;
mod error;
mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use config::QuizConfig;
pub use data::{QuestionSource, QuestionStore, load_questions_from_csv, read_questions};
pub use error::{LoadError, QuizError, SessionError};
pub use models::{AppState, OptionLabel, QuestionRecord, QuizOption, Reference};
pub use session::{QuizSession, ScoreReport, SessionRegistry, Verdict, start_quiz};

/// Picker step for PageUp/PageDown on the welcome screen.
const COUNT_PAGE: usize = 10;

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz over an already loaded question bank.
    pub fn new(store: QuestionStore, config: &QuizConfig) -> Self {
        Self {
            app: App::new(store, config),
        }
    }

    /// Load a quiz from a CSV file with default options.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_bank::Quiz;
    ///
    /// let quiz = Quiz::from_csv("questions.csv").expect("Failed to load quiz");
    /// ```
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let store = QuestionSource::new(path.as_ref()).load()?;
        Ok(Self::new(store, &QuizConfig::default()))
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => app.increase_count(1),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => app.decrease_count(1),
        KeyCode::PageUp => app.increase_count(COUNT_PAGE),
        KeyCode::PageDown => app.decrease_count(COUNT_PAGE),
        KeyCode::Enter => app.start_quiz(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => app.next_question(),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_option(),
        KeyCode::Backspace | KeyCode::Delete => app.clear_answer(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.submit(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.start_quiz(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.start_quiz(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}
