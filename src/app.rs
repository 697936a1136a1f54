use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::QuizConfig;
use crate::data::QuestionStore;
use crate::error::SessionError;
use crate::models::{AppState, QuestionRecord};
use crate::session::{self, QuizSession, ScoreReport};

/// Terminal front end state: the count picker, at most one quiz session,
/// and the cursor over it.
pub struct App {
    pub state: AppState,
    store: QuestionStore,
    rng: StdRng,
    requested_count: usize,
    session: Option<QuizSession>,
    report: Option<ScoreReport>,
    current_position: usize,
    selected_option: usize,
    result_scroll: usize,
    notice: Option<String>,
}

impl App {
    pub fn new(store: QuestionStore, config: &QuizConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let requested_count = config.initial_count(store.default_count(), store.len());

        Self {
            state: AppState::Welcome,
            store,
            rng,
            requested_count,
            session: None,
            report: None,
            current_position: 0,
            selected_option: 0,
            result_scroll: 0,
            notice: None,
        }
    }

    pub fn with_store(store: QuestionStore) -> Self {
        Self::new(store, &QuizConfig::default())
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    pub fn increase_count(&mut self, step: usize) {
        self.requested_count = self
            .requested_count
            .saturating_add(step)
            .min(self.store.len());
    }

    pub fn decrease_count(&mut self, step: usize) {
        self.requested_count = self.requested_count.saturating_sub(step).max(1);
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        let id = *self.session.as_ref()?.selected_ids().get(self.current_position)?;
        self.store.get(id)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_position + 1
    }

    pub fn total_questions(&self) -> usize {
        self.session.as_ref().map_or(0, QuizSession::len)
    }

    pub fn answered_count(&self) -> usize {
        self.session.as_ref().map_or(0, QuizSession::answered_count)
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    /// Answer recorded for the question on screen.
    pub fn current_answer(&self) -> Option<&str> {
        let question = self.current_question()?;
        self.session.as_ref()?.answer(question.id)
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn next_question(&mut self) {
        if self.current_position + 1 < self.total_questions() {
            self.go_to(self.current_position + 1);
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_position > 0 {
            self.go_to(self.current_position - 1);
        }
    }

    /// Move to a question and put the cursor on its recorded answer, if any.
    fn go_to(&mut self, position: usize) {
        self.current_position = position;
        self.selected_option = self
            .current_question()
            .zip(self.current_answer())
            .and_then(|(question, answer)| {
                question.options.iter().position(|option| option.value == answer)
            })
            .unwrap_or(0);
    }

    fn reject(&mut self, err: SessionError) {
        debug!(error = %err, "rejected quiz action");
        self.notice = Some(err.to_string());
    }

    /// Sample a new quiz of the requested size, replacing any current one.
    pub fn start_quiz(&mut self) {
        match session::start_quiz(&self.store, self.requested_count, &mut self.rng) {
            Ok(new_session) => {
                if let Some(old) = self.session.replace(new_session) {
                    old.reset();
                }
                self.report = None;
                self.notice = None;
                self.result_scroll = 0;
                self.state = AppState::Quiz;
                self.go_to(0);
                info!(count = self.requested_count, "new quiz");
            }
            Err(err) => self.reject(err),
        }
    }

    /// Record the highlighted option and move on to the next question.
    pub fn choose_option(&mut self) {
        let Some((id, value)) = self.current_question().and_then(|question| {
            question
                .options
                .get(self.selected_option)
                .map(|option| (question.id, option.value.clone()))
        }) else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.record_choice(&self.store, id, value) {
            Ok(()) => {
                self.notice = None;
                self.next_question();
            }
            Err(err) => self.reject(err),
        }
    }

    pub fn clear_answer(&mut self) {
        let Some(id) = self.current_question().map(|q| q.id) else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.clear_answer(id) {
            Ok(()) => self.notice = None,
            Err(err) => self.reject(err),
        }
    }

    /// Freeze the answers, score them and show the results.
    pub fn submit(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let scored = session.submit().and_then(|()| session.score(&self.store));
        match scored {
            Ok(report) => {
                info!(
                    correct = report.correct_count,
                    total = report.total_count,
                    "quiz scored"
                );
                self.report = Some(report);
                self.notice = None;
                self.result_scroll = 0;
                self.state = AppState::Result;
            }
            Err(err) => self.reject(err),
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self
            .report
            .as_ref()
            .map_or(0, |r| r.verdicts.len().saturating_sub(1));
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Drop the session and go back to the count picker.
    pub fn restart(&mut self) {
        if let Some(session) = self.session.take() {
            session.reset();
        }
        self.report = None;
        self.notice = None;
        self.state = AppState::Welcome;
        self.current_position = 0;
        self.selected_option = 0;
        self.result_scroll = 0;
    }
}
