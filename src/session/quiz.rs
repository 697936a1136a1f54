use std::collections::HashMap;

use rand::Rng;
use rand::seq::index;
use tracing::debug;

use crate::data::QuestionStore;
use crate::error::SessionError;

use super::score::{ScoreReport, Verdict};

/// Where a session is in its lifecycle. "No session" is represented by the
/// absence of a `QuizSession`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Answers can still be recorded.
    Active,
    /// Answers are frozen and the session can be scored.
    Submitted,
}

/// One user's sampled quiz and their answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    selected_ids: Vec<usize>,
    answers: HashMap<usize, String>,
    submitted: bool,
}

/// Sample `count` distinct questions from the store, uniformly and without
/// replacement. The ids keep the order they were drawn in.
pub fn start_quiz<R: Rng + ?Sized>(
    store: &QuestionStore,
    count: usize,
    rng: &mut R,
) -> Result<QuizSession, SessionError> {
    let available = store.len();
    if count == 0 || count > available {
        return Err(SessionError::InvalidCount {
            requested: count,
            available,
        });
    }

    let selected_ids = index::sample(rng, available, count).into_vec();
    debug!(count, available, "started quiz");

    Ok(QuizSession {
        selected_ids,
        answers: HashMap::new(),
        submitted: false,
    })
}

impl QuizSession {
    pub fn selected_ids(&self) -> &[usize] {
        &self.selected_ids
    }

    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.submitted {
            SessionPhase::Submitted
        } else {
            SessionPhase::Active
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn contains(&self, question_id: usize) -> bool {
        self.selected_ids.contains(&question_id)
    }

    /// Position of a question within this quiz.
    pub fn position_of(&self, question_id: usize) -> Option<usize> {
        self.selected_ids.iter().position(|&id| id == question_id)
    }

    pub fn answer(&self, question_id: usize) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    pub fn answers(&self) -> &HashMap<usize, String> {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    fn check_writable(&self, question_id: usize) -> Result<(), SessionError> {
        if self.submitted {
            return Err(SessionError::SessionClosed);
        }
        if !self.contains(question_id) {
            return Err(SessionError::UnknownQuestion { id: question_id });
        }
        Ok(())
    }

    /// Record (or overwrite) the value picked for a question.
    ///
    /// The value is stored as given. Callers must pass one of the question's
    /// option values; [`QuizSession::record_choice`] checks that against the
    /// store first.
    pub fn record_answer(
        &mut self,
        question_id: usize,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.check_writable(question_id)?;
        self.answers.insert(question_id, value.into());
        Ok(())
    }

    /// Like [`QuizSession::record_answer`], but rejects values that are not
    /// an option of the question.
    pub fn record_choice(
        &mut self,
        store: &QuestionStore,
        question_id: usize,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.check_writable(question_id)?;
        let value = value.into();
        let question = store
            .get(question_id)
            .ok_or(SessionError::UnknownQuestion { id: question_id })?;
        if question.label_of(&value).is_none() {
            return Err(SessionError::InvalidAnswer {
                id: question_id,
                value,
            });
        }
        self.answers.insert(question_id, value);
        Ok(())
    }

    /// Forget the answer for a question so it counts as unanswered.
    pub fn clear_answer(&mut self, question_id: usize) -> Result<(), SessionError> {
        self.check_writable(question_id)?;
        self.answers.remove(&question_id);
        Ok(())
    }

    /// Freeze the answers. There is no way back to `Active`.
    pub fn submit(&mut self) -> Result<(), SessionError> {
        if self.submitted {
            return Err(SessionError::SessionClosed);
        }
        self.submitted = true;
        debug!(
            answered = self.answers.len(),
            total = self.selected_ids.len(),
            "submitted quiz"
        );
        Ok(())
    }

    /// Compare the frozen answers with the answer key. Unanswered questions
    /// are wrong.
    pub fn score(&self, store: &QuestionStore) -> Result<ScoreReport, SessionError> {
        if !self.submitted {
            return Err(SessionError::NotSubmitted);
        }

        let verdicts = self
            .selected_ids
            .iter()
            .map(|&id| {
                let question = store
                    .get(id)
                    .ok_or(SessionError::UnknownQuestion { id })?;
                let correct_value = question
                    .correct_value()
                    .ok_or(SessionError::BrokenAnswerKey { id })?
                    .to_string();
                let user_value = self.answers.get(&id).cloned();
                Ok(Verdict {
                    question_id: id,
                    is_correct: user_value.as_deref() == Some(correct_value.as_str()),
                    user_value,
                    correct_value,
                })
            })
            .collect::<Result<Vec<_>, SessionError>>()?;

        Ok(ScoreReport::new(verdicts))
    }

    /// Discard the session.
    pub fn reset(self) {
        debug!(total = self.selected_ids.len(), "reset quiz");
    }
}
