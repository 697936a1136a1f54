//! Per-user quiz sessions for hosts that serve more than one user.
//!
//! Every user context is keyed by an opaque id and owns its session
//! outright. The question store is the only thing shared between them.

use std::collections::HashMap;

use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use crate::data::QuestionStore;
use crate::error::SessionError;

use super::quiz::{QuizSession, start_quiz};

/// Opaque handle for a user's session.
pub type SessionId = Uuid;

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, QuizSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a quiz for a new user context.
    pub fn create<R: Rng + ?Sized>(
        &mut self,
        store: &QuestionStore,
        count: usize,
        rng: &mut R,
    ) -> Result<SessionId, SessionError> {
        let session = start_quiz(store, count, rng)?;
        let id = Uuid::new_v4();
        self.sessions.insert(id, session);
        debug!(%id, "created session");
        Ok(id)
    }

    /// Replace the quiz of a known user context with a freshly sampled one.
    /// The old session is kept if sampling fails.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        id: SessionId,
        store: &QuestionStore,
        count: usize,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        if !self.sessions.contains_key(&id) {
            return Err(SessionError::UnknownSession { id });
        }
        let session = start_quiz(store, count, rng)?;
        self.sessions.insert(id, session);
        debug!(%id, "restarted session");
        Ok(())
    }

    pub fn get(&self, id: SessionId) -> Result<&QuizSession, SessionError> {
        self.sessions
            .get(&id)
            .ok_or(SessionError::UnknownSession { id })
    }

    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut QuizSession, SessionError> {
        self.sessions
            .get_mut(&id)
            .ok_or(SessionError::UnknownSession { id })
    }

    /// Destroy a session. Returns whether one existed.
    pub fn reset(&mut self, id: SessionId) -> bool {
        match self.sessions.remove(&id) {
            Some(session) => {
                session.reset();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
