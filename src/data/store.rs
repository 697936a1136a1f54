use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::LoadError;
use crate::models::QuestionRecord;

use super::loader::load_questions_from_csv;

/// Suggested quiz length when the user has not picked one.
const DEFAULT_QUIZ_LENGTH: usize = 10;

/// Immutable, cheaply clonable question bank.
///
/// A record's `id` always equals its index in the store.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Arc<[QuestionRecord]>,
}

impl QuestionStore {
    /// Build a store from records, renumbering ids to positions. Every
    /// record must pass [`QuestionRecord::validate`].
    pub fn new(mut questions: Vec<QuestionRecord>) -> Result<Self, LoadError> {
        for (index, question) in questions.iter_mut().enumerate() {
            question
                .validate()
                .map_err(|reason| LoadError::InvalidRecord { index, reason })?;
            question.id = index;
        }
        Ok(Self {
            questions: questions.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&QuestionRecord> {
        self.questions.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.questions.iter()
    }

    pub fn default_count(&self) -> usize {
        DEFAULT_QUIZ_LENGTH.min(self.len())
    }

    /// True when both handles share the same backing records.
    pub fn same_bank(&self, other: &QuestionStore) -> bool {
        Arc::ptr_eq(&self.questions, &other.questions)
    }
}

/// A question file that is parsed at most once.
///
/// A failed load is not cached, so the next call reads the file again.
#[derive(Debug)]
pub struct QuestionSource {
    path: PathBuf,
    store: OnceCell<QuestionStore>,
}

impl QuestionSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            store: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.store.get().is_some()
    }

    pub fn load(&self) -> Result<QuestionStore, LoadError> {
        self.store
            .get_or_try_init(|| load_questions_from_csv(&self.path).and_then(QuestionStore::new))
            .cloned()
    }
}
