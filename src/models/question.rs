use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Fewest populated options a question may have.
const MIN_OPTIONS: usize = 2;

/// Letter identifying a choice within a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
    E,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for OptionLabel {
    type Err = String;

    /// Accepts a single letter, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            other => Err(format!("'{}' is not an option letter (A-E)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub label: OptionLabel,
    pub value: String,
}

/// Citation shown next to the answer key. Never used for scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub document: String,
    pub clause: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    pub id: usize,
    pub text: String,
    pub options: Vec<QuizOption>,
    pub correct_label: OptionLabel,
    pub reference: Reference,
}

impl QuestionRecord {
    pub fn option(&self, label: OptionLabel) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.label == label)
    }

    /// Value of the option named by the answer key.
    ///
    /// Only `None` for records that fail [`QuestionRecord::validate`].
    pub fn correct_value(&self) -> Option<&str> {
        self.option(self.correct_label)
            .map(|option| option.value.as_str())
    }

    /// Check the record invariants: non-empty text, at least two populated
    /// options with distinct labels, and an answer key that names one of
    /// them.
    pub fn validate(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("question text is empty".to_string());
        }
        if let Some(option) = self.options.iter().find(|o| o.value.trim().is_empty()) {
            return Err(format!("option {} is empty", option.label));
        }
        for (index, option) in self.options.iter().enumerate() {
            if self.options[..index].iter().any(|o| o.label == option.label) {
                return Err(format!("option {} appears twice", option.label));
            }
        }
        if self.options.len() < MIN_OPTIONS {
            return Err(format!(
                "needs at least {} options, found {}",
                MIN_OPTIONS,
                self.options.len()
            ));
        }
        if self.correct_value().is_none() {
            return Err(format!(
                "answer {} has no populated option",
                self.correct_label
            ));
        }
        Ok(())
    }

    pub fn label_of(&self, value: &str) -> Option<OptionLabel> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label)
    }
}
