//! Transcript entity
//!
//! A transcript is the chronological record of one tutoring dialogue.
//! Analysis borrows it immutably; nothing in the engine reorders or edits
//! turns.

use serde::{Deserialize, Serialize};

/// Who authored a turn
///
/// Chat logs use the completion API's vocabulary (`user`/`assistant`);
/// both spellings deserialize to the same role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The student
    #[serde(alias = "user", alias = "student")]
    Learner,
    /// The language-model tutor
    #[serde(alias = "assistant", alias = "ai")]
    Tutor,
}

/// One message in a transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    /// Author of the message
    pub role: Role,
    /// Message text
    pub content: String,
}

impl Turn {
    /// Create a learner turn
    pub fn learner(content: impl Into<String>) -> Self {
        Self {
            role: Role::Learner,
            content: content.into(),
        }
    }

    /// Create a tutor turn
    pub fn tutor(content: impl Into<String>) -> Self {
        Self {
            role: Role::Tutor,
            content: content.into(),
        }
    }

    /// Whether the turn was written by the learner
    pub fn is_learner(&self) -> bool {
        self.role == Role::Learner
    }

    /// Whether the turn was written by the tutor
    pub fn is_tutor(&self) -> bool {
        self.role == Role::Tutor
    }

    /// Whether the turn carries any visible text
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// One stored chat-log record: a learner message and the tutor's reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Exchange {
    /// What the learner wrote
    #[serde(default)]
    pub user_message: String,
    /// What the tutor answered
    #[serde(default)]
    pub ai_response: String,
}

/// Raw analysis input: either a single free text or a message sequence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TranscriptInput {
    /// A single learner-authored text (e.g. a written summary)
    Text(String),
    /// A role-tagged message sequence
    Messages(Vec<Turn>),
}

impl From<TranscriptInput> for Transcript {
    fn from(input: TranscriptInput) -> Self {
        match input {
            TranscriptInput::Text(text) => Transcript::new(vec![Turn::learner(text)]),
            TranscriptInput::Messages(turns) => Transcript::new(turns),
        }
    }
}

/// Ordered learner/tutor dialogue analyzed as a unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create a transcript from turns in chronological order
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    /// Build a transcript from chat-log exchanges
    ///
    /// Each exchange contributes a learner turn followed by a tutor turn.
    /// Empty sides are skipped so a pending exchange (no reply yet) does not
    /// produce a blank tutor turn.
    pub fn from_exchanges(exchanges: &[Exchange]) -> Self {
        let mut turns = Vec::with_capacity(exchanges.len() * 2);
        for exchange in exchanges {
            if !exchange.user_message.trim().is_empty() {
                turns.push(Turn::learner(exchange.user_message.clone()));
            }
            if !exchange.ai_response.trim().is_empty() {
                turns.push(Turn::tutor(exchange.ai_response.clone()));
            }
        }
        Self { turns }
    }

    /// All turns in order
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the transcript has no turns
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Learner message texts in order
    pub fn learner_messages(&self) -> Vec<&str> {
        self.messages_by(Role::Learner)
    }

    /// Tutor message texts in order
    pub fn tutor_messages(&self) -> Vec<&str> {
        self.messages_by(Role::Tutor)
    }

    /// Whether any learner turn has visible text
    pub fn has_learner_content(&self) -> bool {
        self.turns.iter().any(|t| t.is_learner() && !t.is_blank())
    }

    fn messages_by(&self, role: Role) -> Vec<&str> {
        self.turns
            .iter()
            .filter(|t| t.role == role)
            .map(|t| t.content.as_str())
            .collect()
    }
}

impl FromIterator<Turn> for Transcript {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
