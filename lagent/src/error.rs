//! Agent-layer errors and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentErrorKind {
    Configuration,
    Registration,
    Suggestion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentError {
    pub kind: AgentErrorKind,
    pub message: String,
}

impl AgentError {
    pub fn new(kind: AgentErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::Configuration, message)
    }

    pub fn registration(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::Registration, message)
    }

    pub fn suggestion(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::Suggestion, message)
    }
}

impl Display for AgentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for AgentError {}
