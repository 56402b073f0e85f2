use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnknownField,
    UnknownRelationship,
    UnknownEventKind,
    InvalidCommand,
    Config,
}

/// Raised only where free text crosses into typed values (command scripts,
/// CLI arguments). Store and generator operations never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code:?}: {message}")]
pub struct WizardError {
    pub code: ErrorCode,
    pub message: String,
}

impl WizardError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn unknown_field(name: &str) -> Self {
        Self::new(ErrorCode::UnknownField, format!("unknown field '{name}'"))
    }

    pub fn unknown_relationship(value: &str) -> Self {
        Self::new(
            ErrorCode::UnknownRelationship,
            format!("unknown relationship '{value}'"),
        )
    }

    pub fn unknown_event_kind(value: &str) -> Self {
        Self::new(
            ErrorCode::UnknownEventKind,
            format!("unknown event type '{value}'"),
        )
    }
}
