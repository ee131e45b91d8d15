//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Panel has no members")]
    EmptyPanel,

    #[error("No panels configured for difficulty {0}")]
    NoPanels(String),

    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

impl DomainError {
    /// Check if this error refers to a persona missing from the registry
    pub fn is_unknown_persona(&self) -> bool {
        matches!(self, DomainError::UnknownPersona(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_persona_display() {
        let error = DomainError::UnknownPersona("ghost".to_string());
        assert_eq!(error.to_string(), "Unknown persona: ghost");
    }

    #[test]
    fn test_invalid_value_display() {
        let error = DomainError::InvalidValue {
            field: "difficulty",
            value: "extreme".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid difficulty: extreme");
    }

    #[test]
    fn test_is_unknown_persona_check() {
        assert!(DomainError::UnknownPersona("x".to_string()).is_unknown_persona());
        assert!(!DomainError::EmptyPanel.is_unknown_persona());
    }
}
