//! Per-turn input and output value objects

use crate::core::difficulty::{Difficulty, InterviewMode};
use crate::core::error::DomainError;
use crate::persona::panel::Panel;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Speech emitted when the model returned nothing usable.
pub const FALLBACK_SPEECH: &str = "다음 질문으로 넘어가겠습니다.";

/// Facial expression hint for the speaking interviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    #[default]
    Neutral,
    Smile,
    Suspicious,
    Pressure,
    Nod,
    Frown,
    Bored,
    Note,
}

impl Expression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expression::Neutral => "neutral",
            Expression::Smile => "smile",
            Expression::Suspicious => "suspicious",
            Expression::Pressure => "pressure",
            Expression::Nod => "nod",
            Expression::Frown => "frown",
            Expression::Bored => "bored",
            Expression::Note => "note",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Expression {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "neutral" => Ok(Expression::Neutral),
            "smile" => Ok(Expression::Smile),
            "suspicious" => Ok(Expression::Suspicious),
            "pressure" => Ok(Expression::Pressure),
            "nod" => Ok(Expression::Nod),
            "frown" => Ok(Expression::Frown),
            "bored" => Ok(Expression::Bored),
            "note" => Ok(Expression::Note),
            _ => Err(DomainError::InvalidValue {
                field: "expression",
                value: s.to_string(),
            }),
        }
    }
}

/// Unknown or non-string values decode to the default instead of failing.
impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default())
    }
}

/// Turn-flow hint returned alongside the speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    None,
    /// Cut the candidate off
    Interrupt,
    /// Dig into the previous answer before moving on
    Followup,
    /// Close the interview
    Conclude,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::None => "none",
            Action::Interrupt => "interrupt",
            Action::Followup => "followup",
            Action::Conclude => "conclude",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Action::None),
            "interrupt" => Ok(Action::Interrupt),
            "followup" | "follow_up" | "follow-up" => Ok(Action::Followup),
            "conclude" => Ok(Action::Conclude),
            _ => Err(DomainError::InvalidValue {
                field: "action",
                value: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default())
    }
}

/// Everything the orchestrator needs to produce one interviewer turn.
///
/// `Default` is a valid input: no answer, empty panel, unnamed speaker,
/// medium difficulty, mixed mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnInput {
    pub user_answer: Option<String>,
    pub panel: Panel,
    pub speaker: String,
    pub difficulty: Difficulty,
    pub mode: InterviewMode,
}

impl TurnInput {
    pub fn new(
        panel: Panel,
        speaker: impl Into<String>,
        difficulty: Difficulty,
        mode: InterviewMode,
    ) -> Self {
        Self {
            user_answer: None,
            panel,
            speaker: speaker.into(),
            difficulty,
            mode,
        }
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.user_answer = Some(answer.into());
        self
    }

    /// The answer to record, treating an empty string as absent.
    pub fn answer(&self) -> Option<&str> {
        self.user_answer.as_deref().filter(|a| !a.is_empty())
    }
}

/// One parsed interviewer utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutput {
    pub speech: String,
    #[serde(default)]
    pub expression: Expression,
    #[serde(default)]
    pub action: Action,
}

impl TurnOutput {
    pub fn new(speech: impl Into<String>, expression: Expression, action: Action) -> Self {
        Self {
            speech: speech.into(),
            expression,
            action,
        }
    }

    /// Output used when the raw model text could not be decoded.
    pub fn fallback(raw: &str) -> Self {
        let speech = if raw.is_empty() { FALLBACK_SPEECH } else { raw };
        Self::new(speech, Expression::Neutral, Action::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_uses_raw_text() {
        let out = TurnOutput::fallback("그냥 문장입니다");
        assert_eq!(out.speech, "그냥 문장입니다");
        assert_eq!(out.expression, Expression::Neutral);
        assert_eq!(out.action, Action::None);
    }

    #[test]
    fn test_fallback_on_empty_raw() {
        assert_eq!(TurnOutput::fallback("").speech, FALLBACK_SPEECH);
    }

    #[test]
    fn test_unknown_expression_and_action_decode_to_defaults() {
        let out: TurnOutput =
            serde_json::from_str(r#"{"speech":"네","expression":"angry","action":"leave"}"#)
                .unwrap();
        assert_eq!(out.expression, Expression::Neutral);
        assert_eq!(out.action, Action::None);
    }

    #[test]
    fn test_missing_hints_default() {
        let out: TurnOutput = serde_json::from_str(r#"{"speech":"네"}"#).unwrap();
        assert_eq!(out, TurnOutput::new("네", Expression::Neutral, Action::None));
    }

    #[test]
    fn test_non_string_hint_defaults() {
        let out: TurnOutput =
            serde_json::from_str(r#"{"speech":"네","expression":3,"action":null}"#).unwrap();
        assert_eq!(out.expression, Expression::Neutral);
        assert_eq!(out.action, Action::None);
    }

    #[test]
    fn test_missing_speech_is_an_error() {
        assert!(serde_json::from_str::<TurnOutput>(r#"{"expression":"nod"}"#).is_err());
    }

    #[test]
    fn test_known_hints_parse() {
        assert_eq!("FROWN".parse::<Expression>().unwrap(), Expression::Frown);
        assert_eq!("followup".parse::<Action>().unwrap(), Action::Followup);
        assert!("shrug".parse::<Expression>().is_err());
    }

    #[test]
    fn test_answer_treats_empty_as_absent() {
        let input = TurnInput::default().with_answer("");
        assert_eq!(input.answer(), None);
        let input = TurnInput::default().with_answer("저는");
        assert_eq!(input.answer(), Some("저는"));
    }
}
