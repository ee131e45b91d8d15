//! Domain layer for pressure-interview
//!
//! This crate contains the interview's business rules, entities, and value
//! objects. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Panel
//!
//! A session is run by a panel of interviewer personas drawn from the
//! [`PersonaRegistry`]. One panel is chosen per session from the tier's
//! alternatives in the [`PanelCatalog`], and each turn is spoken by one
//! member.
//!
//! ## Turn
//!
//! Every interviewer utterance is a [`TurnOutput`] decoded tolerantly from
//! model text by [`parse_turn`]; undecodable text still yields a usable turn.
//!
//! ## Feedback
//!
//! At the end, the recorded [`SessionReport`] is turned into a
//! [`FeedbackReport`] by the same tolerant decoding.

pub mod analysis;
pub mod context;
pub mod core;
pub mod parsing;
pub mod persona;
pub mod prompt;
pub mod providers;
pub mod question;
pub mod session;

// Re-export commonly used types
pub use analysis::{AnswerStructure, analyze_answer_structure, count_filler_words};
pub use context::{
    InterviewContext,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::{
    difficulty::{Difficulty, InterviewMode},
    error::DomainError,
};
pub use parsing::{extract_json_object, parse_feedback, parse_structured, parse_turn};
pub use persona::{
    entities::{Persona, VoiceTone},
    panel::{Panel, PanelCatalog},
    registry::PersonaRegistry,
};
pub use prompt::InterviewPrompt;
pub use providers::{AnthropicProviderConfig, OllamaProviderConfig, ProviderConfig, ProviderKind};
pub use question::{
    bank::{DEFAULT_MAX_QUESTIONS, QuestionBank},
    entities::{Question, QuestionCategory},
};
pub use session::{
    entities::{ConversationHistory, Message, Role},
    feedback::{AnswerRecord, FeedbackReport, SessionReport},
    turn::{Action, Expression, TurnInput, TurnOutput},
};
