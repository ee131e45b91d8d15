//! Interview session domain.
//!
//! - [`entities::ConversationHistory`]: role-tagged messages of one session
//! - [`turn::TurnInput`] / [`turn::TurnOutput`]: one interviewer turn
//! - [`feedback::SessionReport`] / [`feedback::FeedbackReport`]: session-end evaluation

pub mod entities;
pub mod feedback;
pub mod turn;
