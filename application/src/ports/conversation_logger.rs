//! Port for the interview transcript.
//!
//! Orchestrator turns and the feedback request are reported here as
//! [`ConversationEvent`]s. Diagnostics go through `tracing`; this port only
//! carries the machine-readable record of what was said.

use serde_json::Value;

/// One transcript entry: an event kind plus its JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEvent {
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    /// An interviewer turn was produced.
    pub const TURN: &'static str = "interview_turn";
    /// The session-end evaluation was produced.
    pub const FEEDBACK: &'static str = "feedback";

    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn turn(payload: Value) -> Self {
        Self::new(Self::TURN, payload)
    }

    pub fn feedback(payload: Value) -> Self {
        Self::new(Self::FEEDBACK, payload)
    }
}

/// Sink for transcript events.
///
/// Infallible and synchronous: a broken transcript never interrupts a session.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_constructors() {
        let turn = ConversationEvent::turn(json!({"speaker": "hr"}));
        assert_eq!(turn.event_type, "interview_turn");
        assert_eq!(turn.payload["speaker"], "hr");
        assert_eq!(ConversationEvent::feedback(json!(null)).event_type, "feedback");
    }
}
