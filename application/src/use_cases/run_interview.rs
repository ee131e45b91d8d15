//! Interview session use case
//!
//! Drives one interview: builds each turn's prompt from the panel and the
//! speaking persona, keeps the conversation history, and asks the backend
//! for the session-end feedback report.

use crate::config::InterviewParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use interview_domain::core::string::truncate;
use interview_domain::{
    ConversationHistory, FeedbackReport, InterviewContext, InterviewPrompt, Message,
    SessionReport, TurnInput, TurnOutput, parse_feedback, parse_turn,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running an interview
#[derive(Error, Debug)]
pub enum InterviewError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl InterviewError {
    /// HTTP status of the failed backend call, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            InterviewError::Gateway(e) => e.status(),
        }
    }
}

/// Session orchestrator for a single interview.
///
/// Owns the conversation history exclusively; one instance per session.
/// Turn generation takes `&mut self`, so two turns can never overlap.
pub struct InterviewOrchestrator {
    gateway: Arc<dyn LlmGateway>,
    context: Arc<InterviewContext>,
    params: InterviewParams,
    history: ConversationHistory,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl InterviewOrchestrator {
    pub fn new(gateway: Arc<dyn LlmGateway>, context: Arc<InterviewContext>) -> Self {
        Self {
            gateway,
            context,
            params: InterviewParams::default(),
            history: ConversationHistory::new(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_params(mut self, params: InterviewParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn context(&self) -> &InterviewContext {
        &self.context
    }

    pub fn params(&self) -> InterviewParams {
        self.params
    }

    /// Produce the next interviewer utterance.
    ///
    /// A non-empty answer is appended to the history before the backend is
    /// called and stays there even if the call fails. On success the
    /// interviewer's speech (or the raw reply when the speech is empty) is
    /// appended as well.
    pub async fn generate_response(
        &mut self,
        input: &TurnInput,
    ) -> Result<TurnOutput, InterviewError> {
        if let Some(answer) = input.answer() {
            self.history.add_user_message(answer);
        }

        let system_prompt = InterviewPrompt::interviewer_system(
            self.context.personas(),
            &input.panel,
            &input.speaker,
            input.difficulty,
            input.mode,
        );

        let bootstrap;
        let messages: &[Message] = if self.history.is_empty() {
            bootstrap = [Message::user(InterviewPrompt::bootstrap())];
            &bootstrap
        } else {
            self.history.messages()
        };

        debug!(
            "Interview turn: speaker={}, history={}, prompt_chars={}",
            input.speaker,
            self.history.len(),
            system_prompt.chars().count()
        );

        let raw = self
            .gateway
            .generate(&system_prompt, messages, self.params.turn_max_tokens)
            .await?;

        let output = parse_turn(&raw);
        let recorded = if output.speech.is_empty() {
            raw.as_str()
        } else {
            output.speech.as_str()
        };
        self.history.add_assistant_message(recorded);

        debug!(
            "Turn parsed: expression={}, action={}, speech={}",
            output.expression,
            output.action,
            truncate(&output.speech, 60)
        );

        self.conversation_logger.log(ConversationEvent::turn(json!({
            "speaker": input.speaker,
            "difficulty": input.difficulty.as_str(),
            "mode": input.mode.as_str(),
            "answer": input.answer(),
            "raw": raw,
            "speech": output.speech,
            "expression": output.expression.as_str(),
            "action": output.action.as_str(),
            "history_len": self.history.len(),
        })));

        Ok(output)
    }

    /// Ask the backend to evaluate the whole session.
    ///
    /// Independent of the conversation history, which is left untouched.
    pub async fn generate_feedback(
        &self,
        report: &SessionReport,
    ) -> Result<FeedbackReport, InterviewError> {
        info!(
            "Generating feedback for {} answers ({})",
            report.answers.len(),
            report.difficulty
        );

        let prompt = InterviewPrompt::feedback_request(report);
        let raw = self
            .gateway
            .generate(
                InterviewPrompt::feedback_system(),
                &[Message::user(prompt)],
                self.params.feedback_max_tokens,
            )
            .await?;

        let feedback = parse_feedback(&raw);

        self.conversation_logger.log(ConversationEvent::feedback(json!({
            "difficulty": report.difficulty.as_str(),
            "answers": report.answers.len(),
            "raw": raw,
            "report": feedback,
        })));

        Ok(feedback)
    }

    /// Clear the conversation history. Idempotent.
    pub fn reset(&mut self) {
        debug!("Resetting interview history ({} messages)", self.history.len());
        self.history.clear();
    }
}
