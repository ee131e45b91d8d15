//! Interactive interview session driven from the terminal

use crate::config::SessionSettings;
use crate::interview::command::ReplCommand;
use crate::interview::plan::SessionPlan;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ThinkingSpinner;
use colored::Colorize;
use interview_application::InterviewOrchestrator;
use interview_domain::{
    Action, AnswerRecord, DomainError, FeedbackReport, SessionReport, TurnInput, TurnOutput,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ReplError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// One event from the answer prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Interrupted,
    Eof,
}

/// Where answers come from.
pub trait LineSource {
    fn read_line(&mut self) -> io::Result<InputEvent>;
}

/// Line editor backed answer prompt
pub struct ReedlineSource {
    editor: Reedline,
    prompt: DefaultPrompt,
}

impl ReedlineSource {
    pub fn new() -> Self {
        Self {
            editor: Reedline::create(),
            prompt: DefaultPrompt::new(
                DefaultPromptSegment::Basic("답변".to_string()),
                DefaultPromptSegment::Empty,
            ),
        }
    }
}

impl Default for ReedlineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for ReedlineSource {
    fn read_line(&mut self) -> io::Result<InputEvent> {
        Ok(match self.editor.read_line(&self.prompt)? {
            Signal::Success(line) => InputEvent::Line(line),
            Signal::CtrlC => InputEvent::Interrupted,
            Signal::CtrlD => InputEvent::Eof,
        })
    }
}

/// How a session ended and what it produced.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub report: SessionReport,
    pub feedback: Option<FeedbackReport>,
    /// Interviewer turns that completed successfully
    pub turns: usize,
    /// The panel closed the interview with `conclude`
    pub concluded: bool,
    /// The user left with `/quit`
    pub quit: bool,
}

enum AnswerOutcome {
    Answered { text: String, secs: f64 },
    Skipped,
    End,
    Quit,
}

/// User message recorded for an answer, carrying the question it responds to.
pub fn answer_message(question: &str, answer: &str) -> String {
    format!("[질문] {}\n[답변] {}", question, answer)
}

/// Interactive interview REPL
pub struct InterviewRepl<S: LineSource = ReedlineSource> {
    orchestrator: InterviewOrchestrator,
    settings: SessionSettings,
    source: S,
    spinner: ThinkingSpinner,
    rng: StdRng,
}

impl InterviewRepl<ReedlineSource> {
    pub fn new(orchestrator: InterviewOrchestrator, settings: SessionSettings) -> Self {
        Self::with_source(orchestrator, settings, ReedlineSource::new())
    }
}

impl<S: LineSource> InterviewRepl<S> {
    pub fn with_source(
        orchestrator: InterviewOrchestrator,
        settings: SessionSettings,
        source: S,
    ) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let spinner = ThinkingSpinner::new(settings.show_progress);
        Self {
            orchestrator,
            settings,
            source,
            spinner,
            rng,
        }
    }

    /// Run one full session: opening turn, questions with follow-ups, feedback.
    pub async fn run(&mut self) -> Result<SessionOutcome, ReplError> {
        let difficulty = self.settings.difficulty;
        let mode = self.settings.mode;
        let plan = SessionPlan::draw(
            self.orchestrator.context(),
            difficulty,
            self.settings.max_questions,
            &mut self.rng,
        )?;
        info!(
            "Session plan: panel={:?}, questions={}",
            plan.panel.members(),
            plan.questions.len()
        );

        self.print_header(&plan);

        let mut report = SessionReport::new(difficulty);
        let mut turns = 0;
        let mut concluded = false;

        let opening = TurnInput::new(plan.panel.clone(), plan.opening_speaker(), difficulty, mode);
        if self.take_turn(&opening).await.is_some() {
            turns += 1;
        }

        let total = plan.questions.len();
        'questions: for (index, question) in plan.questions.iter().enumerate() {
            let speaker = plan.speaker_for(question, index).to_string();
            println!("{}", ConsoleFormatter::question(index + 1, total, &question.text));

            let mut asked = question.text.clone();
            let mut followed_up = false;

            loop {
                let (text, secs) = match self.read_answer()? {
                    AnswerOutcome::Answered { text, secs } => (text, secs),
                    AnswerOutcome::Skipped => {
                        debug!("Question {} skipped", question.id);
                        report.push(AnswerRecord::from_transcript(asked, "", 0.0));
                        break;
                    }
                    AnswerOutcome::End => break 'questions,
                    AnswerOutcome::Quit => {
                        return Ok(SessionOutcome {
                            report,
                            feedback: None,
                            turns,
                            concluded,
                            quit: true,
                        });
                    }
                };

                let record = AnswerRecord::from_transcript(asked.clone(), &text, secs);
                println!(
                    "{}",
                    ConsoleFormatter::answer_timing(
                        secs,
                        self.settings.time_limit_secs,
                        record.filler_count
                    )
                );
                report.push(record);

                let input = TurnInput::new(plan.panel.clone(), speaker.clone(), difficulty, mode)
                    .with_answer(answer_message(&asked, &text));
                let Some(output) = self.take_turn(&input).await else {
                    break;
                };
                turns += 1;

                if output.action == Action::Conclude {
                    concluded = true;
                    break 'questions;
                }
                if followed_up {
                    break;
                }
                if output.action == Action::Followup {
                    followed_up = true;
                    asked = output.speech;
                    continue;
                }
                if self.rng.gen_bool(difficulty.follow_up_chance())
                    && let Some(follow_up) = question.follow_up(&mut self.rng)
                {
                    followed_up = true;
                    asked = follow_up.to_string();
                    println!("{}", self.follow_up_line(&speaker, &asked));
                    continue;
                }
                break;
            }
        }

        let feedback = if report.answers.is_empty() {
            println!("\n{}", "기록된 답변이 없어 피드백을 생략합니다.".dimmed());
            None
        } else {
            self.spinner.start("피드백을 작성하는 중...");
            let result = self.orchestrator.generate_feedback(&report).await;
            self.spinner.finish();
            match result {
                Ok(feedback) => {
                    println!("{}", ConsoleFormatter::feedback(&feedback, &report));
                    Some(feedback)
                }
                Err(e) => {
                    warn!("Feedback generation failed: {}", e);
                    eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
                    None
                }
            }
        };

        Ok(SessionOutcome {
            report,
            feedback,
            turns,
            concluded,
            quit: false,
        })
    }

    fn print_header(&self, plan: &SessionPlan) {
        let registry = self.orchestrator.context().personas();
        let seated: Vec<_> = plan
            .panel
            .members()
            .iter()
            .filter_map(|id| registry.lookup(id))
            .collect();
        let limit = match self.settings.time_limit_secs {
            Some(secs) => format!("답변 제한 {}", crate::output::console::format_clock(u64::from(secs))),
            None => "시간 제한 없음".to_string(),
        };
        let settings_line = format!(
            "{} / {} / {}",
            self.settings.difficulty.label(),
            self.settings.mode.label(),
            limit
        );
        println!(
            "{}",
            ConsoleFormatter::session_header(&seated, &settings_line, plan.questions.len())
        );
    }

    fn follow_up_line(&self, speaker: &str, text: &str) -> String {
        let persona = self.orchestrator.context().personas().lookup(speaker);
        let output = TurnOutput::new(text, Default::default(), Action::Followup);
        ConsoleFormatter::turn(persona, &output)
    }

    async fn take_turn(&mut self, input: &TurnInput) -> Option<TurnOutput> {
        self.spinner.start("면접관이 생각하는 중...");
        let result = self.orchestrator.generate_response(input).await;
        self.spinner.finish();

        match result {
            Ok(output) => {
                let persona = self.orchestrator.context().personas().lookup(&input.speaker);
                println!("{}", ConsoleFormatter::turn(persona, &output));
                Some(output)
            }
            Err(e) => {
                warn!("Interview turn failed: {}", e);
                eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
                None
            }
        }
    }

    fn read_answer(&mut self) -> Result<AnswerOutcome, ReplError> {
        let started = Instant::now();
        loop {
            match self.source.read_line()? {
                InputEvent::Line(line) => match ReplCommand::parse(&line) {
                    None => continue,
                    Some(ReplCommand::Answer(text)) => {
                        return Ok(AnswerOutcome::Answered {
                            text,
                            secs: started.elapsed().as_secs_f64(),
                        });
                    }
                    Some(ReplCommand::Skip) => return Ok(AnswerOutcome::Skipped),
                    Some(ReplCommand::End) => return Ok(AnswerOutcome::End),
                    Some(ReplCommand::Quit) => return Ok(AnswerOutcome::Quit),
                    Some(ReplCommand::Help) => println!("{}", ReplCommand::help_text()),
                    Some(ReplCommand::Unknown(name)) => println!(
                        "{} {} {}",
                        "알 수 없는 명령어:".yellow(),
                        name,
                        "(/help 참고)".dimmed()
                    ),
                },
                InputEvent::Interrupted => {
                    println!("{}", "/quit 으로 종료할 수 있습니다.".dimmed());
                }
                InputEvent::Eof => return Ok(AnswerOutcome::End),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use interview_application::{GatewayError, LlmGateway};
    use interview_domain::{
        Difficulty, InterviewContext, Message, Panel, PanelCatalog, PersonaRegistry, Question,
        QuestionBank, QuestionCategory,
    };
    use std::collections::{HashMap, VecDeque};
    use std::sync::{Arc, Mutex};

    struct ScriptedSource(VecDeque<InputEvent>);

    impl ScriptedSource {
        fn lines(lines: &[&str]) -> Self {
            Self(lines.iter().map(|l| InputEvent::Line(l.to_string())).collect())
        }
    }

    impl LineSource for ScriptedSource {
        fn read_line(&mut self) -> io::Result<InputEvent> {
            Ok(self.0.pop_front().unwrap_or(InputEvent::Eof))
        }
    }

    struct MockGateway {
        responses: Mutex<VecDeque<Result<String, GatewayError>>>,
        calls: Mutex<Vec<Vec<Message>>>,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<String, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn generate(
            &self,
            _system_prompt: &str,
            messages: &[Message],
            _max_tokens: u32,
        ) -> Result<String, GatewayError> {
            self.calls.lock().unwrap().push(messages.to_vec());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Connection("no scripted reply".into())))
        }
    }

    fn turn(speech: &str, action: &str) -> Result<String, GatewayError> {
        Ok(format!(
            r#"{{"speech":"{speech}","expression":"neutral","action":"{action}"}}"#
        ))
    }

    fn feedback() -> Result<String, GatewayError> {
        Ok(r#"{"overallFeedback":"좋습니다.","strengths":["결론 제시"],"improvements":[],"contentScore":0.8,"logicScore":0.7,"clarityScore":0.6,"pressureScore":0.5}"#.to_string())
    }

    /// Medium tier, one two-member panel, questions without follow-up variants.
    fn context(question_count: usize) -> Arc<InterviewContext> {
        let mut tiers = HashMap::new();
        tiers.insert(
            Difficulty::Medium,
            vec![Panel::new(["chairperson", "technical"])],
        );
        let questions = (0..question_count)
            .map(|i| {
                Question::new(
                    format!("t{i}"),
                    format!("질문 {i}"),
                    QuestionCategory::Motivation,
                    0,
                    "technical",
                )
            })
            .collect();
        Arc::new(InterviewContext::new(
            PersonaRegistry::builtin(),
            PanelCatalog::new(tiers),
            QuestionBank::new(questions),
        ))
    }

    fn repl(
        gateway: Arc<MockGateway>,
        questions: usize,
        source: ScriptedSource,
    ) -> InterviewRepl<ScriptedSource> {
        let orchestrator = InterviewOrchestrator::new(gateway, context(questions));
        let settings = SessionSettings {
            difficulty: Difficulty::Medium,
            max_questions: questions,
            seed: Some(7),
            show_progress: false,
            ..SessionSettings::default()
        };
        InterviewRepl::with_source(orchestrator, settings, source)
    }

    #[test]
    fn test_answer_message_includes_question() {
        assert_eq!(answer_message("왜?", "이유는"), "[질문] 왜?\n[답변] 이유는");
    }

    #[tokio::test]
    async fn test_full_session_produces_feedback() {
        let gateway = MockGateway::new(vec![
            turn("시작하겠습니다.", "none"),
            turn("알겠습니다.", "none"),
            turn("다음으로 넘어가죠.", "none"),
            feedback(),
        ]);
        let mut repl = repl(
            gateway.clone(),
            2,
            ScriptedSource::lines(&["음 결론부터 말씀드리면", "", "/help", "사례로는"]),
        );

        let outcome = repl.run().await.unwrap();

        assert_eq!(outcome.turns, 3);
        assert!(!outcome.concluded);
        assert!(!outcome.quit);
        assert_eq!(outcome.report.answers.len(), 2);
        assert_eq!(outcome.report.answers[0].filler_count, 1);
        assert_eq!(outcome.feedback.unwrap().overall_feedback, "좋습니다.");
        assert_eq!(gateway.call_count(), 4);
    }

    #[tokio::test]
    async fn test_model_follow_up_takes_one_extra_answer() {
        let gateway = MockGateway::new(vec![
            turn("시작합니다.", "none"),
            turn("근거가 뭡니까?", "followup"),
            turn("됐습니다.", "followup"),
            feedback(),
        ]);
        let mut repl = repl(
            gateway.clone(),
            1,
            ScriptedSource::lines(&["첫 답변", "통계 근거입니다"]),
        );

        let outcome = repl.run().await.unwrap();

        let answers = &outcome.report.answers;
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].question, "질문 0");
        assert_eq!(answers[1].question, "근거가 뭡니까?");
        assert_eq!(answers[1].answer.as_deref(), Some("통계 근거입니다"));
        assert!(outcome.feedback.is_some());
    }

    #[tokio::test]
    async fn test_conclude_stops_remaining_questions() {
        let gateway = MockGateway::new(vec![
            turn("시작합니다.", "none"),
            turn("여기까지 하겠습니다.", "conclude"),
            feedback(),
        ]);
        let mut repl = repl(
            gateway.clone(),
            3,
            ScriptedSource::lines(&["답변", "쓰이지 않는 답변"]),
        );

        let outcome = repl.run().await.unwrap();

        assert!(outcome.concluded);
        assert_eq!(outcome.report.answers.len(), 1);
        assert!(outcome.feedback.is_some());
        assert_eq!(gateway.call_count(), 3);
    }

    #[tokio::test]
    async fn test_end_before_any_answer_skips_feedback() {
        let gateway = MockGateway::new(vec![turn("시작합니다.", "none")]);
        let mut repl = repl(gateway.clone(), 2, ScriptedSource::lines(&["/end"]));

        let outcome = repl.run().await.unwrap();

        assert!(outcome.report.answers.is_empty());
        assert!(outcome.feedback.is_none());
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_quit_leaves_without_feedback() {
        let gateway = MockGateway::new(vec![turn("시작합니다.", "none"), turn("네.", "none")]);
        let mut repl = repl(gateway.clone(), 3, ScriptedSource::lines(&["답변", "/quit"]));

        let outcome = repl.run().await.unwrap();

        assert!(outcome.quit);
        assert!(outcome.feedback.is_none());
        assert_eq!(outcome.report.answers.len(), 1);
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_skip_records_unanswered_without_backend_call() {
        let gateway = MockGateway::new(vec![turn("시작합니다.", "none"), feedback()]);
        let mut repl = repl(gateway.clone(), 1, ScriptedSource::lines(&["/skip"]));

        let outcome = repl.run().await.unwrap();

        assert_eq!(outcome.report.answers.len(), 1);
        assert!(outcome.report.answers[0].answer.is_none());
        assert!(outcome.feedback.is_some());
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_turn_moves_on_and_keeps_answer_in_history() {
        let gateway = MockGateway::new(vec![
            turn("시작합니다.", "none"),
            Err(GatewayError::Transport {
                status: 500,
                message: "boom".into(),
            }),
            turn("계속하죠.", "none"),
            feedback(),
        ]);
        let mut repl = repl(gateway.clone(), 2, ScriptedSource::lines(&["하나", "둘"]));

        let outcome = repl.run().await.unwrap();

        assert_eq!(outcome.turns, 2);
        assert_eq!(outcome.report.answers.len(), 2);
        let calls = gateway.calls.lock().unwrap();
        let third = &calls[2];
        assert!(third.iter().any(|m| m.content.contains("[답변] 하나")));
        assert!(third.iter().any(|m| m.content.contains("[답변] 둘")));
    }

    #[tokio::test]
    async fn test_missing_panel_is_an_error() {
        let orchestrator = InterviewOrchestrator::new(
            MockGateway::new(Vec::new()),
            Arc::new(InterviewContext::new(
                PersonaRegistry::builtin(),
                PanelCatalog::new(HashMap::new()),
                QuestionBank::builtin(),
            )),
        );
        let mut repl = InterviewRepl::with_source(
            orchestrator,
            SessionSettings {
                show_progress: false,
                ..SessionSettings::default()
            },
            ScriptedSource::lines(&[]),
        );

        let err = repl.run().await.unwrap_err();
        assert!(matches!(err, ReplError::Domain(DomainError::NoPanels(_))));
    }
}
