//! Prompt templates for interviewer turns and session feedback

use crate::core::difficulty::{Difficulty, InterviewMode};
use crate::persona::panel::Panel;
use crate::persona::registry::PersonaRegistry;
use crate::session::feedback::SessionReport;

/// Name used when the speaking persona is not in the registry.
const UNKNOWN_SPEAKER_NAME: &str = "면접관";

/// Templates for generating interview prompts
pub struct InterviewPrompt;

impl InterviewPrompt {
    /// User message sent when the conversation history is still empty.
    pub fn bootstrap() -> &'static str {
        "면접을 시작해주세요."
    }

    /// System prompt for one interviewer turn.
    ///
    /// Pure function of its inputs. Panel ids missing from the registry
    /// render as empty lines; a missing speaker renders with a generic name
    /// and no role or script.
    pub fn interviewer_system(
        registry: &PersonaRegistry,
        panel: &Panel,
        speaker: &str,
        difficulty: Difficulty,
        mode: InterviewMode,
    ) -> String {
        let panel_desc = panel
            .members()
            .iter()
            .map(|id| {
                registry
                    .lookup(id)
                    .map(|p| format!("- {} ({})", p.name, p.role))
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join("\n");

        let persona = registry.lookup(speaker);
        let name = persona.map_or(UNKNOWN_SPEAKER_NAME, |p| p.name.as_str());
        let role = persona.map_or("", |p| p.role.as_str());
        let script = persona.map_or("", |p| p.script.as_str());

        format!(
            r#"당신은 압박면접 시뮬레이터의 AI 면접관입니다.
면접 모드: {mode}, 난이도: {difficulty}

## 면접관 패널 구성
{panel_desc}

## 현재 발화 면접관: {name} ({role})
{script}

## 응답 규칙
- 반드시 한국어로 답변하세요.
- 질문 또는 반응은 1~3문장 이내로 간결하게 작성하세요.
- 반드시 아래 JSON 형식으로만 반환하세요 (다른 텍스트 없이):
{{"speech":"발화 내용","expression":"neutral|smile|suspicious|pressure|nod|frown|bored|note","action":"none|interrupt|followup|conclude"}}"#,
            mode = mode.label(),
            difficulty = difficulty.label(),
        )
    }

    /// System prompt for feedback generation
    pub fn feedback_system() -> &'static str {
        "당신은 공무원/공기업 면접 전문 코치입니다. 객관적이고 건설적인 피드백을 제공하세요."
    }

    /// User prompt embedding every answer record of the session
    pub fn feedback_request(report: &SessionReport) -> String {
        let summary = report
            .answers
            .iter()
            .enumerate()
            .map(|(i, a)| {
                format!(
                    "[{}] Q: {}\n    A: {}\n    반복어: {}회, 답변시간: {:.1}초",
                    i + 1,
                    a.question,
                    a.answer.as_deref().filter(|s| !s.is_empty()).unwrap_or("(답변 없음)"),
                    a.filler_count,
                    a.duration_secs,
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"다음 면접 세션 기록을 분석하여 한국어로 상세한 피드백 리포트를 작성하세요.
난이도: {difficulty}, 총 답변 수: {count}

{summary}

반드시 아래 JSON 형식으로만 반환하세요 (다른 텍스트 없이):
{{"overallFeedback":"종합 의견 (2~3문장)","strengths":["강점1","강점2","강점3"],"improvements":["개선점1","개선점2","개선점3"],"contentScore":0.75,"logicScore":0.65,"clarityScore":0.70,"pressureScore":0.60}}"#,
            difficulty = report.difficulty.label(),
            count = report.answers.len(),
        )
    }
}
