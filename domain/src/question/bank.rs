//! Question Bank & Selector

use super::entities::{Question, QuestionCategory};
use crate::core::difficulty::Difficulty;
use rand::Rng;
use rand::seq::SliceRandom;

/// Number of questions drawn per session unless configured otherwise.
pub const DEFAULT_MAX_QUESTIONS: usize = 8;

/// Fixed set of interview questions.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Draw a randomized, difficulty-filtered subset of at most `max_count` questions.
    ///
    /// Questions with `min_difficulty <= difficulty.ordinal()` are shuffled
    /// (uniform Fisher–Yates) and truncated. When fewer qualify than
    /// `max_count`, all of them are returned, without repeats.
    pub fn select_questions<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        max_count: usize,
        rng: &mut R,
    ) -> Vec<Question> {
        let threshold = difficulty.ordinal();
        let mut selected: Vec<Question> = self
            .questions
            .iter()
            .filter(|q| q.min_difficulty <= threshold)
            .cloned()
            .collect();
        selected.shuffle(rng);
        selected.truncate(max_count);
        selected
    }

    /// The 15 built-in public-sector interview questions.
    pub fn builtin() -> Self {
        use QuestionCategory::*;

        Self::new(vec![
            Question::new("q001", "간단하게 자기소개를 해주세요.", SelfIntroduction, 0, "chairperson")
                .with_follow_ups([
                    "방금 말씀하신 경험을 좀 더 구체적으로 설명해 주시겠어요?",
                    "그 경험이 이 직무에 어떻게 도움이 될까요?",
                ]),
            Question::new("q002", "공무원(공기업)에 지원한 이유가 무엇입니까?", Motivation, 0, "chairperson")
                .with_follow_ups([
                    "민간기업이 아닌 공직을 선택한 이유가 다른 이유도 있습니까?",
                    "왜 당신이어야 합니까? 다른 지원자와 다른 점은?",
                ]),
            Question::new("q003", "본인의 강점과 약점을 솔직하게 말씀해 주세요.", SelfIntroduction, 0, "hr")
                .with_follow_ups([
                    "약점을 극복하기 위해 구체적으로 어떤 노력을 했습니까?",
                    "그 강점이 실제 업무에서 발휘된 사례를 말씀해 주세요.",
                ]),
            Question::new(
                "q004",
                "최근 공공 분야에서 주목되는 정책 이슈 하나를 선택하고 개선 방안을 제시하세요.",
                PolicyValue,
                1,
                "technical",
            )
            .with_follow_ups([
                "그 방안의 예산 규모를 어떻게 추정하셨습니까?",
                "현장에서 반대 의견이 나온다면 어떻게 설득하겠습니까?",
            ]),
            Question::new(
                "q005",
                "상사가 위법하거나 비윤리적인 지시를 한다면 어떻게 하겠습니까?",
                EthicsDilemma,
                1,
                "ethics",
            )
            .with_follow_ups([
                "내부 고발을 선택할 경우 조직 내 불이익을 감수할 수 있습니까?",
                "법과 조직의 이익이 충돌할 때 무엇을 우선시하겠습니까?",
            ]),
            Question::new(
                "q006",
                "민원인이 과도한 요구를 하며 소리를 지른다면 어떻게 대응하겠습니까?",
                SituationalInterview,
                1,
                "citizen",
            )
            .with_follow_ups([
                "그 민원인이 SNS에 공무원 비위를 올린다고 협박하면?",
                "해결이 안 될 경우 민원인에게 어떻게 마무리하겠습니까?",
            ]),
            Question::new(
                "q007",
                "이력서에 공백 기간이 있는데, 그 기간에 무엇을 했습니까?",
                ExperienceVerification,
                1,
                "hr",
            )
            .with_follow_ups([
                "정확히 몇 월부터 몇 월까지입니까?",
                "그 기간의 활동을 증빙할 수 있는 자료가 있습니까?",
            ]),
            Question::new(
                "q008",
                "팀 내 갈등 상황을 경험한 적이 있습니까? 어떻게 해결했습니까?",
                SituationalInterview,
                0,
                "supportive",
            )
            .with_follow_ups([
                "상대방 입장에서는 어떻게 느꼈을 것 같습니까?",
                "같은 상황이 다시 발생하면 다르게 행동할 부분이 있습니까?",
            ]),
            Question::new(
                "q009",
                "예산이 50% 삭감된 상황에서 기존 사업을 어떻게 유지하겠습니까?",
                SituationalInterview,
                2,
                "scenario",
            )
            .with_follow_ups([
                "이해관계자 반발을 최소화하려면 누구부터 설득하겠습니까?",
                "삭감이 불가피한 사업이 있다면 어떤 기준으로 선택하겠습니까?",
            ]),
            Question::new(
                "q010",
                "당신의 답변은 이상적이지만 현실에서는 불가능합니다. 다시 답변해 보세요.",
                PressureVerification,
                2,
                "stress",
            )
            .with_follow_ups([
                "방금 전과 다른 말씀을 하시는 것 같은데, 어느 쪽이 본심입니까?",
                "근거 없이 주장만 하시는 것 아닙니까?",
            ]),
            Question::new(
                "q011",
                "세금이 낭비되고 있다는 언론 보도가 나온 사업의 담당자로 배치된다면?",
                SituationalInterview,
                2,
                "citizen",
            )
            .with_follow_ups([
                "언론과의 소통은 어떻게 하겠습니까?",
                "사업 책임자로서 개인적 책임을 어디까지 지겠습니까?",
            ]),
            Question::new(
                "q012",
                "직무 관련 법령이나 정책 중 최근에 공부한 것을 설명해 보세요.",
                JobUnderstanding,
                1,
                "technical",
            )
            .with_follow_ups([
                "그 정책의 문제점은 무엇이라고 생각합니까?",
                "실무에서 그 법령을 적용하면 어떤 어려움이 있을까요?",
            ]),
            Question::new(
                "q013",
                "5년 후 본인이 어떤 공무원이 되고 싶은지 말씀해 주세요.",
                Motivation,
                0,
                "rational",
            )
            .with_follow_ups([
                "그 목표를 위해 현재 무엇을 하고 있습니까?",
                "원하는 포지션에 가지 못한다면 어떻게 하겠습니까?",
            ]),
            Question::new(
                "q014",
                "공공서비스 디지털 전환에서 소외계층 문제를 어떻게 해결하겠습니까?",
                PolicyValue,
                2,
                "technical",
            )
            .with_follow_ups([
                "구체적인 예산 투입 방안은?",
                "민간 기업과 협력 시 데이터 보안은 어떻게 보장합니까?",
            ]),
            Question::new(
                "q015",
                "본인이 옳다고 생각하는 의견을 상사가 반대할 때 어떻게 하겠습니까?",
                EthicsDilemma,
                1,
                "ethics",
            )
            .with_follow_ups([
                "끝까지 관철시키려 한다면 어떤 방법을 쓰겠습니까?",
                "결국 상사의 뜻대로 되었을 때 어떻게 받아들이겠습니까?",
            ]),
        ])
    }
}
