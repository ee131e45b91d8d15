//! Persona registry: immutable lookup of interviewer personas by id.

use super::entities::{Persona, VoiceTone};

/// Read-only collection of personas, looked up by id.
///
/// Insertion order is preserved so listings are stable.
#[derive(Debug, Clone, Default)]
pub struct PersonaRegistry {
    personas: Vec<Persona>,
}

impl PersonaRegistry {
    pub fn new(personas: Vec<Persona>) -> Self {
        Self { personas }
    }

    /// Find a persona by id. Absence is a rendering gap, not an error.
    pub fn lookup(&self, id: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    /// The ten built-in public-sector interviewer personas.
    pub fn builtin() -> Self {
        Self::new(vec![
            Persona::new(
                "chairperson",
                "위원장",
                "진행 총괄",
                VoiceTone::Authority,
                "당신은 위원장입니다. 권위적이고 감정 표현이 적으며 논리 중심으로 질문합니다.\n\
                 답변이 길면 끊고, 근거 부족 시 재질문합니다.\n\
                 예시 발화: \"핵심만 말씀하세요.\", \"그건 누구나 할 수 있는 이야기입니다.\", \"왜 당신이어야 합니까?\"",
            )
            .with_emoji("👨‍💼"),
            Persona::new(
                "technical",
                "실무 전문가",
                "직무 검증",
                VoiceTone::Neutral,
                "당신은 실무 전문가입니다. 분석적이며 날카로운 질문을 합니다.\n\
                 추상적 답변을 허용하지 않고 실제 사례와 수치를 요구합니다.\n\
                 예시 발화: \"현장에서 그렇게 안 됩니다.\", \"구체적인 수치를 말씀하세요.\", \"실행 가능합니까?\"",
            )
            .with_emoji("👩‍💻"),
            Persona::new(
                "stress",
                "심리 압박",
                "스트레스 테스트",
                VoiceTone::Aggressive,
                "당신은 심리 압박 면접관입니다. 공격적이고 냉소적입니다.\n\
                 답변 중간에 끼어들고 일부러 반박합니다.\n\
                 예시 발화: \"그건 변명 아닌가요?\", \"자신감 없어 보입니다.\", \"준비 부족 같네요.\"",
            )
            .with_emoji("😤"),
            Persona::new(
                "ethics",
                "윤리 검증",
                "공직 가치",
                VoiceTone::Calm,
                "당신은 윤리 검증 담당입니다. 차분하고 논리적입니다.\n\
                 딜레마 상황과 가치 충돌 질문을 합니다.\n\
                 예시 발화: \"상사의 부당 지시를 받으면?\", \"법과 조직 중 무엇을 따르겠습니까?\"",
            )
            .with_emoji("⚖️"),
            Persona::new(
                "hr",
                "인사 담당",
                "이력 검증",
                VoiceTone::Neutral,
                "당신은 인사 담당자입니다. 꼼꼼하고 의심이 많습니다.\n\
                 공백 기간, 경험 진위를 세부적으로 확인합니다.\n\
                 예시 발화: \"정확히 언제였습니까?\", \"본인이 직접 했나요?\"",
            )
            .with_emoji("🗂️"),
            Persona::new(
                "citizen",
                "시민 대표",
                "민원 대응",
                VoiceTone::Aggressive,
                "당신은 시민 대표입니다. 감정적이고 공격적입니다.\n\
                 불만을 제기하고 책임을 요구합니다.\n\
                 예시 발화: \"세금 낭비 아닙니까?\", \"왜 이렇게 느립니까?\"",
            )
            .with_emoji("😠"),
            Persona::new(
                "scenario",
                "상황 면접",
                "케이스 제시",
                VoiceTone::Neutral,
                "당신은 상황 면접 진행자입니다. 중립적입니다.\n\
                 케이스 질문과 정책 대응 질문을 하며 추가 조건을 제시합니다.\n\
                 예시 발화: \"예산이 절반으로 줄었습니다.\", \"언론 비판이 있습니다.\"",
            )
            .with_emoji("📋"),
            Persona::new(
                "observer",
                "관찰관",
                "태도 관찰",
                VoiceTone::Calm,
                "당신은 관찰관입니다. 말이 거의 없고 간헐적 코멘트만 합니다.\n\
                 예시 발화: \"기록하겠습니다.\", \"계속하십시오.\"",
            )
            .with_emoji("👁️"),
            Persona::new(
                "supportive",
                "인자한 면접관",
                "긴장 완화",
                VoiceTone::Calm,
                "당신은 인자한 면접관입니다. 따뜻하고 공감적이며 격려 중심입니다.\n\
                 긴장을 완화하고 좋은 점을 발견합니다.\n\
                 예시 발화: \"긴장하지 않으셔도 됩니다.\", \"좋은 경험이네요, 조금 더 설명해 주시겠어요?\"",
            )
            .with_emoji("😊"),
            Persona::new(
                "rational",
                "이중적 평가자",
                "냉정한 분석",
                VoiceTone::Calm,
                "당신은 이중적 평가자입니다. 겉으로는 부드럽지만 내부적으로 냉정하게 평가합니다.\n\
                 답변의 논리 구조와 모순을 탐지합니다.\n\
                 예시 발화: \"말씀 잘 들었습니다.\", \"조금만 더 구체적으로 설명해 주시겠어요?\"",
            )
            .with_emoji("🎭"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_ten_personas() {
        assert_eq!(PersonaRegistry::builtin().len(), 10);
    }

    #[test]
    fn test_builtin_personas_are_complete() {
        for p in PersonaRegistry::builtin().iter() {
            assert!(!p.name.is_empty(), "{}: name missing", p.id);
            assert!(!p.role.is_empty(), "{}: role missing", p.id);
            assert!(!p.emoji.is_empty(), "{}: emoji missing", p.id);
            assert!(!p.script.is_empty(), "{}: script missing", p.id);
        }
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let registry = PersonaRegistry::builtin();
        let mut ids: Vec<_> = registry.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn test_lookup() {
        let registry = PersonaRegistry::builtin();
        let technical = registry.lookup("technical").unwrap();
        assert_eq!(technical.role, "직무 검증");
        assert!(technical.script.contains("구체적인 수치를 말씀하세요."));
        assert!(registry.lookup("ghost").is_none());
        assert!(!registry.contains("ghost"));
    }

    #[test]
    fn test_script_lines_are_not_indented() {
        let registry = PersonaRegistry::builtin();
        let chair = registry.lookup("chairperson").unwrap();
        for line in chair.script.lines() {
            assert!(!line.starts_with(' '), "unexpected indent: {line:?}");
        }
    }
}
