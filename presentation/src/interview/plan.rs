//! Per-session draw of the panel and the questions to ask

use interview_domain::{Difficulty, DomainError, InterviewContext, Panel, Question};
use rand::Rng;

/// Panel and question list fixed at the start of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub panel: Panel,
    pub questions: Vec<Question>,
}

impl SessionPlan {
    /// Pick one of the tier's panels and up to `max_questions` eligible questions.
    pub fn draw<R: Rng + ?Sized>(
        context: &InterviewContext,
        difficulty: Difficulty,
        max_questions: usize,
        rng: &mut R,
    ) -> Result<Self, DomainError> {
        let panel = context.panels().choose_panel(difficulty, rng)?.clone();
        if panel.is_empty() {
            return Err(DomainError::EmptyPanel);
        }
        let questions = context.questions().select_questions(difficulty, max_questions, rng);
        Ok(Self { panel, questions })
    }

    /// Persona that opens the session.
    pub fn opening_speaker(&self) -> &str {
        self.panel.speaker_at(0).unwrap_or_default()
    }

    /// Speaker for the `turn`-th question: the question's preferred persona
    /// when seated, otherwise the panel in rotation.
    pub fn speaker_for<'a>(&'a self, question: &'a Question, turn: usize) -> &'a str {
        if self.panel.contains(&question.preferred) {
            &question.preferred
        } else {
            self.panel.speaker_at(turn).unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_domain::{PanelCatalog, PersonaRegistry, QuestionBank, QuestionCategory};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn test_draw_uses_tier_panels_and_eligible_questions() {
        let context = InterviewContext::builtin();
        let mut rng = StdRng::seed_from_u64(5);
        let plan = SessionPlan::draw(&context, Difficulty::Easy, 3, &mut rng).unwrap();

        assert!(context.panels().panels_for(Difficulty::Easy).contains(&plan.panel));
        assert_eq!(plan.questions.len(), 3);
        assert!(plan.questions.iter().all(|q| q.min_difficulty == 0));
    }

    #[test]
    fn test_draw_without_panels_fails() {
        let context = InterviewContext::new(
            PersonaRegistry::builtin(),
            PanelCatalog::new(HashMap::new()),
            QuestionBank::builtin(),
        );
        let mut rng = StdRng::seed_from_u64(1);
        let err = SessionPlan::draw(&context, Difficulty::Medium, 8, &mut rng).unwrap_err();
        assert_eq!(err, DomainError::NoPanels("medium".to_string()));
    }

    #[test]
    fn test_draw_rejects_empty_panel() {
        let mut tiers = HashMap::new();
        tiers.insert(Difficulty::Hard, vec![Panel::new(Vec::<String>::new())]);
        let context = InterviewContext::new(
            PersonaRegistry::builtin(),
            PanelCatalog::new(tiers),
            QuestionBank::builtin(),
        );
        let mut rng = StdRng::seed_from_u64(1);
        let err = SessionPlan::draw(&context, Difficulty::Hard, 8, &mut rng).unwrap_err();
        assert_eq!(err, DomainError::EmptyPanel);
    }

    #[test]
    fn test_speaker_prefers_seated_persona_then_rotates() {
        let plan = SessionPlan {
            panel: Panel::new(["chairperson", "technical", "hr"]),
            questions: Vec::new(),
        };
        let seated = Question::new("q", "질문", QuestionCategory::Motivation, 0, "hr");
        let absent = Question::new("q", "질문", QuestionCategory::Motivation, 0, "stress");

        assert_eq!(plan.opening_speaker(), "chairperson");
        assert_eq!(plan.speaker_for(&seated, 0), "hr");
        assert_eq!(plan.speaker_for(&absent, 0), "chairperson");
        assert_eq!(plan.speaker_for(&absent, 4), "technical");
    }
}
