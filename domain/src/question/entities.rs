//! Interview question entity

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Topic a question probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionCategory {
    SelfIntroduction,
    Motivation,
    PolicyValue,
    EthicsDilemma,
    SituationalInterview,
    ExperienceVerification,
    PressureVerification,
    JobUnderstanding,
}

/// A question from the bank (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub category: QuestionCategory,
    /// Lowest difficulty ordinal at which the question may be asked.
    pub min_difficulty: u8,
    /// Persona that should ask this question when seated.
    pub preferred: String,
    pub follow_ups: Vec<String>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        category: QuestionCategory,
        min_difficulty: u8,
        preferred: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category,
            min_difficulty,
            preferred: preferred.into(),
            follow_ups: Vec::new(),
        }
    }

    pub fn with_follow_ups<I, S>(mut self, follow_ups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.follow_ups = follow_ups.into_iter().map(Into::into).collect();
        self
    }

    /// Pick one follow-up variant at random.
    pub fn follow_up<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.follow_ups.choose(rng).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_follow_up_picks_a_variant() {
        let q = Question::new("q", "질문", QuestionCategory::Motivation, 0, "hr")
            .with_follow_ups(["하나", "둘"]);
        let mut rng = StdRng::seed_from_u64(3);
        let picked = q.follow_up(&mut rng).unwrap();
        assert!(picked == "하나" || picked == "둘");
    }

    #[test]
    fn test_follow_up_none_when_empty() {
        let q = Question::new("q", "질문", QuestionCategory::Motivation, 0, "hr");
        let mut rng = StdRng::seed_from_u64(3);
        assert!(q.follow_up(&mut rng).is_none());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let q = Question::new("q001", "질문", QuestionCategory::EthicsDilemma, 1, "ethics");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["minDifficulty"], 1);
        assert_eq!(json["category"], "EthicsDilemma");
        assert!(json["followUps"].as_array().unwrap().is_empty());
    }
}
