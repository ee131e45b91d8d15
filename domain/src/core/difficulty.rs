//! Session setting value objects: difficulty tier and interview mode.

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier of an interview session.
///
/// Each tier maps to an ordinal threshold used to filter the question bank
/// (`easy = 0`, `medium = 1`, `hard = 2`) and carries pacing parameters
/// for the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Ordinal threshold compared against `Question::min_difficulty`.
    pub fn ordinal(&self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// Label embedded in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "하(쉬움)",
            Difficulty::Medium => "중(보통)",
            Difficulty::Hard => "상(어려움)",
        }
    }

    /// Probability that the front end asks a follow-up after an answer.
    pub fn follow_up_chance(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.2,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.8,
        }
    }

    /// Answer time limit in seconds.
    pub fn time_limit_secs(&self) -> u32 {
        match self {
            Difficulty::Easy => 120,
            Difficulty::Medium => 90,
            Difficulty::Hard => 60,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "medium" | "m" => Ok(Difficulty::Medium),
            "hard" | "h" => Ok(Difficulty::Hard),
            _ => Err(DomainError::InvalidValue {
                field: "difficulty",
                value: s.to_string(),
            }),
        }
    }
}

/// Which kind of public-sector organisation the candidate is applying to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewMode {
    PublicServant,
    PublicCorp,
    #[default]
    Mixed,
}

impl InterviewMode {
    /// Label embedded in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            InterviewMode::PublicServant => "공무원",
            InterviewMode::PublicCorp => "공기업",
            InterviewMode::Mixed => "혼합",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewMode::PublicServant => "public_servant",
            InterviewMode::PublicCorp => "public_corp",
            InterviewMode::Mixed => "mixed",
        }
    }
}

impl fmt::Display for InterviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InterviewMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "public_servant" | "servant" => Ok(InterviewMode::PublicServant),
            "public_corp" | "corp" => Ok(InterviewMode::PublicCorp),
            "mixed" => Ok(InterviewMode::Mixed),
            _ => Err(DomainError::InvalidValue {
                field: "mode",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_ascend() {
        assert_eq!(Difficulty::Easy.ordinal(), 0);
        assert_eq!(Difficulty::Medium.ordinal(), 1);
        assert_eq!(Difficulty::Hard.ordinal(), 2);
    }

    #[test]
    fn test_time_limit_shrinks_with_difficulty() {
        assert!(Difficulty::Hard.time_limit_secs() < Difficulty::Medium.time_limit_secs());
        assert!(Difficulty::Medium.time_limit_secs() < Difficulty::Easy.time_limit_secs());
    }

    #[test]
    fn test_follow_up_chance_in_unit_range() {
        for d in Difficulty::ALL {
            let p = d.follow_up_chance();
            assert!((0.0..=1.0).contains(&p), "{d}: {p}");
        }
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("hard".parse::<Difficulty>().ok(), Some(Difficulty::Hard));
        assert_eq!("E".parse::<Difficulty>().ok(), Some(Difficulty::Easy));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_mode_from_str_accepts_kebab_case() {
        assert_eq!(
            "public-servant".parse::<InterviewMode>().ok(),
            Some(InterviewMode::PublicServant)
        );
        assert_eq!(
            "public_corp".parse::<InterviewMode>().ok(),
            Some(InterviewMode::PublicCorp)
        );
        assert!("startup".parse::<InterviewMode>().is_err());
    }

    #[test]
    fn test_serde_representation() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
        let mode: InterviewMode = serde_json::from_str("\"public_corp\"").unwrap();
        assert_eq!(mode, InterviewMode::PublicCorp);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(InterviewMode::default(), InterviewMode::Mixed);
    }
}
