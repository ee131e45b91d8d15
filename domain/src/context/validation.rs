//! Consistency checks across the persona registry, panels and question bank.
//!
//! Broken references are not fatal at runtime (prompt building renders
//! gaps), so they are reported as structured issues for the caller to
//! surface.

use super::InterviewContext;
use crate::core::difficulty::Difficulty;
use std::collections::HashSet;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The session cannot run as configured.
    Error,
    /// The session runs but some prompts will have gaps.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A difficulty tier has no panels to choose from.
    NoPanelsForDifficulty,
    /// A panel has no members.
    EmptyPanel,
    /// A panel lists a persona id that is not registered.
    UnknownPanelMember,
    /// A question prefers a persona id that is not registered.
    UnknownPreferredPersona,
    /// The question bank has nothing to ask at some difficulty.
    NoQuestionsForDifficulty,
    /// Two personas share an id.
    DuplicatePersona,
    /// A config field holds a value outside its accepted set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A config field that must not be empty is empty or zero.
    EmptyValue { field: String },
}

/// A detected issue in the interview catalogs.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message,
        }
    }

    pub fn warning(code: ConfigIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message,
        }
    }
}

impl InterviewContext {
    /// Check every cross-reference between the catalogs.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for persona in self.personas().iter() {
            if !seen.insert(persona.id.as_str()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicatePersona,
                    format!("Persona '{}' is registered more than once", persona.id),
                ));
            }
        }

        for difficulty in Difficulty::ALL {
            if self.panels().panels_for(difficulty).is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::NoPanelsForDifficulty,
                    format!("No panels configured for difficulty '{difficulty}'"),
                ));
            }
            if !self
                .questions()
                .questions()
                .iter()
                .any(|q| q.min_difficulty <= difficulty.ordinal())
            {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::NoQuestionsForDifficulty,
                    format!("No questions available at difficulty '{difficulty}'"),
                ));
            }
        }

        for (difficulty, panel) in self.panels().iter() {
            if panel.is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyPanel,
                    format!("A '{difficulty}' panel has no members"),
                ));
            }
            for member in panel.members() {
                if !self.personas().contains(member) {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::UnknownPanelMember,
                        format!("Panel member '{member}' ({difficulty}) is not a registered persona"),
                    ));
                }
            }
        }

        for question in self.questions().questions() {
            if !self.personas().contains(&question.preferred) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownPreferredPersona,
                    format!(
                        "Question '{}' prefers unknown persona '{}'",
                        question.id, question.preferred
                    ),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::entities::{Persona, VoiceTone};
    use crate::persona::panel::{Panel, PanelCatalog};
    use crate::persona::registry::PersonaRegistry;
    use crate::question::bank::QuestionBank;
    use crate::question::entities::{Question, QuestionCategory};
    use std::collections::HashMap;

    fn codes(issues: &[ConfigIssue]) -> Vec<ConfigIssueCode> {
        issues.iter().map(|i| i.code.clone()).collect()
    }

    #[test]
    fn test_builtin_catalogs_are_consistent() {
        let issues = InterviewContext::builtin().validate();
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn test_unknown_references_are_warnings() {
        let registry = PersonaRegistry::new(vec![Persona::new(
            "hr",
            "인사 담당",
            "이력 검증",
            VoiceTone::Neutral,
            "",
        )]);
        let mut tiers = HashMap::new();
        for d in Difficulty::ALL {
            tiers.insert(d, vec![Panel::new(["hr", "ghost"])]);
        }
        let bank = QuestionBank::new(vec![Question::new(
            "q1",
            "질문",
            QuestionCategory::Motivation,
            0,
            "phantom",
        )]);
        let ctx = InterviewContext::new(registry, PanelCatalog::new(tiers), bank);
        let issues = ctx.validate();

        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert_eq!(
            codes(&issues)
                .iter()
                .filter(|c| **c == ConfigIssueCode::UnknownPanelMember)
                .count(),
            3
        );
        assert!(codes(&issues).contains(&ConfigIssueCode::UnknownPreferredPersona));
    }

    #[test]
    fn test_missing_tier_is_an_error() {
        let ctx = InterviewContext::new(
            PersonaRegistry::builtin(),
            PanelCatalog::default(),
            QuestionBank::builtin(),
        );
        let issues = ctx.validate();
        assert_eq!(issues.len(), 3);
        assert!(
            issues
                .iter()
                .all(|i| i.severity == Severity::Error
                    && i.code == ConfigIssueCode::NoPanelsForDifficulty)
        );
    }
}
