//! Read-only catalogs shared by every interview session.

use crate::persona::panel::PanelCatalog;
use crate::persona::registry::PersonaRegistry;
use crate::question::bank::QuestionBank;

/// Persona registry, panel catalog and question bank bundled together.
///
/// Built once and handed to each orchestrator (usually behind an `Arc`);
/// nothing mutates it after construction.
#[derive(Debug, Clone, Default)]
pub struct InterviewContext {
    personas: PersonaRegistry,
    panels: PanelCatalog,
    questions: QuestionBank,
}

impl InterviewContext {
    pub fn new(personas: PersonaRegistry, panels: PanelCatalog, questions: QuestionBank) -> Self {
        Self {
            personas,
            panels,
            questions,
        }
    }

    /// Built-in Korean public-sector catalogs.
    pub fn builtin() -> Self {
        Self::new(
            PersonaRegistry::builtin(),
            PanelCatalog::builtin(),
            QuestionBank::builtin(),
        )
    }

    pub fn personas(&self) -> &PersonaRegistry {
        &self.personas
    }

    pub fn panels(&self) -> &PanelCatalog {
        &self.panels
    }

    pub fn questions(&self) -> &QuestionBank {
        &self.questions
    }
}
