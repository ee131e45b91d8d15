//! Interviewer panels and the per-difficulty panel catalog.

use crate::core::difficulty::Difficulty;
use crate::core::error::DomainError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered set of persona ids seated for one session (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Panel {
    members: Vec<String>,
}

impl Panel {
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|m| m == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member that speaks at `turn`, rotating through the panel.
    pub fn speaker_at(&self, turn: usize) -> Option<&str> {
        if self.members.is_empty() {
            return None;
        }
        Some(self.members[turn % self.members.len()].as_str())
    }
}

/// Alternative panels per difficulty tier.
#[derive(Debug, Clone, Default)]
pub struct PanelCatalog {
    tiers: HashMap<Difficulty, Vec<Panel>>,
}

impl PanelCatalog {
    pub fn new(tiers: HashMap<Difficulty, Vec<Panel>>) -> Self {
        Self { tiers }
    }

    pub fn panels_for(&self, difficulty: Difficulty) -> &[Panel] {
        self.tiers
            .get(&difficulty)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pick one of the tier's panels uniformly at random.
    pub fn choose_panel<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<&Panel, DomainError> {
        self.panels_for(difficulty)
            .choose(rng)
            .ok_or_else(|| DomainError::NoPanels(difficulty.to_string()))
    }

    /// Iterate `(difficulty, panel)` over every configured panel.
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, &Panel)> {
        Difficulty::ALL
            .into_iter()
            .flat_map(move |d| self.panels_for(d).iter().map(move |p| (d, p)))
    }

    pub fn builtin() -> Self {
        let mut tiers = HashMap::new();
        tiers.insert(
            Difficulty::Easy,
            vec![
                Panel::new(["supportive", "observer", "scenario"]),
                Panel::new(["chairperson", "supportive", "hr"]),
            ],
        );
        tiers.insert(
            Difficulty::Medium,
            vec![
                Panel::new(["chairperson", "technical", "hr"]),
                Panel::new(["chairperson", "ethics", "stress"]),
                Panel::new(["technical", "rational", "scenario"]),
            ],
        );
        tiers.insert(
            Difficulty::Hard,
            vec![
                Panel::new(["chairperson", "stress", "technical", "citizen"]),
                Panel::new(["stress", "ethics", "rational", "chairperson"]),
                Panel::new(["citizen", "stress", "technical", "observer"]),
            ],
        );
        Self { tiers }
    }
}
