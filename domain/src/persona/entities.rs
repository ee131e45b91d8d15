//! Persona entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Voice/tone category of an interviewer.
///
/// Drives the speaking rate and pitch a text-to-speech collaborator
/// should use for the persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceTone {
    Authority,
    Aggressive,
    Calm,
    #[default]
    Neutral,
}

impl VoiceTone {
    /// Relative speaking rate (1.0 = normal).
    pub fn speech_rate(&self) -> f32 {
        match self {
            VoiceTone::Authority => 0.90,
            VoiceTone::Aggressive => 1.05,
            VoiceTone::Calm => 0.85,
            VoiceTone::Neutral => 0.95,
        }
    }

    /// Relative pitch (1.0 = normal).
    pub fn pitch(&self) -> f32 {
        match self {
            VoiceTone::Authority => 0.85,
            VoiceTone::Aggressive => 1.10,
            VoiceTone::Calm => 0.90,
            VoiceTone::Neutral => 1.00,
        }
    }
}

impl fmt::Display for VoiceTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VoiceTone::Authority => "authority",
            VoiceTone::Aggressive => "aggressive",
            VoiceTone::Calm => "calm",
            VoiceTone::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// An interviewer persona (Entity)
///
/// Identity plus a behavioral script that is pasted into the system prompt
/// whenever this persona is the speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub role: String,
    pub emoji: String,
    pub voice: VoiceTone,
    pub script: String,
}

impl Persona {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        voice: VoiceTone,
        script: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            emoji: String::new(),
            voice,
            script: script.into(),
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }
}
