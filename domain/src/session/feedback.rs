//! Session report (feedback input) and feedback report (feedback output)

use crate::analysis::count_filler_words;
use crate::core::difficulty::Difficulty;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Overall feedback used when the model reply could not be decoded.
pub const FALLBACK_FEEDBACK: &str = "AI 피드백 생성에 실패했습니다.";

/// One answered (or skipped) question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question: String,
    pub answer: Option<String>,
    pub filler_count: u32,
    pub duration_secs: f64,
}

impl AnswerRecord {
    pub fn new(
        question: impl Into<String>,
        answer: Option<String>,
        filler_count: u32,
        duration_secs: f64,
    ) -> Self {
        Self {
            question: question.into(),
            answer,
            filler_count,
            duration_secs,
        }
    }

    /// Build a record from a raw transcript, counting filler words.
    ///
    /// A blank transcript is recorded as no answer.
    pub fn from_transcript(question: impl Into<String>, transcript: &str, duration_secs: f64) -> Self {
        let trimmed = transcript.trim();
        let answer = (!trimmed.is_empty()).then(|| trimmed.to_string());
        Self::new(question, answer, count_filler_words(trimmed), duration_secs)
    }
}

/// Everything recorded during a session, handed to feedback generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub difficulty: Difficulty,
    pub answers: Vec<AnswerRecord>,
}

impl SessionReport {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            answers: Vec::new(),
        }
    }

    pub fn push(&mut self, record: AnswerRecord) {
        self.answers.push(record);
    }

    pub fn total_fillers(&self) -> u32 {
        self.answers.iter().map(|a| a.filler_count).sum()
    }

    pub fn total_duration_secs(&self) -> f64 {
        self.answers.iter().map(|a| a.duration_secs).sum()
    }
}

/// Model-written evaluation of a whole session.
///
/// Scores are carried exactly as the model returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReport {
    pub overall_feedback: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub improvements: Vec<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub content_score: f64,
    #[serde(default, deserialize_with = "lenient_score")]
    pub logic_score: f64,
    #[serde(default, deserialize_with = "lenient_score")]
    pub clarity_score: f64,
    #[serde(default, deserialize_with = "lenient_score")]
    pub pressure_score: f64,
}

/// A number or numeric string; anything else reads as `0.0`.
fn lenient_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

/// A list of strings; `null` is empty and a lone string is one item.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}

impl FeedbackReport {
    /// Report used when the raw model text could not be decoded.
    pub fn fallback(raw: &str) -> Self {
        let overall = if raw.is_empty() { FALLBACK_FEEDBACK } else { raw };
        Self {
            overall_feedback: overall.to_string(),
            strengths: Vec::new(),
            improvements: Vec::new(),
            content_score: 0.0,
            logic_score: 0.0,
            clarity_score: 0.0,
            pressure_score: 0.0,
        }
    }

    /// Labelled scores in display order.
    pub fn scores(&self) -> [(&'static str, f64); 4] {
        [
            ("내용", self.content_score),
            ("논리", self.logic_score),
            ("전달력", self.clarity_score),
            ("압박 대응", self.pressure_score),
        ]
    }

    pub fn average_score(&self) -> f64 {
        self.scores().iter().map(|(_, s)| s).sum::<f64>() / 4.0
    }
}
