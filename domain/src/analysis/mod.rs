//! Heuristics over a candidate's transcribed answer.
//!
//! These run locally on the transcript and feed the session report; no
//! model call is involved.

use serde::{Deserialize, Serialize};

/// Hesitation words counted in every answer.
pub const FILLER_WORDS: [&str; 9] = ["음", "어", "그", "약간", "뭐랄까", "사실", "그냥", "좀", "이제"];

const EVIDENCE_MARKERS: [&str; 7] = ["왜냐하면", "이유는", "근거", "데이터", "통계", "사례", "경험"];
const EXAMPLE_MARKERS: [&str; 5] = ["예를 들면", "예를 들어", "예컨대", "실제로", "당시"];
const SENTENCE_TERMINATORS: [char; 4] = ['.', '!', '?', '。'];

/// Minimum length, in characters, of an opening sentence that states a conclusion.
const CONCLUSION_MIN_CHARS: usize = 8;

/// Count filler-word occurrences in `text`.
///
/// Each word's non-overlapping substring matches are summed, so "그냥" also
/// counts once for "그".
pub fn count_filler_words(text: &str) -> u32 {
    FILLER_WORDS
        .iter()
        .map(|w| text.matches(w).count() as u32)
        .sum()
}

/// Rough structure of an answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerStructure {
    /// The opening sentence is substantial enough to carry a conclusion.
    pub has_conclusion: bool,
    pub has_evidence: bool,
    pub has_example: bool,
}

impl AnswerStructure {
    /// Number of structural elements present (0..=3).
    pub fn score(&self) -> u8 {
        [self.has_conclusion, self.has_evidence, self.has_example]
            .iter()
            .filter(|b| **b)
            .count() as u8
    }
}

pub fn analyze_answer_structure(text: &str) -> AnswerStructure {
    if text.is_empty() {
        return AnswerStructure::default();
    }

    let first_sentence = text
        .split(SENTENCE_TERMINATORS)
        .next()
        .unwrap_or_default();

    AnswerStructure {
        has_conclusion: first_sentence.chars().count() > CONCLUSION_MIN_CHARS,
        has_evidence: EVIDENCE_MARKERS.iter().any(|m| text.contains(m)),
        has_example: EXAMPLE_MARKERS.iter().any(|m| text.contains(m)),
    }
}
