//! Tolerant decoding of structured model output.
//!
//! Models are asked to reply with a bare JSON object but routinely wrap it
//! in markdown fences or surround it with prose. Decoding runs in two
//! stages (fence stripping, then first balanced object extraction) and
//! falls back to a caller-supplied value on any failure, so parsing never
//! errors.

use crate::session::feedback::FeedbackReport;
use crate::session::turn::TurnOutput;
use serde::de::DeserializeOwned;

const FENCE: &str = "```";

/// Remove every markdown code fence marker (```` ```json ```` or ```` ``` ````)
/// together with the whitespace that follows it.
pub fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(FENCE) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + FENCE.len()..];
        if rest
            .get(..4)
            .is_some_and(|tag| tag.eq_ignore_ascii_case("json"))
        {
            rest = &rest[4..];
        }
        rest = rest.trim_start();
    }
    out.push_str(rest);
    out
}

/// Locate the first balanced `{...}` object in `text`.
///
/// Braces inside JSON string literals (including escaped quotes) are ignored.
/// Returns `None` when there is no opening brace or it is never closed.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Decode `raw` into `T`, returning `fallback` untouched when that fails.
pub fn parse_structured<T: DeserializeOwned>(raw: &str, fallback: T) -> T {
    let cleaned = strip_code_fences(raw);
    let cleaned = cleaned.trim();
    let candidate = extract_json_object(cleaned).unwrap_or(cleaned);

    match serde_json::from_str(candidate) {
        Ok(value) => value,
        Err(_) => fallback,
    }
}

/// Decode an interviewer turn, falling back to the raw text as speech.
pub fn parse_turn(raw: &str) -> TurnOutput {
    parse_structured(raw, TurnOutput::fallback(raw))
}

/// Decode a feedback report, falling back to the raw text as overall feedback.
pub fn parse_feedback(raw: &str) -> FeedbackReport {
    parse_structured(raw, FeedbackReport::fallback(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::turn::{Action, Expression};
    use serde::Deserialize;

    #[test]
    fn test_fenced_turn_is_unwrapped() {
        let raw = "```json\n{\"speech\":\"안녕하세요\",\"expression\":\"smile\",\"action\":\"none\"}\n```";
        let out = parse_turn(raw);
        assert_eq!(out.speech, "안녕하세요");
        assert_eq!(out.expression, Expression::Smile);
        assert_eq!(out.action, Action::None);
    }

    #[test]
    fn test_uppercase_fence_tag() {
        let out = parse_turn("```JSON\n{\"speech\":\"네\",\"action\":\"conclude\"}```");
        assert_eq!(out.action, Action::Conclude);
    }

    #[test]
    fn test_object_surrounded_by_prose() {
        let raw = "면접관 응답입니다: {\"speech\":\"좋습니다\",\"expression\":\"nod\",\"action\":\"followup\"} 이상.";
        let out = parse_turn(raw);
        assert_eq!(out.speech, "좋습니다");
        assert_eq!(out.expression, Expression::Nod);
        assert_eq!(out.action, Action::Followup);
    }

    #[test]
    fn test_prose_returns_fallback_unchanged() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Shape {
            speech: String,
        }
        let fallback = Shape {
            speech: "원래 값".to_string(),
        };
        let parsed = parse_structured(
            "그냥 말로 대답했습니다.",
            Shape {
                speech: "원래 값".to_string(),
            },
        );
        assert_eq!(parsed, fallback);
    }

    #[test]
    fn test_prose_turn_uses_raw_as_speech() {
        let out = parse_turn("자기소개 부탁드립니다.");
        assert_eq!(out, TurnOutput::fallback("자기소개 부탁드립니다."));
    }

    #[test]
    fn test_empty_raw_turn() {
        assert_eq!(parse_turn(""), TurnOutput::fallback(""));
    }

    #[test]
    fn test_malformed_object_falls_back() {
        let raw = "{\"speech\": \"끊긴";
        assert_eq!(parse_turn(raw).speech, raw);
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let text = r#"x {"speech":"괄호 } 와 \" 따옴표","action":"none"} y {"other":1}"#;
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"speech":"괄호 } 와 \" 따옴표","action":"none"}"#)
        );
    }

    #[test]
    fn test_nested_object() {
        assert_eq!(extract_json_object(r#"{"a":{"b":1}} tail"#), Some(r#"{"a":{"b":1}}"#));
        assert_eq!(extract_json_object("no braces"), None);
        assert_eq!(extract_json_object("{ open"), None);
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}\n");
        assert_eq!(strip_code_fences("plain"), "plain");
    }

    #[test]
    fn test_feedback_fallback_on_prose() {
        let report = parse_feedback("피드백을 생성할 수 없습니다");
        assert_eq!(report.overall_feedback, "피드백을 생성할 수 없습니다");
        assert_eq!(report.content_score, 0.0);
    }

    #[test]
    fn test_feedback_fenced() {
        let raw = "```json\n{\"overallFeedback\":\"양호\",\"strengths\":[\"a\"],\"improvements\":[\"b\"],\"contentScore\":0.8,\"logicScore\":0.6,\"clarityScore\":0.7,\"pressureScore\":0.5}\n```";
        let report = parse_feedback(raw);
        assert_eq!(report.overall_feedback, "양호");
        assert_eq!(report.improvements, vec!["b".to_string()]);
        assert_eq!(report.pressure_score, 0.5);
    }

    #[test]
    fn test_feedback_keeps_report_with_null_or_string_scores() {
        let raw = r#"{"overallFeedback":"논리적입니다.","strengths":["a","b","c"],"improvements":null,"contentScore":"0.8","logicScore":0.6,"clarityScore":null,"pressureScore":null}"#;
        let report = parse_feedback(raw);
        assert_eq!(report.overall_feedback, "논리적입니다.");
        assert_eq!(report.strengths.len(), 3);
        assert!(report.improvements.is_empty());
        assert_eq!(report.content_score, 0.8);
        assert_eq!(report.logic_score, 0.6);
        assert_eq!(report.clarity_score, 0.0);
        assert_eq!(report.pressure_score, 0.0);
    }

    #[test]
    fn test_feedback_list_given_as_single_string() {
        let raw = r#"{"overallFeedback":"보통","strengths":"두괄식 답변","contentScore":"n/a"}"#;
        let report = parse_feedback(raw);
        assert_eq!(report.strengths, vec!["두괄식 답변".to_string()]);
        assert_eq!(report.content_score, 0.0);
    }
}
