//! Console output formatting for interview turns and the feedback report

use colored::{ColoredString, Colorize};
use interview_domain::{
    Action, Expression, FeedbackReport, Persona, SessionReport, TurnOutput,
};

/// Render seconds as `m:ss` (minutes are not wrapped into hours).
pub fn format_clock(total_secs: u64) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Display grade of a score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    Success,
    Warn,
    Danger,
}

impl ScoreGrade {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.75 {
            ScoreGrade::Success
        } else if score >= 0.5 {
            ScoreGrade::Warn
        } else {
            ScoreGrade::Danger
        }
    }

    fn paint(&self, text: &str) -> ColoredString {
        match self {
            ScoreGrade::Success => text.green().bold(),
            ScoreGrade::Warn => text.yellow().bold(),
            ScoreGrade::Danger => text.red().bold(),
        }
    }
}

/// Scores are shown clamped to `[0, 1]`; out-of-range model output is kept
/// in the report itself.
fn display_score(score: f64) -> f64 {
    if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) }
}

fn score_bar(score: f64) -> String {
    const WIDTH: usize = 20;
    let filled = (display_score(score) * WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled))
}

fn expression_cue(expression: Expression) -> &'static str {
    match expression {
        Expression::Neutral => "",
        Expression::Smile => "(미소)",
        Expression::Suspicious => "(의심스러운 눈빛)",
        Expression::Pressure => "(압박하는 시선)",
        Expression::Nod => "(고개를 끄덕임)",
        Expression::Frown => "(미간을 찌푸림)",
        Expression::Bored => "(지루한 표정)",
        Expression::Note => "(메모 중)",
    }
}

/// Formats interview output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Session banner with the seated panel
    pub fn session_header(
        panel: &[&Persona],
        settings_line: &str,
        question_count: usize,
    ) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("압박면접 시뮬레이터"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "설정:".cyan().bold(), settings_line));
        output.push_str(&format!("{} {}개\n\n", "질문 수:".cyan().bold(), question_count));
        output.push_str(&format!("{}\n", "면접관 패널".cyan().bold()));
        for persona in panel {
            output.push_str(&format!(
                "  {} {} {}\n",
                persona.emoji,
                persona.name.bold(),
                format!("({})", persona.role).dimmed()
            ));
        }
        output.push_str(&format!(
            "\n{}\n",
            "답변을 입력하세요. /help 로 명령어를 확인할 수 있습니다.".dimmed()
        ));
        output
    }

    /// One interviewer utterance
    pub fn turn(speaker: Option<&Persona>, output: &TurnOutput) -> String {
        let label = match speaker {
            Some(p) => format!("{} {}", p.emoji, p.name),
            None => "면접관".to_string(),
        };
        let cue = expression_cue(output.expression);

        let mut line = format!("\n{}", label.yellow().bold());
        if !cue.is_empty() {
            line.push_str(&format!(" {}", cue.dimmed()));
        }
        line.push_str(&format!("\n  {}\n", output.speech));

        if output.action == Action::Interrupt {
            line.push_str(&format!("  {}\n", "[답변을 끊었습니다]".red()));
        }
        line
    }

    /// Bank question announced by the front end
    pub fn question(index: usize, total: usize, text: &str) -> String {
        format!(
            "\n{} {}",
            format!("[질문 {}/{}]", index, total).cyan().bold(),
            text
        )
    }

    /// Answer timing line, flagged when over the limit
    pub fn answer_timing(elapsed_secs: f64, limit_secs: Option<u32>, fillers: u32) -> String {
        let clock = format_clock(elapsed_secs.max(0.0) as u64);
        let fillers_text = format!("반복어 {}회", fillers);
        match limit_secs {
            Some(limit) if elapsed_secs > f64::from(limit) => format!(
                "  {} {} / {} {}",
                "⏱".red(),
                clock.red().bold(),
                format_clock(u64::from(limit)),
                fillers_text.dimmed()
            ),
            Some(limit) => format!(
                "  ⏱ {} / {} {}",
                clock,
                format_clock(u64::from(limit)),
                fillers_text.dimmed()
            ),
            None => format!("  ⏱ {} {}", clock, fillers_text.dimmed()),
        }
    }

    /// Full feedback report
    pub fn feedback(report: &FeedbackReport, session: &SessionReport) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&Self::header("면접 피드백 리포트"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}   {} {}개   {} {}   {} {}회\n",
            "난이도".cyan().bold(),
            session.difficulty.label(),
            "답변".cyan().bold(),
            session.answers.len(),
            "총 답변시간".cyan().bold(),
            format_clock(session.total_duration_secs().max(0.0) as u64),
            "반복어".cyan().bold(),
            session.total_fillers()
        ));

        output.push_str(&Self::section_header("종합 의견"));
        output.push_str(&format!("{}\n", report.overall_feedback));

        output.push_str(&Self::section_header("점수"));
        for (label, score) in report.scores() {
            let grade = ScoreGrade::from_score(score);
            output.push_str(&format!(
                "  {:<8} {} {}\n",
                label,
                score_bar(score),
                grade.paint(&format!("{:>3.0}", display_score(score) * 100.0))
            ));
        }

        if !report.strengths.is_empty() {
            output.push_str(&Self::section_header("강점"));
            for item in &report.strengths {
                output.push_str(&format!("  {} {}\n", "+".green().bold(), item));
            }
        }

        if !report.improvements.is_empty() {
            output.push_str(&Self::section_header("개선점"));
            for item in &report.improvements {
                output.push_str(&format!("  {} {}\n", "-".yellow().bold(), item));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_domain::{AnswerRecord, Difficulty, VoiceTone};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(90), "1:30");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn test_score_grade_thresholds() {
        assert_eq!(ScoreGrade::from_score(1.0), ScoreGrade::Success);
        assert_eq!(ScoreGrade::from_score(0.75), ScoreGrade::Success);
        assert_eq!(ScoreGrade::from_score(0.6), ScoreGrade::Warn);
        assert_eq!(ScoreGrade::from_score(0.5), ScoreGrade::Warn);
        assert_eq!(ScoreGrade::from_score(0.3), ScoreGrade::Danger);
        assert_eq!(ScoreGrade::from_score(0.0), ScoreGrade::Danger);
    }

    #[test]
    fn test_score_bar_clamps() {
        assert_eq!(score_bar(1.7).chars().filter(|c| *c == '█').count(), 20);
        assert_eq!(score_bar(-2.0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(score_bar(0.5).chars().filter(|c| *c == '█').count(), 10);
    }

    #[test]
    fn test_turn_rendering() {
        plain();
        let persona = Persona::new("stress", "심리 압박", "스트레스 테스트", VoiceTone::Aggressive, "")
            .with_emoji("😤");
        let out = TurnOutput::new("그건 변명 아닌가요?", Expression::Frown, Action::Interrupt);
        let text = ConsoleFormatter::turn(Some(&persona), &out);
        assert!(text.contains("😤 심리 압박"));
        assert!(text.contains("(미간을 찌푸림)"));
        assert!(text.contains("그건 변명 아닌가요?"));
        assert!(text.contains("[답변을 끊었습니다]"));
    }

    #[test]
    fn test_answer_timing_marks_overrun() {
        plain();
        assert_eq!(
            ConsoleFormatter::answer_timing(65.4, Some(90), 2),
            "  ⏱ 1:05 / 1:30 반복어 2회"
        );
        assert!(ConsoleFormatter::answer_timing(95.0, Some(90), 0).contains("1:35"));
        assert_eq!(
            ConsoleFormatter::answer_timing(5.0, None, 0),
            "  ⏱ 0:05 반복어 0회"
        );
    }

    #[test]
    fn test_feedback_rendering() {
        plain();
        let mut session = SessionReport::new(Difficulty::Hard);
        session.push(AnswerRecord::new("q", Some("a".into()), 3, 70.0));
        let report = FeedbackReport {
            overall_feedback: "근거가 부족합니다.".to_string(),
            strengths: vec!["두괄식".to_string()],
            improvements: vec![],
            content_score: 0.8,
            logic_score: 0.4,
            clarity_score: 0.6,
            pressure_score: 1.4,
        };
        let text = ConsoleFormatter::feedback(&report, &session);
        assert!(text.contains("근거가 부족합니다."));
        assert!(text.contains("상(어려움)"));
        assert!(text.contains("1:10"));
        assert!(text.contains("+ 두괄식"));
        assert!(!text.contains("개선점"));
        assert!(text.contains("100"));
    }
}
