//! Slash commands accepted at the answer prompt

/// A line typed at the answer prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Plain text answer
    Answer(String),
    /// Skip the current question without answering
    Skip,
    /// Stop asking questions and go straight to feedback
    End,
    /// Show the command list
    Help,
    /// Leave without feedback
    Quit,
    /// Slash command that is not recognized
    Unknown(String),
}

impl ReplCommand {
    /// Classify one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if !line.starts_with('/') {
            return Some(ReplCommand::Answer(line.to_string()));
        }

        let name = line.split_whitespace().next().unwrap_or(line);
        let command = match name.to_lowercase().as_str() {
            "/skip" | "/s" => ReplCommand::Skip,
            "/end" | "/e" => ReplCommand::End,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(name.to_string()),
        };
        Some(command)
    }

    pub fn help_text() -> &'static str {
        "명령어:\n\
         \x20 /skip   이 질문을 건너뜁니다\n\
         \x20 /end    면접을 마치고 피드백을 받습니다\n\
         \x20 /help   이 도움말을 표시합니다\n\
         \x20 /quit   피드백 없이 종료합니다"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer_is_trimmed() {
        assert_eq!(
            ReplCommand::parse("  결론부터 말씀드리면  "),
            Some(ReplCommand::Answer("결론부터 말씀드리면".to_string()))
        );
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(ReplCommand::parse("   "), None);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/skip"), Some(ReplCommand::Skip));
        assert_eq!(ReplCommand::parse("/END"), Some(ReplCommand::End));
        assert_eq!(ReplCommand::parse("/help"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("/quit now"), Some(ReplCommand::Quit));
        assert_eq!(
            ReplCommand::parse("/pause"),
            Some(ReplCommand::Unknown("/pause".to_string()))
        );
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = ReplCommand::help_text();
        for cmd in ["/skip", "/end", "/help", "/quit"] {
            assert!(help.contains(cmd));
        }
        assert!(help.lines().skip(1).all(|l| l.starts_with("  /")));
    }
}
