//! Line-oriented transcript buffer for one session.

use std::fmt;

use crate::domain::foundation::{SenderId, Timestamp};

/// Width of the header separator line.
pub const SEPARATOR_WIDTH: usize = 50;

/// Who produced a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
    System,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::User => "User",
            Role::Bot => "Bot",
            Role::System => "System",
        };
        write!(f, "{}", s)
    }
}

/// Append-only transcript, written out in full on every save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Starts a transcript with its three header lines.
    pub fn start(sender: &SenderId, started: &Timestamp) -> Self {
        Self {
            lines: vec![
                format!("Chat History for User ID: {}", sender),
                format!("Started: {}", started.to_transcript_string()),
                "=".repeat(SEPARATOR_WIDTH),
            ],
        }
    }

    /// Appends `[ts] Role: text`.
    pub fn append(&mut self, at: &Timestamp, role: Role, text: &str) {
        self.lines
            .push(format!("[{}] {}: {}", at.to_transcript_string(), role, text));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Full file contents, one line per entry with a trailing newline each.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> SenderId {
        SenderId::new("student-42").unwrap()
    }

    #[test]
    fn header_is_written_at_start() {
        let transcript = Transcript::start(&sender(), &Timestamp::now());
        let lines = transcript.lines();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Chat History for User ID: student-42");
        assert!(lines[1].starts_with("Started: "));
        assert_eq!(lines[2], "=".repeat(50));
    }

    #[test]
    fn lines_carry_timestamp_and_role() {
        let at = Timestamp::now();
        let mut transcript = Transcript::start(&sender(), &at);
        transcript.append(&at, Role::User, "hello");
        transcript.append(&at, Role::System, "Message limit reached");

        let expected = format!("[{}] User: hello", at.to_transcript_string());
        assert_eq!(transcript.lines()[3], expected);
        assert!(transcript.lines()[4].ends_with("] System: Message limit reached"));
    }

    #[test]
    fn render_terminates_every_line() {
        let at = Timestamp::now();
        let mut transcript = Transcript::start(&sender(), &at);
        transcript.append(&at, Role::Bot, "hi");

        let rendered = transcript.render();
        assert!(rendered.ends_with("Bot: hi\n"));
        assert_eq!(rendered.lines().count(), transcript.len());
    }
}
