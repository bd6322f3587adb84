//! Commit message with the fixed attribution footer

use crate::error::{LaunchpadError, LaunchpadResult};

/// A validated commit message ready to hand to `git commit -m`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    /// Build a message from operator input, appending `footer` after a blank line.
    ///
    /// Leading/trailing whitespace on the subject is trimmed. An empty footer
    /// is omitted entirely.
    pub fn with_footer(subject: &str, footer: &str) -> LaunchpadResult<Self> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(LaunchpadError::EmptyCommitMessage);
        }

        let footer = footer.trim();
        if footer.is_empty() {
            return Ok(Self(subject.to_string()));
        }

        Ok(Self(format!("{}\n\n{}", subject, footer)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_is_separated_by_blank_line() {
        let msg = CommitMessage::with_footer("Fix login", "Deployed with launchpad").unwrap();
        assert_eq!(msg.as_str(), "Fix login\n\nDeployed with launchpad");
    }

    #[test]
    fn empty_footer_is_omitted() {
        let msg = CommitMessage::with_footer("  Fix login  ", "   ").unwrap();
        assert_eq!(msg.as_str(), "Fix login");
    }

    #[test]
    fn blank_subject_is_rejected() {
        let err = CommitMessage::with_footer(" \n ", "footer").unwrap_err();
        assert!(matches!(err, LaunchpadError::EmptyCommitMessage));
    }
}
