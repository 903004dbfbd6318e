use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

static EMAIL_SHAPE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackMessage {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl FeedbackMessage {
    /// Same shape check the feedback form applies before submitting.
    pub fn has_valid_email(&self) -> bool {
        let re = EMAIL_SHAPE.get_or_init(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern")
        });
        re.is_match(&self.email)
    }

    pub fn has_message(&self) -> bool {
        !self.message.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(email: &str, message: &str) -> FeedbackMessage {
        FeedbackMessage {
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn email_shape() {
        assert!(msg("a@b.com", "hi").has_valid_email());
        assert!(!msg("a@b", "hi").has_valid_email());
        assert!(!msg("a b@c.com", "hi").has_valid_email());
        assert!(!msg("", "hi").has_valid_email());
    }

    #[test]
    fn blank_message() {
        assert!(!msg("a@b.com", "   ").has_message());
        assert!(msg("a@b.com", "hello").has_message());
    }
}
