//! Improvement suggestions rendered next to the strength meter.

use secrecy::{ExposeSecret, SecretString};

use crate::criteria::Criterion;

/// Prompt returned for empty input.
pub const EMPTY_PROMPT: &str = "Enter a password";

/// Acknowledgment returned when every criterion is met. The leading marker
/// lets callers render it in a success style without string matching on the
/// message body.
pub const STRONG_ACK: &str = "\u{2713} Strong password";

/// Returns one suggestion per unmet criterion, in the fixed criterion order.
///
/// Degenerate cases collapse to a single message: [`EMPTY_PROMPT`] for empty
/// input, [`STRONG_ACK`] when nothing is missing. Every call re-evaluates the
/// criteria from scratch; there is no shared state with the scorer.
pub fn feedback(password: &SecretString) -> Vec<String> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return vec![EMPTY_PROMPT.to_string()];
    }

    let suggestions: Vec<String> = Criterion::ALL
        .iter()
        .filter(|c| !c.is_met(pwd))
        .map(|c| c.suggestion().to_string())
        .collect();

    if suggestions.is_empty() {
        vec![STRONG_ACK.to_string()]
    } else {
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_feedback_empty_input() {
        assert_eq!(feedback(&pwd("")), vec![EMPTY_PROMPT.to_string()]);
    }

    #[test]
    fn test_feedback_all_criteria_met() {
        let messages = feedback(&pwd("Abcdefg1!"));
        assert_eq!(messages, vec![STRONG_ACK.to_string()]);
        assert!(messages[0].starts_with('\u{2713}'));
    }

    #[test]
    fn test_feedback_one_message_per_unmet_criterion() {
        // short, digits only: misses length, uppercase, lowercase, special
        let messages = feedback(&pwd("1234"));
        assert_eq!(
            messages,
            vec![
                "Use at least 8 characters".to_string(),
                "Add an uppercase letter".to_string(),
                "Add a lowercase letter".to_string(),
                "Add a special character".to_string(),
            ]
        );
    }

    #[test]
    fn test_feedback_fixed_order() {
        // misses special only
        assert_eq!(
            feedback(&pwd("Abcdefg1")),
            vec!["Add a special character".to_string()]
        );
        // misses uppercase and digit, reported in criterion order
        assert_eq!(
            feedback(&pwd("abcdefg!")),
            vec![
                "Add an uppercase letter".to_string(),
                "Add a number".to_string(),
            ]
        );
    }

    #[test]
    fn test_feedback_idempotent() {
        let candidate = pwd("abc");
        assert_eq!(feedback(&candidate), feedback(&candidate));
    }
}
