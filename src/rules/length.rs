//! Length rule - checks password minimum length and awards the long-password bonus.

use secrecy::{ExposeSecret, SecretString};

use super::{RULE_POINTS, RuleOutcome};
use crate::types::PasswordRequirements;

const BONUS_THRESHOLDS: [usize; 2] = [12, 16];
const BONUS_POINTS: u32 = 10;

/// Checks if the password meets the configured minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_rule(password: &SecretString, requirements: &PasswordRequirements) -> RuleOutcome {
    let len = password.expose_secret().chars().count();
    if len < requirements.min_length {
        return RuleOutcome::failed(format!(
            "Password must be at least {} characters long",
            requirements.min_length
        ));
    }
    RuleOutcome::passed(RULE_POINTS)
}

/// Extra points for long passwords: +10 at 12 characters, a further +10 at 16.
pub fn length_bonus(password: &SecretString) -> u32 {
    let len = password.expose_secret().chars().count();
    BONUS_THRESHOLDS
        .iter()
        .filter(|&&threshold| len >= threshold)
        .count() as u32
        * BONUS_POINTS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_rule_too_short() {
        let result = length_rule(&secret("Short1!"), &PasswordRequirements::default());
        assert_eq!(
            result,
            RuleOutcome::failed("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_length_rule_exactly_minimum() {
        let result = length_rule(&secret("12345678"), &PasswordRequirements::default());
        assert_eq!(result, RuleOutcome::passed(20));
    }

    #[test]
    fn test_length_rule_custom_minimum() {
        let req = PasswordRequirements::default().with_min_length(10);
        let result = length_rule(&secret("123456789"), &req);
        assert_eq!(
            result.error.as_deref(),
            Some("Password must be at least 10 characters long")
        );
    }

    #[test]
    fn test_length_rule_zero_minimum_always_passes() {
        let req = PasswordRequirements::default().with_min_length(0);
        assert_eq!(length_rule(&secret(""), &req), RuleOutcome::passed(20));
    }

    #[test]
    fn test_length_rule_counts_characters() {
        // 8 characters, 16 bytes
        let result = length_rule(&secret("éééééééé"), &PasswordRequirements::default());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_length_bonus() {
        assert_eq!(length_bonus(&secret("abcdefghijk")), 0);
        assert_eq!(length_bonus(&secret("abcdefghijkl")), 10);
        assert_eq!(length_bonus(&secret("abcdefghijklmno")), 10);
        assert_eq!(length_bonus(&secret("abcdefghijklmnop")), 20);
        assert_eq!(length_bonus(&secret(&"a".repeat(64))), 20);
    }
}
