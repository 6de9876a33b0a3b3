//! Presentation helpers mapping a strength category to UI accents and labels.

use std::fmt;

use crate::types::PasswordStrength;

/// Semantic accent a UI uses to tint the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthColor {
    Danger,
    Warning,
    Info,
    Success,
}

impl StrengthColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthColor::Danger => "danger",
            StrengthColor::Warning => "warning",
            StrengthColor::Info => "info",
            StrengthColor::Success => "success",
        }
    }
}

impl fmt::Display for StrengthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn get_strength_color(strength: PasswordStrength) -> StrengthColor {
    match strength {
        PasswordStrength::Weak => StrengthColor::Danger,
        PasswordStrength::Medium => StrengthColor::Warning,
        PasswordStrength::Strong => StrengthColor::Info,
        PasswordStrength::VeryStrong => StrengthColor::Success,
    }
}

pub fn get_strength_label(strength: PasswordStrength) -> &'static str {
    match strength {
        PasswordStrength::Weak => "🔴 Weak",
        PasswordStrength::Medium => "🟡 Medium",
        PasswordStrength::Strong => "🔵 Strong",
        PasswordStrength::VeryStrong => "🟢 Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PasswordStrength; 4] = [
        PasswordStrength::Weak,
        PasswordStrength::Medium,
        PasswordStrength::Strong,
        PasswordStrength::VeryStrong,
    ];

    #[test]
    fn test_colors() {
        assert_eq!(get_strength_color(PasswordStrength::Weak).as_str(), "danger");
        assert_eq!(get_strength_color(PasswordStrength::Medium).as_str(), "warning");
        assert_eq!(get_strength_color(PasswordStrength::Strong).as_str(), "info");
        assert_eq!(get_strength_color(PasswordStrength::VeryStrong).to_string(), "success");
    }

    #[test]
    fn test_labels_non_empty_and_distinct() {
        let labels: Vec<&str> = ALL.iter().map(|s| get_strength_label(*s)).collect();
        assert!(labels.iter().all(|l| !l.is_empty()));
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(get_strength_label(PasswordStrength::VeryStrong).contains("Very Strong"));
    }
}
