//! Value types shared by the evaluator, validator and presentation helpers.

use std::fmt;

/// Minimum length applied when the caller does not override it.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Which composition rules a password must satisfy.
///
/// Every field has a default, so callers override only what they need:
///
/// ```rust
/// use pwd_policy::PasswordRequirements;
///
/// let relaxed = PasswordRequirements {
///     require_special: false,
///     ..Default::default()
/// };
/// assert_eq!(relaxed.min_length, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordRequirements {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_number: bool,
    pub require_special: bool,
}

impl Default for PasswordRequirements {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_number: true,
            require_special: true,
        }
    }
}

impl PasswordRequirements {
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_uppercase(mut self, required: bool) -> Self {
        self.require_uppercase = required;
        self
    }

    pub fn with_lowercase(mut self, required: bool) -> Self {
        self.require_lowercase = required;
        self
    }

    pub fn with_number(mut self, required: bool) -> Self {
        self.require_number = required;
        self
    }

    pub fn with_special(mut self, required: bool) -> Self {
        self.require_special = required;
        self
    }
}

/// Password score in the range `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 100;

    /// Builds a score from raw accumulated points, capping at 100.
    pub fn new(points: u32) -> Self {
        Self(points.min(Self::MAX as u32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse strength bucket derived from a [`PasswordScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl From<PasswordScore> for PasswordStrength {
    fn from(score: PasswordScore) -> Self {
        match score.value() {
            0..40 => PasswordStrength::Weak,
            40..60 => PasswordStrength::Medium,
            60..80 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }
}

impl PasswordStrength {
    /// Kebab-case identifier (`weak`, `medium`, `strong`, `very-strong`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
            PasswordStrength::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`validate_password`](crate::validate_password).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// `true` iff `errors` is empty.
    pub is_valid: bool,
    /// One message per failed rule, in rule order.
    pub errors: Vec<String>,
    pub strength: PasswordStrength,
    pub score: PasswordScore,
}

/// Outcome of [`validate_password_comprehensive`](crate::validate_password_comprehensive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComprehensiveResult {
    pub is_valid: bool,
    /// Rule errors first, then the confirmation mismatch, then the blacklist hit.
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_default() {
        let req = PasswordRequirements::default();
        assert_eq!(req.min_length, 8);
        assert!(req.require_uppercase);
        assert!(req.require_lowercase);
        assert!(req.require_number);
        assert!(req.require_special);
    }

    #[test]
    fn test_requirements_partial_override_keeps_defaults() {
        let req = PasswordRequirements::default()
            .with_min_length(12)
            .with_special(false);
        assert_eq!(req.min_length, 12);
        assert!(!req.require_special);
        assert!(req.require_uppercase);
        assert!(req.require_number);
    }

    #[test]
    fn test_score_clamped_to_100() {
        assert_eq!(PasswordScore::new(120).value(), 100);
        assert_eq!(PasswordScore::new(100).value(), 100);
        assert_eq!(PasswordScore::new(0).value(), 0);
    }

    #[test]
    fn test_strength_thresholds() {
        let cases = [
            (0, PasswordStrength::Weak),
            (39, PasswordStrength::Weak),
            (40, PasswordStrength::Medium),
            (59, PasswordStrength::Medium),
            (60, PasswordStrength::Strong),
            (79, PasswordStrength::Strong),
            (80, PasswordStrength::VeryStrong),
            (100, PasswordStrength::VeryStrong),
        ];
        for (points, expected) in cases {
            assert_eq!(
                PasswordStrength::from(PasswordScore::new(points)),
                expected,
                "score {}",
                points
            );
        }
    }

    #[test]
    fn test_strength_identifiers() {
        assert_eq!(PasswordStrength::VeryStrong.to_string(), "very-strong");
        assert_eq!(PasswordStrength::Weak.as_str(), "weak");
    }
}
