//! Character class rules - uppercase, lowercase, numbers, special characters.

use secrecy::{ExposeSecret, SecretString};

use super::{RULE_POINTS, RuleOutcome};
use crate::types::PasswordRequirements;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl CharacterClass {
    /// All classes, in the order the generator seeds them.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Number,
        CharacterClass::Special,
    ];

    /// Every character belonging to this class.
    pub fn alphabet(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Number => NUMBERS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Number => c.is_ascii_digit(),
            CharacterClass::Special => SPECIAL.contains(c),
        }
    }

    pub fn is_present_in(&self, password: &str) -> bool {
        password.chars().any(|c| self.contains(c))
    }

    fn missing_message(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Password must contain at least one uppercase letter",
            CharacterClass::Lowercase => "Password must contain at least one lowercase letter",
            CharacterClass::Number => "Password must contain at least one number",
            CharacterClass::Special => "Password must contain at least one special character",
        }
    }
}

/// Fails only when the class is required and absent. Points follow presence,
/// so an optional class that shows up still scores.
fn class_rule(password: &SecretString, class: CharacterClass, required: bool) -> RuleOutcome {
    if class.is_present_in(password.expose_secret()) {
        RuleOutcome::passed(RULE_POINTS)
    } else if required {
        RuleOutcome::failed(class.missing_message())
    } else {
        RuleOutcome::default()
    }
}

pub fn uppercase_rule(password: &SecretString, requirements: &PasswordRequirements) -> RuleOutcome {
    class_rule(password, CharacterClass::Uppercase, requirements.require_uppercase)
}

pub fn lowercase_rule(password: &SecretString, requirements: &PasswordRequirements) -> RuleOutcome {
    class_rule(password, CharacterClass::Lowercase, requirements.require_lowercase)
}

pub fn number_rule(password: &SecretString, requirements: &PasswordRequirements) -> RuleOutcome {
    class_rule(password, CharacterClass::Number, requirements.require_number)
}

pub fn special_rule(password: &SecretString, requirements: &PasswordRequirements) -> RuleOutcome {
    class_rule(password, CharacterClass::Special, requirements.require_special)
}
