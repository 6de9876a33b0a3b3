//! Password composition rules
//!
//! Each rule checks one requirement and reports the points it contributes
//! to the score.

mod character_class;
mod length;

use std::fmt;

use secrecy::SecretString;

use crate::types::PasswordRequirements;

pub use character_class::{
    CharacterClass, lowercase_rule, number_rule, special_rule, uppercase_rule,
};
pub use length::{length_bonus, length_rule};

/// Points awarded by each satisfied rule.
pub const RULE_POINTS: u32 = 20;

/// Result of evaluating a single rule.
/// - `error: Some(reason)` - rule failed with reason
/// - `points` - contribution to the score, independent of `error`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleOutcome {
    pub error: Option<String>,
    pub points: u32,
}

impl RuleOutcome {
    pub fn passed(points: u32) -> Self {
        Self { error: None, points }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            points: 0,
        }
    }
}

pub type RuleFn = fn(&SecretString, &PasswordRequirements) -> RuleOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
            Rule::Number => "number",
            Rule::Special => "special",
        }
    }

    /// Whether `requirements` enables this rule.
    pub fn is_required(&self, requirements: &PasswordRequirements) -> bool {
        match self {
            Rule::Length => requirements.min_length > 0,
            Rule::Uppercase => requirements.require_uppercase,
            Rule::Lowercase => requirements.require_lowercase,
            Rule::Number => requirements.require_number,
            Rule::Special => requirements.require_special,
        }
    }

    pub fn character_class(&self) -> Option<CharacterClass> {
        match self {
            Rule::Length => None,
            Rule::Uppercase => Some(CharacterClass::Uppercase),
            Rule::Lowercase => Some(CharacterClass::Lowercase),
            Rule::Number => Some(CharacterClass::Number),
            Rule::Special => Some(CharacterClass::Special),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rules in evaluation order. Error messages follow this order.
pub const RULES: [(Rule, RuleFn); 5] = [
    (Rule::Length, length_rule),
    (Rule::Uppercase, uppercase_rule),
    (Rule::Lowercase, lowercase_rule),
    (Rule::Number, number_rule),
    (Rule::Special, special_rule),
];
