//! Live requirement checklist for password forms.

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{RULES, Rule};
use crate::types::PasswordRequirements;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementStatus {
    pub rule: Rule,
    pub label: String,
    pub satisfied: bool,
}

fn label(rule: Rule, requirements: &PasswordRequirements) -> String {
    match rule {
        Rule::Length => format!("At least {} characters", requirements.min_length),
        Rule::Uppercase => "One uppercase letter".to_string(),
        Rule::Lowercase => "One lowercase letter".to_string(),
        Rule::Number => "One number".to_string(),
        Rule::Special => "One special character".to_string(),
    }
}

/// One entry per enabled rule, in rule order. Disabled rules are omitted.
pub fn requirement_checklist(
    password: &SecretString,
    requirements: &PasswordRequirements,
) -> Vec<RequirementStatus> {
    let pwd = password.expose_secret();
    RULES
        .iter()
        .map(|(rule, _)| *rule)
        .filter(|rule| rule.is_required(requirements))
        .map(|rule| {
            let satisfied = match rule.character_class() {
                Some(class) => class.is_present_in(pwd),
                None => pwd.chars().count() >= requirements.min_length,
            };
            RequirementStatus {
                rule,
                label: label(rule, requirements),
                satisfied,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_checklist_default_has_all_rules() {
        let list = requirement_checklist(&secret("abc1"), &PasswordRequirements::default());
        let rules: Vec<Rule> = list.iter().map(|s| s.rule).collect();
        assert_eq!(
            rules,
            vec![
                Rule::Length,
                Rule::Uppercase,
                Rule::Lowercase,
                Rule::Number,
                Rule::Special
            ]
        );
        let satisfied: Vec<bool> = list.iter().map(|s| s.satisfied).collect();
        assert_eq!(satisfied, vec![false, false, true, true, false]);
        assert_eq!(list[0].label, "At least 8 characters");
    }

    #[test]
    fn test_checklist_omits_disabled_rules() {
        let req = PasswordRequirements::default()
            .with_special(false)
            .with_uppercase(false);
        let list = requirement_checklist(&secret("password1"), &req);
        assert_eq!(list.len(), 3);
        assert!(list.iter().all(|s| s.satisfied));
    }

    #[test]
    fn test_checklist_agrees_with_validation() {
        let req = PasswordRequirements::default();
        for pwd in ["", "abc", "Abcdef1!", "NoSpecial123", "UPPER!lower"] {
            let all_met = requirement_checklist(&secret(pwd), &req)
                .iter()
                .all(|s| s.satisfied);
            assert_eq!(
                all_met,
                crate::validate_password(&secret(pwd), &req).is_valid,
                "mismatch for {:?}",
                pwd
            );
        }
    }
}
