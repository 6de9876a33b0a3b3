//! Submit-time validation: rules, confirmation match and blacklist.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::is_common_password;
use crate::evaluator::validate_password;
use crate::types::{ComprehensiveResult, PasswordRequirements};

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_COMMON: &str =
    "This password is too common. Please choose a more unique password";

/// Exact equality between a password and its confirmation.
pub fn passwords_match(password: &SecretString, confirmation: &SecretString) -> bool {
    password.expose_secret() == confirmation.expose_secret()
}

/// Runs every check a registration form needs before submitting.
///
/// Errors are ordered: rule errors, then the confirmation mismatch, then the
/// blacklist hit.
pub fn validate_password_comprehensive(
    password: &SecretString,
    confirmation: &SecretString,
    requirements: &PasswordRequirements,
) -> ComprehensiveResult {
    let mut errors = validate_password(password, requirements).errors;

    if !passwords_match(password, confirmation) {
        errors.push(PASSWORDS_DO_NOT_MATCH.to_string());
    }

    if is_common_password(password.expose_secret()) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Rejected common password");
        errors.push(PASSWORD_TOO_COMMON.to_string());
    }

    ComprehensiveResult {
        is_valid: errors.is_empty(),
        errors,
    }
}
