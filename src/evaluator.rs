//! Password evaluator - runs the rule table and scores the result.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::{RULES, length_bonus};
use crate::types::{PasswordRequirements, PasswordScore, PasswordStrength, ValidationResult};

/// Debounce applied by [`validate_password_tx`] before evaluating.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Validates a password against `requirements` and scores it.
///
/// Each satisfied rule adds 20 points, long passwords get up to 20 bonus
/// points, and the total is capped at 100. Errors are reported in rule order.
/// Never fails: an empty password simply scores 0.
pub fn validate_password(
    password: &SecretString,
    requirements: &PasswordRequirements,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut points = 0u32;

    for (_rule, rule_fn) in RULES {
        let outcome = rule_fn(password, requirements);
        if let Some(reason) = outcome.error {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password rule failed: {}", _rule);
            errors.push(reason);
        }
        points += outcome.points;
    }

    points += length_bonus(password);

    let score = PasswordScore::new(points);
    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        strength: PasswordStrength::from(score),
        score,
    }
}

/// Debounced validation for keystroke-driven callers.
///
/// Waits [`DEBOUNCE`], then validates and sends the result on `tx`. If `token`
/// is cancelled first (a newer keystroke superseded this one) nothing is sent.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    password: &SecretString,
    requirements: &PasswordRequirements,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationResult>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password validation superseded before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let result = validate_password(password, requirements);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", _e);
    }
}
