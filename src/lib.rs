//! Password policy library
//!
//! This library validates passwords against configurable composition rules,
//! scores their strength, rejects common passwords and generates random
//! passwords that satisfy every rule.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Path to an optional extended blacklist file
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{
//!     PasswordRequirements, get_strength_label, validate_password,
//!     validate_password_comprehensive,
//! };
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let confirmation = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! // On every keystroke
//! let result = validate_password(&password, &PasswordRequirements::default());
//! println!("Score: {}", result.score);
//! println!("Strength: {}", get_strength_label(result.strength));
//!
//! // On submit
//! let submit = validate_password_comprehensive(
//!     &password,
//!     &confirmation,
//!     &PasswordRequirements::default(),
//! );
//! assert!(submit.is_valid);
//! ```

mod blacklist;
mod checklist;
mod comprehensive;
mod display;
mod evaluator;
mod generator;
mod rules;
mod types;

// Public API
pub use blacklist::{
    BLACKLIST_PATH_ENV, BlacklistError, COMMON_PASSWORDS, extended_blacklist_len,
    get_blacklist_path, init_blacklist, init_blacklist_from_path, is_common_password,
};
pub use checklist::{RequirementStatus, requirement_checklist};
pub use comprehensive::{
    PASSWORD_TOO_COMMON, PASSWORDS_DO_NOT_MATCH, passwords_match, validate_password_comprehensive,
};
pub use display::{StrengthColor, get_strength_color, get_strength_label};
pub use evaluator::validate_password;
pub use generator::{
    DEFAULT_GENERATED_LENGTH, GeneratorError, MIN_GENERATED_LENGTH, generate_secure_password,
    generate_secure_password_with_rng,
};
pub use rules::{CharacterClass, Rule};
pub use types::{
    ComprehensiveResult, DEFAULT_MIN_LENGTH, PasswordRequirements, PasswordScore,
    PasswordStrength, ValidationResult,
};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, validate_password_tx};
