//! Random password generation.
//!
//! Generated passwords always contain at least one character of every class
//! checked by the rules, so they pass the default requirements.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use secrecy::SecretString;
use thiserror::Error;

use crate::rules::CharacterClass;

pub const DEFAULT_GENERATED_LENGTH: usize = 12;

/// Shortest length that fits one character from each class.
pub const MIN_GENERATED_LENGTH: usize = CharacterClass::ALL.len();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Requested length {requested} is below the minimum of {minimum}")]
    LengthTooShort { requested: usize, minimum: usize },
}

/// Generates a password of `length` characters using the thread-local CSPRNG.
///
/// # Errors
///
/// Returns [`GeneratorError::LengthTooShort`] if `length < 4`.
pub fn generate_secure_password(length: usize) -> Result<SecretString, GeneratorError> {
    generate_secure_password_with_rng(length, &mut rand::rng())
}

/// Same as [`generate_secure_password`] with a caller-supplied RNG.
pub fn generate_secure_password_with_rng<R: Rng + ?Sized>(
    length: usize,
    rng: &mut R,
) -> Result<SecretString, GeneratorError> {
    if length < MIN_GENERATED_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::error!("Password generation refused: length {} too short", length);
        return Err(GeneratorError::LengthTooShort {
            requested: length,
            minimum: MIN_GENERATED_LENGTH,
        });
    }

    let pool: Vec<char> = CharacterClass::ALL
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect();

    let mut chars: Vec<char> = Vec::with_capacity(length);
    for class in CharacterClass::ALL {
        let alphabet: Vec<char> = class.alphabet().chars().collect();
        chars.extend(alphabet.choose(rng));
    }
    chars.extend((MIN_GENERATED_LENGTH..length).filter_map(|_| pool.choose(rng)));
    chars.shuffle(rng);

    Ok(SecretString::new(chars.into_iter().collect::<String>().into()))
}
