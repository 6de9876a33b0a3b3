//! Blacklist management module
//!
//! A fixed list of common passwords is always consulted. An extended list can
//! be loaded once from a file at startup.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Passwords rejected regardless of rule compliance. Entries are lower-case.
pub const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "password1",
    "password123",
    "123456",
    "12345678",
    "123456789",
    "1234567890",
    "qwerty",
    "qwerty123",
    "abc123",
    "admin",
    "admin123",
    "letmein",
    "welcome",
    "welcome1",
    "monkey",
    "dragon",
    "master",
    "iloveyou",
    "sunshine",
    "football",
    "baseball",
    "princess",
    "trustno1",
    "111111",
    "000000",
    "passw0rd",
    "p@ssw0rd",
    "changeme",
    "school",
    "student",
    "teacher",
];

pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";
const DEFAULT_BLACKLIST_PATH: &str = "./assets/common-passwords.txt";

static EXTENDED_BLACKLIST: OnceLock<HashSet<String>> = OnceLock::new();

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the extended blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// Loads the extended blacklist from the path configured in the environment.
///
/// # Errors
///
/// See [`init_blacklist_from_path`].
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    init_blacklist_from_path(get_blacklist_path())
}

/// Loads the extended blacklist from `path`.
///
/// Only the first successful load takes effect; later calls return the size
/// of the list already in place without touching the file.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no entries
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    if let Some(existing) = EXTENDED_BLACKLIST.get() {
        return Ok(existing.len());
    }

    let set = read_blacklist_file(path.as_ref())?;
    let installed = EXTENDED_BLACKLIST.get_or_init(|| set);
    let count = installed.len();

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist initialized: {} passwords from {:?}", count, path.as_ref());

    Ok(count)
}

/// Parses a blacklist file: one password per line, trimmed and lower-cased,
/// blank lines skipped.
pub fn read_blacklist_file(path: &Path) -> Result<HashSet<String>, BlacklistError> {
    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: FileNotFound {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: Empty file {:?}", path);
        return Err(BlacklistError::EmptyFile);
    }

    Ok(set)
}

/// Number of entries in the extended list, `None` if it was never loaded.
pub fn extended_blacklist_len() -> Option<usize> {
    EXTENDED_BLACKLIST.get().map(HashSet::len)
}

/// Checks if a password is a known common password.
///
/// Matching is exact after lower-casing the candidate; substrings do not
/// count. Consults the built-in list and, if loaded, the extended list.
pub fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.contains(&lowered.as_str())
        || EXTENDED_BLACKLIST
            .get()
            .is_some_and(|extended| extended.contains(&lowered))
}
