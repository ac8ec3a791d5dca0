//! Common-password blacklist.
//!
//! Loaded once at startup from a plain text file (one password per line),
//! then queried case-insensitively. The core evaluator works without it;
//! only [`crate::validate_with_blacklist`] consults it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

/// Environment variable overriding the blacklist file location.
pub const BLACKLIST_PATH_ENV: &str = "PWD_METER_BLACKLIST_PATH";

const DEFAULT_BLACKLIST_PATH: &str = "./assets/common-passwords.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

fn blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// Loads the blacklist from the configured path.
///
/// The path comes from `PWD_METER_BLACKLIST_PATH` when set, otherwise
/// `./assets/common-passwords.txt`. Call once at startup; repeated calls are
/// no-ops returning the already-loaded count.
///
/// # Errors
///
/// [`BlacklistError`] when the file is missing, unreadable or empty.
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    init_blacklist_from_path(blacklist_path())
}

/// Loads the blacklist from an explicit path, for callers that resolve the
/// location themselves (asset pipelines, test fixtures).
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    {
        let guard = COMMON_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();
    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("blacklist load failed: {} not found", path.display());
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("blacklist load failed: {} is empty", path.display());
        return Err(BlacklistError::EmptyFile);
    }

    // Entries are normalized to lowercase so lookups are case-insensitive.
    let set: HashSet<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    let count = set.len();
    *COMMON_PASSWORDS.write().unwrap() = Some(set);

    #[cfg(feature = "tracing")]
    tracing::info!("blacklist loaded: {} entries from {}", count, path.display());

    Ok(count)
}

/// Snapshot of the loaded blacklist, `None` before initialization.
pub fn get_blacklist() -> Option<HashSet<String>> {
    COMMON_PASSWORDS.read().unwrap().clone()
}

/// Case-insensitive membership test. Always `false` before initialization.
pub fn is_blacklisted(password: &str) -> bool {
    COMMON_PASSWORDS
        .read()
        .unwrap()
        .as_ref()
        .is_some_and(|set| set.contains(&password.to_lowercase()))
}

#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    *COMMON_PASSWORDS.write().unwrap() = None;
}
