//! Profile storage
//!
//! One JSON record per username, stored as `user_<name>.json` in a directory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Errors reading or writing a profile record
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} belongs to {found:?}")]
    WrongUser { path: PathBuf, found: String },
    #[error("failed to encode profile: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persisted statistics for one hint style
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRecord {
    /// Games won with the style
    pub attempts: u64,
    /// Smoothed attempts-to-win
    pub avg_attempts: f64,
}

/// The stored form of a user profile
///
/// Every field but `username` falls back to its default when missing.
/// Style names are kept as strings so unknown styles survive parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub username: String,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default)]
    pub avg_attempts: Option<f64>,
    #[serde(default = "default_range_size")]
    pub range_size: u32,
    #[serde(default)]
    pub games_played: u64,
    #[serde(default)]
    pub hot_cold_k: Option<f64>,
    #[serde(default)]
    pub hint_style_stats: BTreeMap<String, StyleRecord>,
}

const fn default_alpha() -> f64 {
    0.5
}

const fn default_range_size() -> u32 {
    100
}

/// Directory-backed store of profile records
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Record path for `username`
    ///
    /// Characters outside `[A-Za-z0-9_-]` become `_`, so a name can never
    /// point outside the store directory.
    ///
    /// # Examples
    /// ```
    /// use adaptive_guess::profile::ProfileStore;
    ///
    /// let store = ProfileStore::new("profiles");
    /// assert!(store.path_for("Ada").ends_with("user_Ada.json"));
    /// assert!(store.path_for("../etc").ends_with("user____etc.json"));
    /// ```
    #[must_use]
    pub fn path_for(&self, username: &str) -> PathBuf {
        let safe: String = username
            .chars()
            .map(|c| if is_name_char(c) { c } else { '_' })
            .collect();
        self.dir.join(format!("user_{safe}.json"))
    }

    /// Load the record for `username`
    ///
    /// Returns `Ok(None)` when no record exists. A record without a username
    /// is accepted as this user's.
    ///
    /// # Errors
    /// Returns `ProfileError` if the file exists but cannot be read or parsed,
    /// or if it names a different user.
    pub fn load(&self, username: &str) -> Result<Option<ProfileRecord>, ProfileError> {
        let path = self.path_for(username);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored profile");
                return Ok(None);
            }
            Err(source) => return Err(ProfileError::Io { path, source }),
        };

        let record: ProfileRecord =
            serde_json::from_str(&content).map_err(|source| ProfileError::Parse {
                path: path.clone(),
                source,
            })?;
        if !record.username.is_empty() && record.username != username {
            return Err(ProfileError::WrongUser {
                path,
                found: record.username,
            });
        }
        debug!(path = %path.display(), "loaded profile");
        Ok(Some(record))
    }

    /// Write `record` under its username
    ///
    /// Writes a sibling temporary file and renames it over the record.
    ///
    /// # Errors
    /// Returns `ProfileError` if encoding or any filesystem step fails.
    pub fn save(&self, record: &ProfileRecord) -> Result<PathBuf, ProfileError> {
        let path = self.path_for(&record.username);
        let json = serde_json::to_string_pretty(record)?;

        let io_err = |source| ProfileError::Io {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;

        info!(path = %path.display(), "saved profile");
        Ok(path)
    }
}

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Whether `username` maps to a record file of its own
///
/// Only ASCII letters, digits, `_` and `-` are allowed, so no two accepted
/// names share a file.
///
/// # Examples
/// ```
/// use adaptive_guess::profile::is_valid_username;
///
/// assert!(is_valid_username("Player-1_x"));
/// assert!(!is_valid_username("a b"));
/// assert!(!is_valid_username(""));
/// ```
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty() && username.chars().all(is_name_char)
}
