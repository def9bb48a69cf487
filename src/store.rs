//! Append-only prediction log.
//!
//! Predictions are stored as a single JSON file mapping decimal-string ids to
//! `[text, sentiment]` pairs:
//!
//! ```json
//! {
//!   "1": ["I love this", "Positive"],
//!   "2": ["Terrible quality", "Negative"]
//! }
//! ```
//!
//! The store is stateless between calls. Every operation reads the file fresh,
//! and every append rewrites it whole. A missing or unparseable file is
//! treated as the empty log, so the file does not need to exist before the
//! first prediction.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::label::Sentiment;

/// The full log as stored on disk: id, then `(text, sentiment)`.
pub type PredictionLog = BTreeMap<u64, (String, Sentiment)>;

/// A single persisted prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRecord {
    /// Id assigned at write time, starting at 1.
    pub id: u64,
    /// The raw input sentence.
    pub text: String,
    /// The predicted label.
    pub sentiment: Sentiment,
}

/// Durable, append-only persistence of prediction records.
///
/// Holds only the backing file path; all state lives on disk.
///
/// # Examples
///
/// ```rust,no_run
/// use sentilog::store::PredictionStore;
/// use sentilog::Sentiment;
///
/// # fn main() -> sentilog::error::Result<()> {
/// let store = PredictionStore::new();
/// let record = store.append("I love this", Sentiment::Positive)?;
/// assert_eq!(record.id, store.load_all().len() as u64);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PredictionStore {
    path: PathBuf,
}

impl PredictionStore {
    /// Default backing file, relative to the working directory.
    pub const DEFAULT_PATH: &'static str = "predictions.json";

    /// Creates a store backed by [`Self::DEFAULT_PATH`].
    pub fn new() -> Self {
        Self::with_path(Self::DEFAULT_PATH)
    }

    /// Creates a store backed by a custom file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full current log.
    ///
    /// A missing or unparseable file yields an empty map, not an error. That
    /// is the documented "no predictions yet" state; an unparseable file is
    /// additionally logged, since it may be corruption rather than first run.
    pub fn load_all(&self) -> PredictionLog {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return PredictionLog::new(),
        };

        match serde_json::from_str(&content) {
            Ok(log) => log,
            Err(e) => {
                warn!(
                    "Treating unparseable prediction log '{}' as empty: {}",
                    self.path.display(),
                    e
                );
                PredictionLog::new()
            }
        }
    }

    /// Appends one prediction and returns the record with its assigned id.
    ///
    /// Loads the current log, assigns `id = len + 1`, and rewrites the whole
    /// file. The parent directory is created if missing. On a write failure
    /// the record is not saved and [`AppError::Persistence`] is returned.
    ///
    /// Not safe under concurrent writers: two simultaneous appends can read
    /// the same size, assign the same id, and the later rewrite drops the
    /// earlier entry. The surrounding application is single-user.
    pub fn append(&self, text: &str, sentiment: Sentiment) -> Result<PredictionRecord> {
        let mut log = self.load_all();
        let id = log.len() as u64 + 1;
        log.insert(id, (text.to_string(), sentiment));

        let content = serde_json::to_string_pretty(&log).map_err(|e| {
            AppError::Persistence(format!("Failed to serialize prediction log: {e}"))
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::Persistence(format!(
                        "Failed to create '{}': {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        fs::write(&self.path, content).map_err(|e| {
            AppError::Persistence(format!("Failed to write '{}': {e}", self.path.display()))
        })?;

        debug!("Appended prediction {} to '{}'", id, self.path.display());

        Ok(PredictionRecord {
            id,
            text: text.to_string(),
            sentiment,
        })
    }

    /// All records in ascending id order.
    pub fn records(&self) -> Vec<PredictionRecord> {
        self.load_all()
            .into_iter()
            .map(|(id, (text, sentiment))| PredictionRecord {
                id,
                text,
                sentiment,
            })
            .collect()
    }
}

impl Default for PredictionStore {
    fn default() -> Self {
        Self::new()
    }
}
