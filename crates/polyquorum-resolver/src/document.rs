//! Share document loading.
//!
//! The recognized top-level shape is
//! `{ "n": int, "k": int, "shares": { "<x>": "<expression>" } }`.
//! Records are keyed by the participant index and ordered (BTreeMap), so
//! resolution output is deterministic regardless of JSON key order.

use crate::expr::resolve_expression;
use polyquorum_core::Share;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Failure to load a share document. Loading is all-or-nothing; bad
/// individual records are handled later, by [`ShareDocument::resolve`].
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read share document: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid share document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed share document, still holding raw expressions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareDocument {
    /// Declared number of shares.
    pub n: usize,
    /// Reconstruction threshold.
    pub k: usize,
    /// Participant index (as a decimal string key) to share expression.
    pub shares: BTreeMap<String, String>,
}

impl ShareDocument {
    /// Parse a document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load and parse a document from a file.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Resolve every record into a share point.
    ///
    /// A record whose key is not an integer or whose expression fails to
    /// evaluate is logged at `warn` and skipped; the remaining shares come
    /// out in the map's key order. Whether enough survived is the
    /// consensus engine's call, not ours.
    pub fn resolve(&self) -> Vec<Share> {
        let mut resolved = Vec::with_capacity(self.shares.len());

        for (key, expr) in &self.shares {
            let x = match key.trim().parse::<i64>() {
                Ok(x) => x,
                Err(_) => {
                    log::warn!("Skipping share '{}': key is not an integer", key);
                    continue;
                }
            };
            match resolve_expression(expr) {
                Ok(y) => resolved.push(Share::new(x, y)),
                Err(err) => {
                    log::warn!("Skipping share '{}': {}", key, err);
                }
            }
        }

        if resolved.len() != self.n {
            log::warn!(
                "Document declares n = {} but {} share(s) resolved",
                self.n,
                resolved.len()
            );
        }

        resolved
    }
}
