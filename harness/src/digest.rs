//! Canonical JSON bytes and domain-separated content hashes for run records.
//!
//! Canonical form: object keys sorted by byte order, no whitespace, integers
//! only. Floats are rejected so digests never depend on float formatting.
//!
//! Hash: `sha256(domain || data)`, rendered as `"sha256:<hex>"`. Every
//! domain prefix is null-terminated so no prefix is a prefix of another.

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Domain prefix for [`crate::runner::RunRecord`] hashing.
pub const DOMAIN_RUN_RECORD: &[u8] = b"WAYFIND::RUN_RECORD::V1\0";

/// Domain prefix for [`wayfind_search::SearchPolicy`] digests.
pub const DOMAIN_SEARCH_POLICY: &[u8] = b"WAYFIND::SEARCH_POLICY::V1\0";

/// A content-addressed hash in `"algorithm:hex_digest"` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"`. `None` if either side is empty or the
    /// colon is missing.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon + 1 == s.len() {
            return None;
        }
        Some(Self {
            full: s.to_owned(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex = hex::encode(hasher.finalize());
    ContentHash {
        colon: "sha256".len(),
        full: format!("sha256:{hex}"),
    }
}

/// Canonical JSON failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonError {
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
    #[error("JSON serialization failed: {detail}")]
    Serialize { detail: String },
}

/// Canonical JSON bytes of `value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if `value` holds a number that
/// is neither `i64` nor `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    reject_floats(value)?;
    // `serde_json::Map` is a BTreeMap without the `preserve_order` feature,
    // and `to_vec` writes the compact form.
    serde_json::to_vec(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

fn reject_floats(value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            Err(CanonError::NonIntegerNumber { raw: n.to_string() })
        }
        serde_json::Value::Array(items) => items.iter().try_for_each(reject_floats),
        serde_json::Value::Object(map) => map.values().try_for_each(reject_floats),
        _ => Ok(()),
    }
}

/// Digest of a search policy's canonical projection.
///
/// # Errors
///
/// Propagates [`CanonError`]; the projection holds integers only, so this
/// does not fail in practice.
pub fn search_policy_digest(
    policy: &wayfind_search::SearchPolicy,
) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&policy.to_json())?;
    Ok(canonical_hash(DOMAIN_SEARCH_POLICY, &bytes))
}
