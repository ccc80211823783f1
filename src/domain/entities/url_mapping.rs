//! Url mapping entity: a persisted `(id, long_url)` row.

/// A stored mapping between a server-assigned id and a long URL.
///
/// The id is strictly positive and never changes after insert. Mappings are
/// append-only; the same long URL may appear under several ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: u64,
    pub long_url: String,
}

impl UrlMapping {
    pub fn new(id: u64, long_url: impl Into<String>) -> Self {
        Self {
            id,
            long_url: long_url.into(),
        }
    }
}

/// Input data for creating a new mapping. The id is allocated by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub long_url: String,
}

impl NewUrlMapping {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
        }
    }
}
