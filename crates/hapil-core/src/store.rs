//! Quote Store - the immutable, pre-loaded quote sequence.
//!
//! The bundled asset is embedded at compile time, so [`QuoteStore::load`]
//! does no I/O. An alternate asset can be read from disk with
//! [`QuoteStore::from_path`]. Every constructor validates the sequence:
//! it must be non-empty and ids must be unique.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;

use crate::error::{QuoteError, QuoteResult};
use crate::quote::{QuoteId, QuoteRecord};

/// The data set shipped with the app.
pub const BUNDLED_QUOTES: &str = include_str!("../data/quotes.json");

/// Ordered, immutable sequence of quotes.
///
/// Once constructed the store is never mutated; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteStore {
    records: Vec<QuoteRecord>,
}

impl QuoteStore {
    /// Load the bundled data set, in asset order.
    pub fn load() -> QuoteResult<Self> {
        Self::from_json(BUNDLED_QUOTES)
    }

    /// Parse a JSON array of quote objects.
    pub fn from_json(json: &str) -> QuoteResult<Self> {
        let records: Vec<QuoteRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Read and parse a JSON asset from disk.
    pub fn from_path(path: impl AsRef<Path>) -> QuoteResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        tracing::debug!("Loaded {} quotes from {:?}", store.len(), path);
        Ok(store)
    }

    /// Build a store from already-parsed records.
    pub fn from_records(records: Vec<QuoteRecord>) -> QuoteResult<Self> {
        if records.is_empty() {
            return Err(QuoteError::EmptyDataSet);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(QuoteError::DuplicateId(record.id));
            }
        }

        Ok(Self { records })
    }

    /// Number of quotes. Always at least one.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuoteRecord> {
        self.records.get(index)
    }

    /// Look up a quote by id.
    pub fn find(&self, id: QuoteId) -> Option<&QuoteRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuoteRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    /// Uniformly random index into the sequence.
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> Vec<QuoteRecord> {
        vec![
            QuoteRecord::new(1, "first", "Book A", "Author A"),
            QuoteRecord::new(2, "second", "Book B", "Author B"),
            QuoteRecord::new(3, "third", "Book C", "Author C"),
        ]
    }

    #[test]
    fn test_from_records_keeps_order() {
        let store = QuoteStore::from_records(sample()).unwrap();
        let ids: Vec<_> = store.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_empty_rejected() {
        let err = QuoteStore::from_records(Vec::new()).unwrap_err();
        assert!(matches!(err, QuoteError::EmptyDataSet));

        let err = QuoteStore::from_json("[]").unwrap_err();
        assert!(matches!(err, QuoteError::EmptyDataSet));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut records = sample();
        records.push(QuoteRecord::new(2, "again", "Book D", "Author D"));
        let err = QuoteStore::from_records(records).unwrap_err();
        assert!(matches!(err, QuoteError::DuplicateId(2)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = QuoteStore::from_json(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, QuoteError::Parse(_)));
    }

    #[test]
    fn test_find_and_get() {
        let store = QuoteStore::from_records(sample()).unwrap();
        assert_eq!(store.find(3).map(|r| r.text.as_str()), Some("third"));
        assert!(store.find(42).is_none());
        assert_eq!(store.get(0).map(|r| r.id), Some(1));
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_random_index_in_bounds() {
        let store = QuoteStore::from_records(sample()).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            assert!(store.random_index(&mut rng) < store.len());
        }
    }

    #[test]
    fn test_bundled_asset_loads() {
        let store = QuoteStore::load().unwrap();
        assert!(store.len() >= 2);
    }
}
