//! In-Memory Repository
//!
//! Wraps records that did not come from a file.
//! Useful for testing and for embedding datasets built in code.

use crate::Repository;

/// In-memory, read-only record repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> From<Vec<T>> for InMemoryRepository<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

impl<T> FromIterator<T> for InMemoryRepository<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Repository<T> for InMemoryRepository<T> {
    fn get_all(&self) -> &[T] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let repo: InMemoryRepository<u32> = (1..=3).collect();
        assert_eq!(repo.get_all(), &[1, 2, 3]);
    }

    #[test]
    fn test_default_is_empty() {
        let repo = InMemoryRepository::<String>::default();
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);
    }
}
