//! # Brickset Repository
//!
//! Generic, read-only record containers.
//!
//! ```text
//! Port                  │  Implementations
//! ──────────────────────┼────────────────────────
//! trait Repository<T>   │  JsonRepository<T>      (file-backed)
//!   fn get_all()        │  InMemoryRepository<T>  (record-backed)
//! ```
//!
//! A repository is populated exactly once at construction and never
//! mutated afterwards. Callers only ever see an immutable slice.

pub mod in_memory;
pub mod json;

pub use in_memory::InMemoryRepository;
pub use json::JsonRepository;

/// Read-only access to a loaded collection of records
pub trait Repository<T> {
    /// All records, in load order
    fn get_all(&self) -> &[T];

    /// Iterate over all records, in load order
    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.get_all().iter()
    }

    /// Number of loaded records
    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }
}

impl<T, R: Repository<T> + ?Sized> Repository<T> for &R {
    fn get_all(&self) -> &[T] {
        (**self).get_all()
    }
}
