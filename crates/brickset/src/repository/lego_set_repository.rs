//! LegoSet Repository - Aggregation queries over the Brickset dataset
//!
//! The dataset is loaded once, when the repository is constructed. Every
//! query re-derives its answer from that snapshot and never fails.

use std::collections::{BTreeMap, HashSet};
use std::io::Write;
use std::path::Path;

use repository::{JsonRepository, Repository};
use shared::BricksetConfig;
use tracing::debug;

use crate::model::lego_set::LegoSet;
use crate::model::packaging_type::PackagingType;

/// Queries over a loaded collection of [`LegoSet`] records
#[derive(Debug, Clone)]
pub struct LegoSetRepository<R = JsonRepository<LegoSet>> {
    repository: R,
}

impl LegoSetRepository<JsonRepository<LegoSet>> {
    /// Load the dataset named by the configuration
    pub fn open(config: &BricksetConfig) -> shared::Result<Self> {
        Self::load(config.dataset_path())
    }

    /// Load the dataset from a JSON file
    pub fn load(path: impl AsRef<Path>) -> shared::Result<Self> {
        Ok(Self::new(JsonRepository::load(path)?))
    }

    /// Where the dataset was loaded from
    pub fn source(&self) -> &Path {
        self.repository.source()
    }
}

impl<R: Repository<LegoSet>> LegoSetRepository<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// All loaded sets, in dataset order
    pub fn get_all(&self) -> &[LegoSet] {
        self.repository.get_all()
    }

    /// Whether at least one set uses the given packaging type
    pub fn contains_packaging_type(&self, packaging_type: PackagingType) -> bool {
        self.repository
            .iter()
            .any(|set| set.packaging_type() == packaging_type)
    }

    /// Every tag used by any set, each once, in first-seen order
    ///
    /// The iterator is lazy; call again for a fresh pass.
    pub fn all_distinct_tags(&self) -> DistinctTags<'_> {
        DistinctTags::new(self.get_all())
    }

    /// Write every distinct tag on its own line
    pub fn print_all_tags<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for tag in self.all_distinct_tags() {
            writeln!(out, "{}", tag)?;
        }
        Ok(())
    }

    /// Sum of pieces over all sets
    pub fn total_pieces(&self) -> u64 {
        self.repository
            .iter()
            .map(|set| u64::from(set.pieces()))
            .sum()
    }

    /// Sets partitioned by packaging type, each group in dataset order
    ///
    /// Only packaging types that occur in the dataset have an entry.
    pub fn group_by_packaging_type(&self) -> BTreeMap<PackagingType, Vec<&LegoSet>> {
        let mut groups: BTreeMap<PackagingType, Vec<&LegoSet>> = BTreeMap::new();
        for set in self.repository.iter() {
            groups.entry(set.packaging_type()).or_default().push(set);
        }
        debug!(groups = groups.len(), "grouped sets by packaging type");
        groups
    }

    /// Total pieces per theme
    ///
    /// Themes that do not occur in the dataset are absent, not zero.
    pub fn sum_pieces_by_theme(&self) -> BTreeMap<&str, u64> {
        let mut sums: BTreeMap<&str, u64> = BTreeMap::new();
        for set in self.repository.iter() {
            *sums.entry(set.theme()).or_insert(0) += u64::from(set.pieces());
        }
        debug!(themes = sums.len(), "summed pieces by theme");
        sums
    }
}

/// Lazy iterator over distinct tags, in first-seen order
///
/// Returned by [`LegoSetRepository::all_distinct_tags`].
#[derive(Debug, Clone)]
pub struct DistinctTags<'a> {
    sets: std::slice::Iter<'a, LegoSet>,
    tags: std::slice::Iter<'a, String>,
    seen: HashSet<&'a str>,
}

impl<'a> DistinctTags<'a> {
    fn new(sets: &'a [LegoSet]) -> Self {
        Self {
            sets: sets.iter(),
            tags: <&[String]>::default().iter(),
            seen: HashSet::new(),
        }
    }
}

impl<'a> Iterator for DistinctTags<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for tag in self.tags.by_ref() {
                if self.seen.insert(tag.as_str()) {
                    return Some(tag.as_str());
                }
            }
            self.tags = self.sets.next()?.tags().iter();
        }
    }
}

impl std::iter::FusedIterator for DistinctTags<'_> {}
