//! Category counting.

use crate::issues::Category;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of records in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount<K> {
    /// The category.
    pub key: K,

    /// Number of records in it.
    pub count: usize,
}

/// Counts of every category that occurs, ordered by descending count and
/// then by category order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts<K>(Vec<CategoryCount<K>>);

impl<K: Category> CategoryCounts<K> {
    /// Counts the keys produced by `keys`.
    pub fn tally(keys: impl IntoIterator<Item = K>) -> Self {
        let mut totals: BTreeMap<K, usize> = BTreeMap::new();
        for key in keys {
            *totals.entry(key).or_default() += 1;
        }

        let mut counts: Vec<CategoryCount<K>> = totals
            .into_iter()
            .map(|(key, count)| CategoryCount { key, count })
            .collect();
        // Stable sort keeps category order among equal counts.
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        Self(counts)
    }

    /// Returns the counts in order.
    #[must_use]
    pub fn entries(&self) -> &[CategoryCount<K>] {
        &self.0
    }

    /// Returns the count for `key`, zero if absent.
    #[must_use]
    pub fn get(&self, key: K) -> usize {
        self.0
            .iter()
            .find(|entry| entry.key == key)
            .map_or(0, |entry| entry.count)
    }

    /// Returns the sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|entry| entry.count).sum()
    }

    /// Returns true if nothing was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `(display name, count)` pairs for charts and tables.
    #[must_use]
    pub fn labelled(&self) -> Vec<(String, usize)> {
        self.0
            .iter()
            .map(|entry| (entry.key.label().to_string(), entry.count))
            .collect()
    }

    /// Returns an ordered `key -> count` map for JSON output.
    #[must_use]
    pub fn to_key_map(&self) -> IndexMap<&'static str, usize> {
        self.0
            .iter()
            .map(|entry| (entry.key.key(), entry.count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::{IssueType, Priority};

    #[test]
    fn orders_by_count_then_category() {
        let counts = CategoryCounts::tally([
            IssueType::Task,
            IssueType::Other,
            IssueType::Task,
            IssueType::Bug,
            IssueType::Other,
        ]);

        let keys: Vec<IssueType> = counts.entries().iter().map(|entry| entry.key).collect();
        assert_eq!(keys, [IssueType::Task, IssueType::Other, IssueType::Bug]);
        assert_eq!(counts.get(IssueType::Task), 2);
        assert_eq!(counts.get(IssueType::Enhancement), 0);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn ties_follow_precedence() {
        let counts = CategoryCounts::tally([Priority::Unset, Priority::High, Priority::Low]);
        let keys: Vec<Priority> = counts.entries().iter().map(|entry| entry.key).collect();
        assert_eq!(keys, [Priority::High, Priority::Low, Priority::Unset]);
    }

    #[test]
    fn empty_tally() {
        let counts = CategoryCounts::<Priority>::tally([]);
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert!(counts.to_key_map().is_empty());
    }

    #[test]
    fn can_label_and_map_counts() {
        let counts = CategoryCounts::tally([IssueType::Enhancement, IssueType::Enhancement]);
        assert_eq!(counts.labelled(), [("Feature Request".to_string(), 2)]);
        assert_eq!(counts.to_key_map().get("enhancement"), Some(&2));
    }
}
