use crate::types::Frequency;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts of distinct items, remembering the order in which each
/// item was first seen.
///
/// Ranking is by descending count; equal counts rank by first appearance.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    // Entries in first-seen order
    entries: Vec<(K, Frequency)>,
    index: HashMap<K, usize>,
    total: Frequency,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: K) {
        self.total += 1;

        if let Some(&position) = self.index.get(&item) {
            self.entries[position].1 += 1;
            return;
        }

        self.index.insert(item.clone(), self.entries.len());
        self.entries.push((item, 1));
    }

    /// Returns the count of `item`, or zero if it was never added.
    pub fn count(&self, item: &K) -> Frequency {
        self.index
            .get(item)
            .map_or(0, |&position| self.entries[position].1)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of items added, duplicates included.
    pub fn total(&self) -> Frequency {
        self.total
    }

    /// Iterates over `(item, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Frequency)> {
        self.entries.iter().map(|(item, count)| (item, *count))
    }

    /// Returns up to `k` entries with the highest counts.
    ///
    /// Sorted by descending count; ties keep first-seen order. Fewer than `k`
    /// distinct items returns all of them.
    pub fn most_common(&self, k: usize) -> Vec<(&K, Frequency)> {
        let mut ranked: Vec<(&K, Frequency)> = self.iter().collect();

        // Stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);

        ranked
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K: Eq + Hash + Clone> Extend<K> for FrequencyTable<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
