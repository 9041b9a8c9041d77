//! Exact-value frequency counting.
//!
//! Counts live in an insertion-ordered map so that ranking by count is
//! stable: among equally frequent values, the one seen first ranks first.

use crate::color::Rgb;
use indexmap::IndexMap;
use std::hash::Hash;

/// Frequency count over exact values, ranked by [`ColorHistogram::most_common`].
#[derive(Debug, Clone)]
pub struct ColorHistogram<T: Hash + Eq = Rgb> {
    counts: IndexMap<T, usize>,
    total: usize,
}

impl<T: Hash + Eq> Default for ColorHistogram<T> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
            total: 0,
        }
    }
}

impl<T: Hash + Eq + Clone> ColorHistogram<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `value`.
    pub fn add(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `value` so far (0 if never seen).
    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of values recorded, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Up to `n` values with their counts, most frequent first.
    ///
    /// Ties keep first-encountered order.
    pub fn most_common(&self, n: usize) -> Vec<(T, usize)> {
        let mut ranked: Vec<(T, usize)> = self
            .counts
            .iter()
            .map(|(value, &count)| (value.clone(), count))
            .collect();
        // `sort_by` is stable, which is what preserves tie order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Like [`most_common`](Self::most_common) without the counts.
    pub fn top(&self, n: usize) -> Vec<T> {
        self.most_common(n).into_iter().map(|(value, _)| value).collect()
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for ColorHistogram<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for ColorHistogram<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut histogram = Self::new();
        histogram.extend(iter);
        histogram
    }
}

impl ColorHistogram<Rgb> {
    /// Counts a row-major grid of RGB triples, as stored in an RGB8 buffer.
    ///
    /// A trailing partial triple is ignored.
    pub fn from_pixels(raw: &[u8]) -> Self {
        raw.chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect()
    }
}
