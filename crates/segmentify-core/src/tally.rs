//! Key frequency counting and ordering.

use std::cmp::Ordering;
use std::collections::HashMap;

/// One key with the number of qualifying lines that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCount {
    pub key: String,
    pub count: u64,
}

impl KeyCount {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Count descending, then key ascending so equal counts have a stable order.
pub fn by_count_desc(a: &KeyCount, b: &KeyCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key))
}

/// Unordered key → count map for one section.
#[derive(Debug, Default)]
pub struct FrequencyTally {
    counts: HashMap<String, u64>,
}

impl FrequencyTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: &str) {
        // Only allocate the first time a key is seen.
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
        } else {
            self.counts.insert(key.to_owned(), 1);
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Consume the map into a list ordered by [`by_count_desc`].
    pub fn into_sorted(self) -> Vec<KeyCount> {
        let mut sorted: Vec<KeyCount> = self
            .counts
            .into_iter()
            .map(|(key, count)| KeyCount { key, count })
            .collect();
        sorted.sort_by(by_count_desc);
        sorted
    }
}

/// Result of dropping small keys from a sorted list.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholded {
    pub kept: Vec<KeyCount>,
    /// Number of keys removed.
    pub excluded: usize,
    /// Keys needed a count strictly above this to be kept.
    pub threshold: u64,
}

/// Keep only keys whose count exceeds `floor(largest * percent)`. A
/// non-positive `percent` keeps everything.
pub fn apply_threshold(sorted: Vec<KeyCount>, percent: f64) -> Thresholded {
    let largest = sorted.first().map_or(0, |kc| kc.count);
    let threshold = if percent > 0.0 {
        (largest as f64 * percent).floor() as u64
    } else {
        0
    };
    let before = sorted.len();
    let kept: Vec<KeyCount> = sorted.into_iter().filter(|kc| kc.count > threshold).collect();
    Thresholded {
        excluded: before - kept.len(),
        kept,
        threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_sorts_desc_with_key_tiebreak() {
        let mut t = FrequencyTally::new();
        for k in ["b", "a", "c", "c", "b", "c"] {
            t.record(k);
        }
        t.record("d");
        assert_eq!(t.len(), 4);
        assert_eq!(t.get("c"), Some(3));
        assert_eq!(
            t.into_sorted(),
            vec![
                KeyCount::new("c", 3),
                KeyCount::new("b", 2),
                KeyCount::new("a", 1),
                KeyCount::new("d", 1),
            ]
        );
    }

    #[test]
    fn empty_tally_sorts_to_empty() {
        let t = FrequencyTally::new();
        assert!(t.is_empty());
        assert!(t.into_sorted().is_empty());
    }

    #[test]
    fn zero_threshold_keeps_all() {
        let sorted = vec![KeyCount::new("a", 100), KeyCount::new("b", 1)];
        let out = apply_threshold(sorted.clone(), 0.0);
        assert_eq!(out.kept, sorted);
        assert_eq!(out.excluded, 0);
    }

    #[test]
    fn threshold_is_floor_of_largest_share() {
        let sorted = vec![
            KeyCount::new("a", 100),
            KeyCount::new("b", 6),
            KeyCount::new("c", 5),
            KeyCount::new("d", 1),
        ];
        let out = apply_threshold(sorted, 0.05);
        assert_eq!(out.threshold, 5);
        assert_eq!(out.kept, vec![KeyCount::new("a", 100), KeyCount::new("b", 6)]);
        assert_eq!(out.excluded, 2);
    }

    #[test]
    fn threshold_on_empty_list() {
        let out = apply_threshold(Vec::new(), 0.5);
        assert!(out.kept.is_empty());
        assert_eq!(out.excluded, 0);
    }
}
