use std::collections::HashMap;

use crate::sort::merge_sort;

/// Occurrence counts of distinct values in a sample.
///
/// Values are compared with exact floating-point equality, so `0.0` and
/// `-0.0` share one entry (the first one seen is kept as the representative)
/// and `NaN`, which never equals itself, is not counted at all.
///
/// Entries are kept in first-seen order; they carry no numeric order until
/// [`FrequencyTable::modes`] sorts them.
///
/// # Examples
///
/// ```
/// use descstat_stats::frequency::FrequencyTable;
///
/// let table = FrequencyTable::new(&[1.0, 2.0, 1.0]);
/// assert_eq!(table.count_of(1.0), 2);
/// assert_eq!(table.max_frequency(), 2);
/// assert_eq!(table.modes(), vec![1.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(f64, usize)>,
    index: HashMap<u64, usize>,
}

/// Hash key that makes `0.0` and `-0.0` collide, matching `==`.
fn value_key(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

impl FrequencyTable {
    /// Counts every value in `values`.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut table = Self::default();
        for &value in values {
            table.add(value);
        }
        table
    }

    fn add(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        let key = value_key(value);
        if let Some(&idx) = self.index.get(&key) {
            self.entries[idx].1 += 1;
        } else {
            self.index.insert(key, self.entries.len());
            self.entries.push((value, 1));
        }
    }

    /// Returns the number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns how many times `value` occurred.
    #[must_use]
    pub fn count_of(&self, value: f64) -> usize {
        if value.is_nan() {
            return 0;
        }
        self.index
            .get(&value_key(value))
            .map_or(0, |&idx| self.entries[idx].1)
    }

    /// Returns the highest occurrence count, or `0` for an empty table.
    #[must_use]
    pub fn max_frequency(&self) -> usize {
        self.entries
            .iter()
            .map(|&(_, count)| count)
            .max()
            .unwrap_or(0)
    }

    /// Iterates over `(value, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns every value sharing the highest frequency, sorted ascending.
    ///
    /// A sample in which no value repeats has no mode, so the result is
    /// empty whenever the highest frequency is 1 or less.
    #[must_use]
    pub fn modes(&self) -> Vec<f64> {
        let max = self.max_frequency();
        if max <= 1 {
            return vec![];
        }
        let modes = self
            .entries
            .iter()
            .filter(|&&(_, count)| count == max)
            .map(|&(value, _)| value)
            .collect::<Vec<_>>();
        merge_sort(&modes)
    }
}
