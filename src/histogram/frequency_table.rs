use crate::histogram::errors::FrequencyTableError;
use core::cmp::Reverse;
use core::hash::Hash;
use hashbrown::HashMap;
use log::debug;

/// The empirical distribution of a finite sequence of observations.
///
/// Maps every distinct observed value to the number of times it occurred.
/// A table is built once and is read-only afterwards, so a single instance can
/// be shared between any number of readers.
///
/// # Remarks
///
/// Integer observations can be tabulated directly. Floating point observations
/// should be wrapped in [`FloatKey`] first.
///
/// When several values share the highest count, [`Self::mode`] and
/// [`Self::all_modes`] break the tie by value, smallest first. The result is
/// therefore independent of the order in which observations were supplied.
///
/// [`FloatKey`]: crate::histogram::float_key::FloatKey
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K>
where
    K: Copy + Eq + Hash + Ord,
{
    counts: HashMap<K, u64>,
    total: u64,
}

impl<K> FrequencyTable<K>
where
    K: Copy + Eq + Hash + Ord,
{
    /// Builds a table by counting every observation once.
    ///
    /// # Arguments
    ///
    /// * `observations` - The values to tabulate. May be empty, in which case
    ///   every query returning a mode fails with [`FrequencyTableError::EmptyTable`].
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let observations = observations.into_iter();
        let (lower_bound, _) = observations.size_hint();

        // Distinct values are usually far fewer than observations.
        let capacity = (lower_bound as f64).sqrt() as usize;
        let mut counts: HashMap<K, u64> = HashMap::with_capacity(capacity);
        let mut total = 0u64;

        for value in observations {
            *counts.entry(value).or_default() += 1;
            total += 1;
        }

        debug!(
            "Built frequency table from {} observations ({} distinct values)",
            total,
            counts.len()
        );

        Self { counts, total }
    }

    /// Returns the value with the highest count.
    ///
    /// Among values sharing the highest count, the smallest one is returned.
    ///
    /// # Errors
    ///
    /// [`FrequencyTableError::EmptyTable`] if no observations were tabulated.
    pub fn mode(&self) -> Result<K, FrequencyTableError> {
        self.counts
            .iter()
            .max_by_key(|&(&value, &count)| (count, Reverse(value)))
            .map(|(&value, _)| value)
            .ok_or(FrequencyTableError::EmptyTable)
    }

    /// Returns every `(value, count)` pair ordered by count descending.
    ///
    /// Pairs with equal counts are ordered by value ascending.
    ///
    /// # Errors
    ///
    /// [`FrequencyTableError::EmptyTable`] if no observations were tabulated.
    pub fn all_modes(&self) -> Result<Vec<(K, u64)>, FrequencyTableError> {
        if self.counts.is_empty() {
            return Err(FrequencyTableError::EmptyTable);
        }

        let mut items: Vec<(K, u64)> = self.iter().collect();
        items.sort_unstable_by_key(|&(value, count)| (Reverse(count), value));
        Ok(items)
    }

    /// Returns the `limit` most common `(value, count)` pairs, in the order of
    /// [`Self::all_modes`].
    ///
    /// # Errors
    ///
    /// [`FrequencyTableError::EmptyTable`] if no observations were tabulated.
    pub fn top_modes(&self, limit: usize) -> Result<Vec<(K, u64)>, FrequencyTableError> {
        let mut modes = self.all_modes()?;
        modes.truncate(limit);
        Ok(modes)
    }

    /// Returns every `(value, count)` pair ordered by value ascending.
    /// An empty table yields an empty list.
    pub fn sorted_by_value(&self) -> Vec<(K, u64)> {
        let mut items: Vec<(K, u64)> = self.iter().collect();
        items.sort_unstable_by_key(|&(value, _)| value);
        items
    }

    /// Number of times `value` was observed; zero if it never was.
    pub fn freq(&self, value: K) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Whether `value` was observed at least once.
    pub fn contains(&self, value: K) -> bool {
        self.counts.contains_key(&value)
    }

    /// Sum of all counts, i.e. the number of observations tabulated.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(value, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (K, u64)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }
}

impl<K> FromIterator<K> for FrequencyTable<K>
where
    K: Copy + Eq + Hash + Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_observations(iter)
    }
}

impl<K> From<&[K]> for FrequencyTable<K>
where
    K: Copy + Eq + Hash + Ord,
{
    fn from(observations: &[K]) -> Self {
        Self::from_observations(observations.iter().copied())
    }
}

impl<K> Default for FrequencyTable<K>
where
    K: Copy + Eq + Hash + Ord,
{
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}
