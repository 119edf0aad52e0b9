use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A floating point value usable as a [`FrequencyTable`] key.
///
/// [`f64`] implements neither [`Eq`], [`Ord`] nor [`Hash`], so observations that
/// are not integers are wrapped in this type before being tabulated.
///
/// # Remarks
///
/// Ordering follows [`f64::total_cmp`]. Before comparison or hashing the value is
/// normalised: `-0.0` becomes `0.0` and every NaN becomes the canonical NaN, so
/// values which compare equal always hash identically.
///
/// [`FrequencyTable`]: crate::histogram::frequency_table::FrequencyTable
#[derive(Clone, Copy)]
pub struct FloatKey(f64);

impl FloatKey {
    /// Wraps a value, normalising signed zero and NaN payloads.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(f64::NAN)
        } else if value == 0.0 {
            Self(0.0)
        } else {
            Self(value)
        }
    }

    /// Returns the wrapped value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for FloatKey {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<FloatKey> for f64 {
    fn from(key: FloatKey) -> Self {
        key.0
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatKey {}

impl PartialOrd for FloatKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Debug for FloatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for FloatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
