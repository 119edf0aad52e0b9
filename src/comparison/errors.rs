use core::fmt;
use thiserror::Error;

/// Identifies one side of a two-group comparison.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GroupSide {
    /// The group passed first, e.g. first born babies.
    First,

    /// The group passed second, e.g. all other babies.
    Second,
}

impl fmt::Display for GroupSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupSide::First => f.write_str("first"),
            GroupSide::Second => f.write_str("second"),
        }
    }
}

/// Precondition violations raised by the group comparison functions.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ComparisonError {
    /// A group contained no observations, so its mean is undefined.
    #[error("The {group} group contains no observations.")]
    EmptyGroup { group: GroupSide },

    /// Too few observations to estimate a variance.
    /// Pooled variance needs more than two observations across both groups.
    #[error("Insufficient data to estimate variance: {combined} observation(s) in total.")]
    InsufficientData { combined: usize },
}
