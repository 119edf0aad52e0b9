use derive_new::new;

/// Outcome of comparing two groups of observations.
///
/// Both values are expressed as `first - second`: a positive difference means
/// the first group has the larger mean.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct GroupComparison {
    /// Difference between the group means, in the unit of the observations.
    pub mean_difference: f64,

    /// Cohen's d: [`Self::mean_difference`] in units of pooled standard deviation.
    pub effect_size: f64,
}
