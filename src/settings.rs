/// The smallest number of ranked modes a report may list.
pub const MIN_TOP_MODES: usize = 1;

/// The largest number of ranked modes a report may list.
pub const MAX_TOP_MODES: usize = 100;

/// The largest number of decimal places used for percentages.
pub const MAX_PERCENTAGE_PRECISION: usize = 6;

/// Controls how analysis results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    /// Number of most common values to list.
    ///
    /// Range is [`MIN_TOP_MODES`] to [`MAX_TOP_MODES`].
    pub top_modes: usize,

    /// Decimal places used when printing percentages.
    ///
    /// Range is 0 to [`MAX_PERCENTAGE_PRECISION`].
    pub percentage_precision: usize,

    /// Set this to 'true' to also list every value with its count, ordered by value.
    pub value_counts: bool,
}

impl ReportSettings {
    /// Creates a new `ReportSettings` with default values.
    pub fn new() -> Self {
        ReportSettings {
            top_modes: 5,
            percentage_precision: 2,
            value_counts: false,
        }
    }

    /// Sanitizes settings to acceptable values if they are out of range.
    pub fn sanitize(&mut self) {
        self.top_modes = self.top_modes.clamp(MIN_TOP_MODES, MAX_TOP_MODES);
        self.percentage_precision = self.percentage_precision.min(MAX_PERCENTAGE_PRECISION);
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(5, 5)]
    #[case(1000, MAX_TOP_MODES)]
    fn sanitize_clamps_top_modes(#[case] requested: usize, #[case] expected: usize) {
        let mut settings = ReportSettings {
            top_modes: requested,
            ..ReportSettings::new()
        };
        settings.sanitize();
        assert_eq!(settings.top_modes, expected);
    }

    #[test]
    fn sanitize_clamps_precision() {
        let mut settings = ReportSettings {
            percentage_precision: 42,
            ..ReportSettings::default()
        };
        settings.sanitize();
        assert_eq!(settings.percentage_precision, MAX_PERCENTAGE_PRECISION);
    }

    #[test]
    fn defaults_are_already_sane() {
        let mut settings = ReportSettings::new();
        settings.sanitize();
        assert_eq!(settings, ReportSettings::new());
    }
}
