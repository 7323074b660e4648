//!
//! Percentage gas cost difference between two toolchains.
//!

/// Marker appended to improved results.
pub const MARKER_IMPROVEMENT: &str = ":white_check_mark:";

/// Marker appended to regressed results.
pub const MARKER_REGRESSION: &str = ":red_circle:";

///
/// Percentage gas cost difference between two toolchains.
///
/// A delta is undefined when either measurement is missing or the base is
/// zero. Undefined deltas render as `N/A` and never enter the aggregates,
/// so an undefined delta is distinguishable from a true zero difference.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Delta {
    /// The difference in percent; negative means the candidate uses less gas.
    Defined(f64),
    /// One of the measurements is missing, or the base is zero.
    Undefined,
}

impl Delta {
    ///
    /// Computes the percentage difference of `candidate` relative to `base`.
    ///
    pub fn percentage(base: Option<f64>, candidate: Option<f64>) -> Self {
        match (base, candidate) {
            (Some(base), Some(candidate)) if base != 0.0 => {
                Self::Defined((candidate - base) / base * 100.0)
            }
            _ => Self::Undefined,
        }
    }

    ///
    /// Returns the raw difference, if defined.
    ///
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Defined(value) => Some(*value),
            Self::Undefined => None,
        }
    }

    ///
    /// Returns the raw difference with undefined deltas collapsed to zero.
    ///
    /// Suitable for ordering only. Counters and averages must go through
    /// [`Delta::value`] instead.
    ///
    pub fn ordering_value(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

impl std::fmt::Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Defined(value) if *value < 0.0 => {
                write!(f, "{value:.2}% {MARKER_IMPROVEMENT}")
            }
            Self::Defined(value) => write!(f, "{value:.2}% {MARKER_REGRESSION}"),
            Self::Undefined => write!(f, "N/A"),
        }
    }
}
