//!
//! The averaged per-contract gas gain.
//!

use super::delta::MARKER_IMPROVEMENT;
use super::delta::MARKER_REGRESSION;

///
/// The averaged per-contract gas gain.
///
/// The sign convention is inverted relative to per-function deltas:
/// a gain is `(base - candidate) / base * 100`, so positive means the
/// candidate uses less gas.
///
#[derive(Debug)]
pub struct ContractGain<'a> {
    /// Contract short name.
    pub contract: &'a str,
    /// Average gain over the contract's comparable functions, in percent.
    pub average: f64,
}

impl std::fmt::Display for ContractGain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.average > 0.0 {
            MARKER_IMPROVEMENT
        } else {
            MARKER_REGRESSION
        };
        write!(f, "{:.2}% {marker}", self.average)
    }
}
