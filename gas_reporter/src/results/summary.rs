//!
//! The global per-codegen summary.
//!

use crate::codegen::Codegen;

///
/// The global per-codegen summary.
///
#[derive(Debug)]
pub struct Summary {
    /// The codegen the counters refer to.
    pub codegen: Codegen,
    /// Number of compared functions, counted over both codegens.
    pub total: usize,
    /// Number of functions where the candidate uses less gas.
    pub improved: usize,
    /// Number of functions where the candidate uses more gas.
    pub regressed: usize,
    /// Arithmetic mean of all defined differences, `None` if there are none.
    pub average: Option<f64>,
}

impl Summary {
    ///
    /// Formats the average difference for the report.
    ///
    pub fn average_to_string(&self) -> String {
        match self.average {
            Some(average) => format!("{average:.2}%"),
            None => "N/A".to_owned(),
        }
    }
}
