//!
//! Per-function gas measurements of a benchmark report.
//!

///
/// Per-function gas measurements of a benchmark report.
///
/// Reports may carry more metrics per function, such as call counts,
/// minimum, median, and maximum costs. Only the mean is consumed.
///
#[derive(Debug, serde::Deserialize)]
pub struct FunctionReport {
    /// Mean gas cost across benchmark repetitions.
    pub mean: f64,
}
