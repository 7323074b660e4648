//!
//! Per-contract record of a benchmark report.
//!

use std::collections::BTreeMap;

use crate::input::function::FunctionReport;

///
/// Per-contract record of a benchmark report.
///
#[derive(Debug, serde::Deserialize)]
pub struct ContractReport {
    /// Contract identifier, possibly namespaced as `path:ContractName`.
    pub contract: String,
    /// Per-function measurements.
    pub functions: BTreeMap<String, FunctionReport>,
}
