//!
//! The merged benchmark data model.
//!

pub mod selector;

use std::collections::BTreeMap;

use crate::input::InputReport;
use crate::toolchain::Toolchain;

use self::selector::Selector;

///
/// Mean gas costs of every measured function, keyed by (contract, function)
/// and then by toolchain.
///
/// Built by merging the per-toolchain input reports. A later entry for the
/// same selector and toolchain overwrites an earlier one, which only matters
/// if a toolchain file repeats a contract.
///
#[derive(Debug, Default)]
pub struct MeanTable {
    /// The merged measurements.
    pub means: BTreeMap<Selector, BTreeMap<Toolchain, f64>>,
}

impl MeanTable {
    ///
    /// Merges one toolchain's report into the table.
    ///
    pub fn extend(&mut self, toolchain: Toolchain, report: InputReport) {
        for contract_report in report.into_iter() {
            for (function, function_report) in contract_report.functions.into_iter() {
                let selector = Selector::new(contract_report.contract.as_str(), function);
                self.means
                    .entry(selector)
                    .or_default()
                    .insert(toolchain, function_report.mean);
            }
        }
    }
}
