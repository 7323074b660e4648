//!
//! An entry in the gas comparison results table.
//!

use crate::codegen::Codegen;
use crate::model::selector::Selector;

use super::delta::Delta;

///
/// An entry in the gas comparison results table.
///
#[derive(Debug, Clone)]
pub struct FunctionRow<'a> {
    /// The (contract, function) key.
    pub selector: &'a Selector,
    /// Difference of the legacy codegen candidate against its baseline.
    pub evmla: Delta,
    /// Difference of the Yul codegen candidate against its baseline.
    pub yul: Delta,
}

impl FunctionRow<'_> {
    ///
    /// Returns the delta for the requested codegen.
    ///
    pub fn delta(&self, codegen: Codegen) -> Delta {
        match codegen {
            Codegen::EVMLA => self.evmla,
            Codegen::Yul => self.yul,
        }
    }

    ///
    /// The larger absolute difference of the two codegens, with undefined
    /// deltas collapsed to zero. Used to order the full row list only.
    ///
    pub fn sort_weight(&self) -> f64 {
        f64::max(
            self.evmla.ordering_value().abs(),
            self.yul.ordering_value().abs(),
        )
    }
}
