//!
//! The gas comparison results.
//!

pub mod contract_gain;
pub mod delta;
pub mod function_row;
pub mod summary;

use std::collections::BTreeMap;

use crate::codegen::Codegen;
use crate::model::MeanTable;

use self::contract_gain::ContractGain;
use self::delta::Delta;
use self::function_row::FunctionRow;
use self::summary::Summary;

/// Maximum number of rows in a top-improvements table.
pub const TOP_IMPROVEMENTS_LIMIT: usize = 15;

///
/// The gas comparison results.
///
/// One row per (contract, function) key found in any of the input reports.
///
#[derive(Debug)]
pub struct Results<'a> {
    /// The per-function comparison rows.
    pub rows: Vec<FunctionRow<'a>>,
}

impl<'a> Results<'a> {
    ///
    /// Computes the comparison rows from the merged mean table.
    ///
    /// Rows are ordered by decreasing sort weight; every selection below
    /// re-sorts by its own rule, so this order is cosmetic.
    ///
    pub fn new(mean_table: &'a MeanTable) -> Self {
        let mut rows: Vec<FunctionRow<'a>> = mean_table
            .means
            .iter()
            .map(|(selector, means)| {
                let evmla = Delta::percentage(
                    means.get(&Codegen::EVMLA.reference()).copied(),
                    means.get(&Codegen::EVMLA.candidate()).copied(),
                );
                let yul = Delta::percentage(
                    means.get(&Codegen::Yul.reference()).copied(),
                    means.get(&Codegen::Yul.candidate()).copied(),
                );
                FunctionRow {
                    selector,
                    evmla,
                    yul,
                }
            })
            .collect();
        rows.sort_by(|lhs, rhs| rhs.sort_weight().total_cmp(&lhs.sort_weight()));
        Self { rows }
    }

    ///
    /// The global summary for one codegen.
    ///
    /// The total is the full row count over both codegens, so for a codegen
    /// with undefined deltas it exceeds `improved + regressed`.
    ///
    pub fn summary(&self, codegen: Codegen) -> Summary {
        let deltas: Vec<f64> = self
            .rows
            .iter()
            .filter_map(|row| row.delta(codegen).value())
            .collect();
        let improved = deltas.iter().filter(|value| **value < 0.0).count();
        let regressed = deltas.iter().filter(|value| **value > 0.0).count();
        let average = if deltas.is_empty() {
            None
        } else {
            Some(deltas.iter().sum::<f64>() / deltas.len() as f64)
        };
        Summary {
            codegen,
            total: self.rows.len(),
            improved,
            regressed,
            average,
        }
    }

    ///
    /// Rows with a defined delta for `codegen`, best improvement first,
    /// truncated to [`TOP_IMPROVEMENTS_LIMIT`].
    ///
    pub fn top_improvements(&self, codegen: Codegen) -> Vec<&FunctionRow<'a>> {
        let mut rows: Vec<&FunctionRow<'a>> = self
            .rows
            .iter()
            .filter(|row| row.delta(codegen).value().is_some())
            .collect();
        rows.sort_by(|lhs, rhs| {
            lhs.delta(codegen)
                .ordering_value()
                .total_cmp(&rhs.delta(codegen).ordering_value())
        });
        rows.truncate(TOP_IMPROVEMENTS_LIMIT);
        rows
    }

    ///
    /// Rows with a positive delta for `codegen`, worst regression first.
    ///
    pub fn regressions(&self, codegen: Codegen) -> Vec<&FunctionRow<'a>> {
        let mut rows: Vec<&FunctionRow<'a>> = self
            .rows
            .iter()
            .filter(|row| {
                row.delta(codegen)
                    .value()
                    .map(|value| value > 0.0)
                    .unwrap_or(false)
            })
            .collect();
        rows.sort_by(|lhs, rhs| {
            rhs.delta(codegen)
                .ordering_value()
                .total_cmp(&lhs.delta(codegen).ordering_value())
        });
        rows
    }

    ///
    /// Average per-contract gains for `codegen`, best contract first.
    ///
    /// Each defined per-function delta contributes with its sign inverted,
    /// so a positive gain means the candidate uses less gas.
    ///
    pub fn contract_gains(&self, codegen: Codegen) -> Vec<ContractGain<'a>> {
        let mut per_contract: BTreeMap<&'a str, Vec<f64>> = BTreeMap::new();
        for row in self.rows.iter() {
            if let Some(delta) = row.delta(codegen).value() {
                per_contract
                    .entry(row.selector.contract.as_str())
                    .or_default()
                    .push(-delta);
            }
        }
        let mut gains: Vec<ContractGain<'a>> = per_contract
            .into_iter()
            .map(|(contract, gains)| ContractGain {
                contract,
                average: gains.iter().sum::<f64>() / gains.len() as f64,
            })
            .collect();
        gains.sort_by(|lhs, rhs| rhs.average.total_cmp(&lhs.average));
        gains
    }
}
