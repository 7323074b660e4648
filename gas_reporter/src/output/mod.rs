//!
//! The Markdown report output.
//!

pub mod table;

use std::path::PathBuf;

use crate::codegen::Codegen;
use crate::results::Results;

use self::table::Table;

///
/// The rendered Markdown report.
///
#[derive(Debug)]
pub struct Markdown {
    /// The report text.
    pub content: String,
}

impl Markdown {
    ///
    /// Writes the report to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        std::fs::write(path.as_path(), self.content)
            .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl From<&Results<'_>> for Markdown {
    fn from(results: &Results<'_>) -> Self {
        let mut content = String::new();

        content.push_str("### 📊 Summary\n\n");
        let mut summary_table = Table::new([
            "Codegen",
            "Total functions",
            "Functions improved",
            "Functions regressed",
            "Average diff (%)",
        ]);
        for codegen in Codegen::ALL {
            let summary = results.summary(codegen);
            summary_table.push([
                summary.codegen.to_string(),
                summary.total.to_string(),
                summary.improved.to_string(),
                summary.regressed.to_string(),
                summary.average_to_string(),
            ]);
        }
        content.push_str(summary_table.to_string().as_str());

        for codegen in Codegen::ALL {
            content.push_str(
                format!("\n### 🚀 Top Improvements Per Function ({codegen})\n\n").as_str(),
            );
            let mut table = Table::new(["Test", "Function", "gas diff, %"]);
            for row in results.top_improvements(codegen) {
                table.push([
                    row.selector.contract.clone(),
                    row.selector.function.clone(),
                    row.delta(codegen).to_string(),
                ]);
            }
            content.push_str(table.to_string().as_str());
        }

        for codegen in Codegen::ALL {
            content.push_str(format!("\n### 🧠 Contract-Level Gas Diff ({codegen})\n\n").as_str());
            let mut table = Table::new(["Test", "gas diff, %"]);
            for gain in results.contract_gains(codegen) {
                table.push([gain.contract.to_owned(), gain.to_string()]);
            }
            content.push_str(table.to_string().as_str());
        }

        for codegen in Codegen::ALL {
            content.push_str(format!("\n### ⚠️ All Regressed Functions ({codegen})\n\n").as_str());
            let mut table = Table::new(["Test", "Function", "gas diff, %"]);
            for row in results.regressions(codegen) {
                table.push([
                    row.selector.contract.clone(),
                    row.selector.function.clone(),
                    row.delta(codegen).to_string(),
                ]);
            }
            content.push_str(table.to_string().as_str());
        }

        Self { content }
    }
}

impl std::fmt::Display for Markdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
