//!
//! Benchmark input format.
//!

pub mod contract;
pub mod error;
pub mod function;

use std::path::Path;

use self::contract::ContractReport;
use self::error::Error as InputError;

///
/// One toolchain's benchmark report: either a single contract record
/// or a sequence of them.
///
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum InputReport {
    /// A sequence of contract records.
    Many(Vec<ContractReport>),
    /// A single contract record.
    Single(ContractReport),
}

impl IntoIterator for InputReport {
    type Item = ContractReport;
    type IntoIter = std::vec::IntoIter<ContractReport>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Many(contracts) => contracts.into_iter(),
            Self::Single(contract) => vec![contract].into_iter(),
        }
    }
}

impl TryFrom<&Path> for InputReport {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::MissingFile {
            error,
            path: path.to_path_buf(),
        })?;
        if text.is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let json: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Malformed {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(json)
    }
}
