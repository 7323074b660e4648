//!
//! The gas reporter library.
//!

pub mod codegen;
pub mod input;
pub mod model;
pub mod output;
pub mod results;
pub mod toolchain;

pub use crate::codegen::Codegen;
pub use crate::input::contract::ContractReport;
pub use crate::input::error::Error as InputError;
pub use crate::input::function::FunctionReport;
pub use crate::input::InputReport;
pub use crate::model::selector::Selector;
pub use crate::model::MeanTable;
pub use crate::output::table::Table;
pub use crate::output::Markdown;
pub use crate::results::contract_gain::ContractGain;
pub use crate::results::delta::Delta;
pub use crate::results::function_row::FunctionRow;
pub use crate::results::summary::Summary;
pub use crate::results::Results;
pub use crate::toolchain::Toolchain;
