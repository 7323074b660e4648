//!
//! Code generation mode under comparison.
//!

use crate::toolchain::Toolchain;

///
/// Code generation mode under comparison.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codegen {
    /// The legacy EVM assembly pipeline.
    EVMLA,
    /// The Yul pipeline, also known as via-ir.
    Yul,
}

impl Codegen {
    /// All codegens in report order.
    pub const ALL: [Self; 2] = [Self::EVMLA, Self::Yul];

    ///
    /// Returns the baseline toolchain for this codegen.
    ///
    pub fn reference(&self) -> Toolchain {
        match self {
            Self::EVMLA => Toolchain::Solc,
            Self::Yul => Toolchain::SolcViaIR,
        }
    }

    ///
    /// Returns the candidate toolchain for this codegen.
    ///
    pub fn candidate(&self) -> Toolchain {
        match self {
            Self::EVMLA => Toolchain::Solx,
            Self::Yul => Toolchain::SolxViaIR,
        }
    }
}

impl std::fmt::Display for Codegen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EVMLA => write!(f, "evmla"),
            Self::Yul => write!(f, "Yul"),
        }
    }
}
