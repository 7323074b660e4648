//!
//! Compiler toolchain of a benchmark data file.
//!

///
/// Compiler toolchain of a benchmark data file.
///
/// Each toolchain corresponds to exactly one input file in the data directory.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Toolchain {
    /// The reference compiler with the legacy EVM assembly codegen.
    Solc,
    /// The reference compiler with the Yul codegen.
    SolcViaIR,
    /// The LLVM-based compiler with the legacy EVM assembly codegen.
    Solx,
    /// The LLVM-based compiler with the Yul codegen.
    SolxViaIR,
}

impl Toolchain {
    /// All toolchains in loading order.
    pub const ALL: [Self; 4] = [Self::Solc, Self::SolcViaIR, Self::Solx, Self::SolxViaIR];

    ///
    /// Returns the fixed name of the benchmark data file produced for this toolchain.
    ///
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Solc => "solc.json",
            Self::SolcViaIR => "solc--via-ir.json",
            Self::Solx => "solx.json",
            Self::SolxViaIR => "solx--via-ir.json",
        }
    }
}

impl std::fmt::Display for Toolchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solc => write!(f, "solc"),
            Self::SolcViaIR => write!(f, "solc via-ir"),
            Self::Solx => write!(f, "solx"),
            Self::SolxViaIR => write!(f, "solx via-ir"),
        }
    }
}
