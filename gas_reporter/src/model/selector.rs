//!
//! The (contract, function) measurement key.
//!

///
/// The (contract, function) measurement key.
///
/// Two toolchain reports referring to the same contract and function
/// produce the same selector, which is what the comparison joins on.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Selector {
    /// Contract short name, without the source path prefix.
    pub contract: String,
    /// Function name, usually with the argument type signature.
    pub function: String,
}

impl Selector {
    ///
    /// A shortcut constructor.
    ///
    /// Reduces a namespaced contract identifier such as `src/Token.sol:Token`
    /// to its last colon-separated segment. Identifiers without a colon are
    /// taken as-is.
    ///
    pub fn new(contract_identifier: &str, function: String) -> Self {
        let contract = contract_identifier
            .split(':')
            .next_back()
            .unwrap_or(contract_identifier)
            .to_owned();
        Self { contract, function }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.contract, self.function)
    }
}
