//! # Error Types
//!
//! Errors raised by the swap domain types.
//!
//! Nothing the swap panel UI does can fail: amount, slippage and limit price
//! fields accept any text. Errors only surface through the programmatic API,
//! where a caller can build a bad token catalog, select a token the panel
//! would never offer, or load a malformed chain configuration.
//!
//! ## Error Categories
//!
//! - [`SwapError`]: token catalog construction and token selection
//! - [`ChainConfigError`]: blockchain client configuration validation and parsing

use thiserror::Error;

/// Error type for token catalog and swap panel operations.
///
/// # Example
///
/// ```rust
/// use shared::error::SwapError;
///
/// let err = SwapError::UnknownToken("DOGE".to_string());
/// assert_eq!(err.to_string(), "Unknown token: DOGE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    /// A catalog needs one token per side, so fewer than two entries is rejected.
    #[error("Token catalog needs at least 2 tokens, got {0}")]
    TooFewTokens(usize),

    /// Two catalog entries share a symbol.
    #[error("Duplicate token symbol: {0}")]
    DuplicateSymbol(String),

    /// The symbol is not part of the catalog.
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// The token is already held by the opposite side of the panel.
    #[error("Token {0} is already selected on the other side")]
    SameToken(String),
}

/// Error type for [`crate::chain::ChainConfig`] validation.
#[derive(Debug, Error)]
pub enum ChainConfigError {
    #[error("Chain config declares no chains")]
    NoChains,

    #[error("Chain {0} is declared more than once")]
    DuplicateChain(u64),

    #[error("Chain {0} has no transport")]
    MissingTransport(u64),

    #[error("Transport configured for undeclared chain {0}")]
    UndeclaredTransport(u64),

    #[error("Failed to parse chain config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for `Result<T, SwapError>`.
pub type Result<T> = std::result::Result<T, SwapError>;
