//! # Tokens
//!
//! The fixed set of assets the swap panel can offer on either side.
//!
//! A [`TokenCatalog`] is built once and never changes. Construction rejects
//! catalogs with fewer than two tokens or with duplicate symbols, because the
//! panel needs a distinct token for each side.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwapError};

/// A selectable swap endpoint asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Short identifier, unique within a catalog (e.g. `ETH`)
    pub symbol: String,
    /// Display name (e.g. `Ethereum`)
    pub name: String,
    /// Icon path, resolved by the hosting environment
    pub logo: String,
}

impl Token {
    pub fn new(symbol: &str, name: &str, logo: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            logo: logo.to_string(),
        }
    }
}

/// Ordered, validated token set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCatalog {
    tokens: Vec<Token>,
}

impl TokenCatalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// - [`SwapError::TooFewTokens`] if fewer than two tokens are given
    /// - [`SwapError::DuplicateSymbol`] if two tokens share a symbol
    pub fn new(tokens: Vec<Token>) -> Result<Self> {
        if tokens.len() < 2 {
            return Err(SwapError::TooFewTokens(tokens.len()));
        }

        for (idx, token) in tokens.iter().enumerate() {
            if tokens[..idx].iter().any(|prev| prev.symbol == token.symbol) {
                return Err(SwapError::DuplicateSymbol(token.symbol.clone()));
            }
        }

        Ok(Self { tokens })
    }

    /// All tokens, in catalog order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: a catalog holds at least two tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Look up a token by symbol.
    pub fn find(&self, symbol: &str) -> Option<&Token> {
        self.tokens.iter().find(|token| token.symbol == symbol)
    }

    /// Like [`TokenCatalog::find`], but an unknown symbol is an error.
    pub fn get(&self, symbol: &str) -> Result<&Token> {
        self.find(symbol)
            .ok_or_else(|| SwapError::UnknownToken(symbol.to_string()))
    }

    /// First and second tokens: the panel's initial "from" and "to" sides.
    pub fn default_pair(&self) -> (&Token, &Token) {
        (&self.tokens[0], &self.tokens[1])
    }

    /// Every token except the one with `excluded` as its symbol.
    pub fn without(&self, excluded: &str) -> Vec<&Token> {
        self.tokens
            .iter()
            .filter(|token| token.symbol != excluded)
            .collect()
    }
}

impl Default for TokenCatalog {
    /// ETH, BTC, ADA, XRP.
    fn default() -> Self {
        Self {
            tokens: vec![
                Token::new("ETH", "Ethereum", "/eth.svg"),
                Token::new("BTC", "Bitcoin", "/btc.svg"),
                Token::new("ADA", "Cardano", "/cardano.svg"),
                Token::new("XRP", "Ripple", "/xrp.svg"),
            ],
        }
    }
}

impl<'de> Deserialize<'de> for TokenCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            tokens: Vec<Token>,
        }

        let raw = Raw::deserialize(deserializer)?;
        TokenCatalog::new(raw.tokens).map_err(serde::de::Error::custom)
    }
}
