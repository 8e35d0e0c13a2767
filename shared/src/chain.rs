//! # Blockchain Client Configuration
//!
//! Declares which network a wallet client would target and how it would talk
//! to it. The swap front-end only provides this value and logs the configured
//! network; no component reads it to make calls.
//!
//! ## Wire Format
//!
//! ```json
//! {
//!   "chains": [{ "id": 1449000, "name": "XRPL EVM Testnet", "rpc_url": "https://rpc.testnet.xrplevm.org", "testnet": true }],
//!   "transports": { "1449000": { "type": "http" } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ChainConfigError;

/// EVM chain id of the XRPL EVM testnet
pub const XRPL_EVM_TESTNET_ID: u64 = 1_449_000;

/// A network the client may connect to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub id: u64,
    pub name: String,
    /// Default RPC endpoint, used when a transport names no URL
    pub rpc_url: String,
    #[serde(default)]
    pub testnet: bool,
}

impl Chain {
    pub fn xrplevm_testnet() -> Self {
        Self {
            id: XRPL_EVM_TESTNET_ID,
            name: "XRPL EVM Testnet".to_string(),
            rpc_url: "https://rpc.testnet.xrplevm.org".to_string(),
            testnet: true,
        }
    }
}

/// How the client reaches a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transport {
    /// JSON-RPC over HTTP; `None` falls back to the chain's `rpc_url`
    Http {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    WebSocket { url: String },
}

/// Client configuration: declared chains plus one transport per chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub chains: Vec<Chain>,
    pub transports: BTreeMap<u64, Transport>,
}

impl ChainConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ChainConfigError> {
        let config: ChainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that chains are declared once each and every chain has exactly
    /// the transports it needs.
    pub fn validate(&self) -> Result<(), ChainConfigError> {
        if self.chains.is_empty() {
            return Err(ChainConfigError::NoChains);
        }

        for (idx, chain) in self.chains.iter().enumerate() {
            if self.chains[..idx].iter().any(|prev| prev.id == chain.id) {
                return Err(ChainConfigError::DuplicateChain(chain.id));
            }
            if !self.transports.contains_key(&chain.id) {
                return Err(ChainConfigError::MissingTransport(chain.id));
            }
        }

        if let Some(id) = self.transports.keys().find(|id| self.chain(**id).is_none()) {
            return Err(ChainConfigError::UndeclaredTransport(*id));
        }

        Ok(())
    }

    pub fn chain(&self, id: u64) -> Option<&Chain> {
        self.chains.iter().find(|chain| chain.id == id)
    }

    /// The first declared chain.
    pub fn primary(&self) -> Option<&Chain> {
        self.chains.first()
    }

    /// Endpoint URL the transport for `id` resolves to.
    pub fn endpoint(&self, id: u64) -> Option<&str> {
        let chain = self.chain(id)?;
        match self.transports.get(&id)? {
            Transport::Http { url: Some(url) } => Some(url.as_str()),
            Transport::Http { url: None } => Some(chain.rpc_url.as_str()),
            Transport::WebSocket { url } => Some(url.as_str()),
        }
    }
}

impl Default for ChainConfig {
    /// XRPL EVM testnet over the default HTTP transport.
    fn default() -> Self {
        let chain = Chain::xrplevm_testnet();
        let mut transports = BTreeMap::new();
        transports.insert(chain.id, Transport::Http { url: None });

        Self {
            chains: vec![chain],
            transports,
        }
    }
}
