//! Blockchain client configuration context
//!
//! Holds the declared [`ChainConfig`]. No component reads it to make calls;
//! it is only logged when the app mounts.

use leptos::prelude::*;
use shared::chain::ChainConfig;

#[derive(Clone, Copy)]
pub struct ChainContext {
    pub config: StoredValue<ChainConfig>,
}

impl ChainContext {
    pub fn new(config: ChainConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn log_target(&self) {
        self.config.with_value(|config| {
            if let Err(e) = config.validate() {
                log::warn!("Invalid chain config: {}", e);
                return;
            }
            if let Some(primary) = config.primary() {
                log::info!("Target network: {}", primary.name);
            }
            for chain in &config.chains {
                log::info!(
                    "Configured chain: {} (id {}) via {}",
                    chain.name,
                    chain.id,
                    config.endpoint(chain.id).unwrap_or("<none>")
                );
            }
        });
    }
}

pub fn provide_chain_context() -> ChainContext {
    let context = ChainContext::new(ChainConfig::default());
    provide_context(context);
    context
}
