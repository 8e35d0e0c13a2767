//! # Swap Domain Library
//!
//! Platform-independent types behind the Nuvex swap front-end. The browser
//! crate (`swap-web`) renders these; everything here is plain Rust and is
//! tested natively.
//!
//! ## Structure
//!
//! - **[`token`]**: the fixed token set ([`token::TokenCatalog`])
//! - **[`swap`]**: swap panel state and its transitions ([`swap::SwapPanelState`])
//! - **[`slippage`]**: slippage presets and display helpers
//! - **[`chain`]**: inert blockchain client configuration ([`chain::ChainConfig`])
//! - **[`error`]**: error types
//!
//! ## Usage
//!
//! ```rust
//! use shared::swap::{SwapAction, SwapMode, SwapPanelState, TokenSide};
//!
//! let mut panel = SwapPanelState::default();
//! panel.apply(SwapAction::SelectToken(TokenSide::From, "ADA".to_string())).unwrap();
//! panel.apply(SwapAction::SetMode(SwapMode::Limit)).unwrap();
//!
//! assert_eq!(panel.limit_price_label(), "Pay ADA at price");
//! ```

pub mod chain;
pub mod error;
pub mod slippage;
pub mod swap;
pub mod token;

#[cfg(test)]
mod tests;

pub use chain::{Chain, ChainConfig, Transport};
pub use error::{ChainConfigError, SwapError};
pub use swap::{SwapAction, SwapMode, SwapPanelState, TokenSide};
pub use token::{Token, TokenCatalog};
