//! UI Components

pub mod navbar;
pub mod slippage_control;
pub mod swap_panel;
pub mod token_selector;

pub use navbar::Navbar;
pub use slippage_control::SlippageControl;
pub use swap_panel::SwapPanel;
pub use token_selector::TokenSelector;
