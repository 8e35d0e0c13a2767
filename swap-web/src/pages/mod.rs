//! Page modules

pub mod landing;
pub mod swap;

pub use landing::LandingPage;
pub use swap::SwapPage;
