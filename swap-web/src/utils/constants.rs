//! Application constants

// Routes
pub const ROUTE_LANDING: &str = "/";
pub const ROUTE_SWAP: &str = "/swap";

// Branding
pub const BRAND_NAME: &str = "NUVEX";
pub const BRAND_LOGO: &str = "/logo.png";
pub const PARTNER_LOGO: &str = "/1inch_asset.png";
pub const FOOTER_TEXT: &str = "© 2025 NUVEX. POWERED BY 1INCH PROTOCOL.";

// Sounds
pub const CLICK_SOUND: &str = "/click.mp3";

// Landing page content
pub const SUPPORTED_CHAINS: &[&str] = &["ETHEREUM", "SEPOLIA", "XRP", "BTC", "CARDANO"];
